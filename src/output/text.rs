use crate::error::AccessResult;

/// Empty blocks print nothing rather than a blank line.
pub fn print_block(block: &str) -> AccessResult<()> {
    if !block.is_empty() {
        println!("{block}");
    }
    Ok(())
}
