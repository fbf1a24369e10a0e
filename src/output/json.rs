use serde::Serialize;

use crate::error::AccessResult;

pub fn print<T: Serialize>(value: &T) -> AccessResult<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}
