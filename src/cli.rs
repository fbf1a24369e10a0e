use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "serviceaccess",
    version,
    about = "Read connection parameters from a service access file"
)]
pub struct Cli {
    #[arg(short = 'f', long, help = "Service access file (default: $DES_SERVICES or ~/.desservices.ini)")]
    pub file: Option<PathBuf>,
    #[arg(short = 's', long, help = "Section to read (default: $DES_<TAG>_SECTION)")]
    pub section: Option<String>,
    #[arg(short = 't', long, help = "Service tag selecting defaults and checks, e.g. db")]
    pub tag: Option<String>,
    #[arg(long, help = "Retry opening the file to wait for automounted filesystems")]
    pub retry: bool,
    #[arg(long, requires = "retry", help = "Open attempts when retrying")]
    pub attempts: Option<u32>,
    #[arg(long, value_name = "SECS", requires = "retry", help = "Seconds between open attempts")]
    pub retry_delay: Option<u64>,
    #[arg(long, help = "Validate permissions and keys before printing")]
    pub check: bool,
    #[arg(long, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(help = "Templates to print, with %(key)s placeholders")]
    pub templates: Vec<String>,
}
