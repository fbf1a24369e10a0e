use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validate::PermissionFault;

pub type AccessResult<T> = Result<T, AccessError>;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("faulty section: {}", section.as_deref().unwrap_or("None"))]
    BadSection { section: Option<String> },
    #[error("cannot open service access file {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no section '{section}' in service access file {}", path.display())]
    NoSuchSection { section: String, path: PathBuf },
    #[error("faulty permissions on {}: {}", path.display(), join_faults(faults))]
    InsecurePermissions {
        path: PathBuf,
        faults: Vec<PermissionFault>,
    },
    #[error("faulty keys: missing [{}] extra [{}]", missing.join(", "), extra.join(", "))]
    InvalidFields {
        missing: Vec<String>,
        extra: Vec<String>,
    },
    /// Never carries the offending line, which may hold a password.
    #[error("syntax error in {} line {line}: {message}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        message: &'static str,
    },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid template: {0}")]
    InvalidTemplate(String),
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_faults(faults: &[PermissionFault]) -> String {
    faults
        .iter()
        .map(|fault| fault.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
