use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::db;
use crate::error::{AccessError, AccessResult};
use crate::profile::ServiceProfile;
use crate::tag::{self, Tag};

/// A permission bit that must not be set on a service access file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionFault {
    OtherRead,
    OtherWrite,
    GroupWrite,
}

impl PermissionFault {
    pub const ALL: [PermissionFault; 3] = [Self::OtherRead, Self::OtherWrite, Self::GroupWrite];

    pub fn mode_bit(self) -> u32 {
        match self {
            Self::OtherRead => 0o004,
            Self::OtherWrite => 0o002,
            Self::GroupWrite => 0o020,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OtherRead => "other_read",
            Self::OtherWrite => "other_write",
            Self::GroupWrite => "group_write",
        }
    }

    /// Every fault present in `mode`, in declaration order.
    pub fn in_mode(mode: u32) -> Vec<PermissionFault> {
        Self::ALL
            .into_iter()
            .filter(|fault| mode & fault.mode_bit() != 0)
            .collect()
    }
}

impl fmt::Display for PermissionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks the file permissions of `profile`, and for the `db` tag its keys.
pub fn check(profile: &ServiceProfile, tag: Option<&Tag>) -> AccessResult<()> {
    check_permissions(profile.resolved_file())?;
    if tag::is_db(tag) {
        db::check_fields(profile)?;
    }

    Ok(())
}

pub fn check_permissions(path: &Path) -> AccessResult<()> {
    let faults = permission_faults(path)?;
    if faults.is_empty() {
        return Ok(());
    }

    tracing::debug!(path = %path.display(), ?faults, "service access file is too open");
    Err(AccessError::InsecurePermissions {
        path: path.to_path_buf(),
        faults,
    })
}

#[cfg(unix)]
fn permission_faults(path: &Path) -> AccessResult<Vec<PermissionFault>> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path).map_err(|source| AccessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(PermissionFault::in_mode(metadata.permissions().mode()))
}

#[cfg(not(unix))]
fn permission_faults(path: &Path) -> AccessResult<Vec<PermissionFault>> {
    std::fs::metadata(path).map_err(|source| AccessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_only_modes_are_clean() {
        assert!(PermissionFault::in_mode(0o600).is_empty());
        assert!(PermissionFault::in_mode(0o640).is_empty());
        assert!(PermissionFault::in_mode(0o700).is_empty());
    }

    #[test]
    fn names_every_violated_bit() {
        assert_eq!(
            PermissionFault::in_mode(0o666),
            [
                PermissionFault::OtherRead,
                PermissionFault::OtherWrite,
                PermissionFault::GroupWrite
            ]
        );
        assert_eq!(PermissionFault::in_mode(0o604), [PermissionFault::OtherRead]);
        assert_eq!(PermissionFault::in_mode(0o620), [PermissionFault::GroupWrite]);
    }

    #[test]
    fn group_read_and_execute_are_allowed() {
        assert!(PermissionFault::in_mode(0o651).is_empty());
    }
}
