#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const WELLFORMED: &str = "
;
;  initial comments in file
;comment line with comment marker not in column 1 not allowed
;

[db-maximal]
USER=maximal_user
PASSWD  =   maximal_passwd
name    =   maximal_name_1    ; if repeated last name wins
name    =   maximal_name      ; if repeated key, last one wins
Sid     =   maximal_sid       ;comment glued onto value not allowed
type    =   POSTgres
server  =   maximal_server

[db-minimal]
USER    =   Minimal_user
PASSWD  =   Minimal_passwd
name    =   Minimal_name
sid     =   Minimal_sid
server  =   Minimal_server

[db-extra]
serverr = sevrver   ; example of mis-spelled keyword

[db-empty]
; empty section
";

/// Writes `text` to `dir/name` with the given mode.
pub fn write_services(dir: &Path, name: &str, text: &str, mode: u32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("write services file");
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("chmod services file");
    path
}

pub fn protected(text: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = write_services(dir.path(), "wellformed.ini", text, 0o600);
    (dir, path)
}
