use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// Blocks between open attempts.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, delay: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, delay: Duration) {
        thread::sleep(delay);
    }
}

/// Best-effort poke at a path so an automounter brings its filesystem up
/// before the next open attempt. Implementations must swallow their own
/// failures.
pub trait AutomountNudge: Send + Sync {
    fn nudge(&self, path: &Path);
}

/// Runs `ls -l <path>` and discards the result.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListingNudge;

impl AutomountNudge for ListingNudge {
    fn nudge(&self, path: &Path) {
        let status = Command::new("ls")
            .arg("-l")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        if let Err(err) = status {
            tracing::debug!(error = %err, "automount nudge failed");
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoNudge;

impl AutomountNudge for NoNudge {
    fn nudge(&self, _path: &Path) {}
}
