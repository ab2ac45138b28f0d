//! Production [`SystemQuery`] backed by sysfs and external commands.
//!
//! Interface names come from `/sys/class/net`; everything else is the
//! textual output of `ip`, `iw` and `hostname`. Every command runs with a
//! short fixed timeout so a wedged tool cannot stall the caller's tick.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::{QueryError, SystemQuery};
use crate::config::defaults;

/// Poll cadence while waiting for a child process to finish.
const REAP_POLL: Duration = Duration::from_millis(20);

/// The loopback interface, always excluded from enumeration.
const LOOPBACK: &str = "lo";

/// System query implementation that shells out to the host's network tools.
#[derive(Debug, Clone)]
pub struct HostQuery {
    sysfs_root: PathBuf,
    timeout: Duration,
}

impl HostQuery {
    /// Creates a query backed by `/sys/class/net` with the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sysfs_root: PathBuf::from("/sys/class/net"),
            timeout: defaults::query_timeout(),
        }
    }

    /// Overrides the sysfs directory used for interface enumeration.
    #[must_use]
    pub fn with_sysfs_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.sysfs_root = path.into();
        self
    }

    /// Overrides the per-command timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs one external command to completion within the timeout and
    /// returns its stdout.
    fn run_command(&self, program: &str, args: &[&str]) -> Result<String, QueryError> {
        let command = command_line(program, args);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| QueryError::Spawn {
                command: command.clone(),
                source,
            })?;

        // Drain stdout from a separate thread while waiting, so a tool
        // that fills the pipe buffer still runs to completion instead of
        // blocking until the timeout.
        let reader = child.stdout.take().map(|mut stdout| {
            thread::spawn(move || {
                let mut raw = Vec::new();
                stdout.read_to_end(&mut raw).map(|_| raw)
            })
        });

        let status = self.wait_bounded(&mut child, &command)?;
        let stdout = collect_stdout(reader, &command)?;

        if !status.success() {
            return Err(QueryError::CommandFailed { command, status });
        }

        Ok(stdout)
    }

    /// Waits for the child within the timeout, killing and reaping it on
    /// expiry.
    fn wait_bounded(&self, child: &mut Child, command: &str) -> Result<ExitStatus, QueryError> {
        let deadline = Instant::now() + self.timeout;

        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {}
                Err(source) => {
                    return Err(QueryError::Output {
                        command: command.to_string(),
                        source,
                    });
                }
            }

            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(QueryError::Timeout {
                    command: command.to_string(),
                    timeout: self.timeout,
                });
            }

            thread::sleep(REAP_POLL);
        }
    }
}

impl Default for HostQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemQuery for HostQuery {
    fn list_interfaces(&self) -> Result<Vec<String>, QueryError> {
        let entries =
            std::fs::read_dir(&self.sysfs_root).map_err(|source| QueryError::SysfsUnreadable {
                path: self.sysfs_root.clone(),
                source,
            })?;

        // Unreadable entries are skipped rather than failing the listing.
        Ok(entries
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name != LOOPBACK)
            .collect())
    }

    fn address_info(&self, iface: &str) -> Result<String, QueryError> {
        self.run_command("ip", &["addr", "show", "dev", iface])
    }

    fn is_wireless(&self, iface: &str) -> bool {
        self.run_command("iw", &["dev", iface, "info"]).is_ok()
    }

    fn link_info(&self, iface: &str) -> Result<String, QueryError> {
        self.run_command("iw", &["dev", iface, "link"])
    }

    fn hostname(&self) -> Result<String, QueryError> {
        self.run_command("hostname", &[])
            .map(|output| output.trim().to_string())
    }
}

/// Joins the stdout reader thread, decoding lossily so stray non-UTF-8
/// bytes cannot fail a pass.
fn collect_stdout(
    reader: Option<thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    command: &str,
) -> Result<String, QueryError> {
    let raw = match reader {
        Some(handle) => handle
            .join()
            .unwrap_or_else(|_| Err(std::io::Error::other("stdout reader thread panicked")))
            .map_err(|source| QueryError::Output {
                command: command.to_string(),
                source,
            })?,
        None => Vec::new(),
    };

    Ok(String::from_utf8_lossy(&raw).into_owned())
}

fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}
