//! Error types for system queries.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Error type for a single system query.
///
/// Describes what went wrong without dictating recovery strategy.
/// The monitor converts each failure into a degraded snapshot field.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The external command could not be launched.
    #[error("Failed to launch '{command}': {source}")]
    Spawn {
        /// The command line that failed to launch.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The external command did not finish within the query timeout.
    ///
    /// The child process is killed and reaped before this is returned;
    /// timeout expiry is ordinary failure, not a fault.
    #[error("'{command}' did not finish within {timeout:?}")]
    Timeout {
        /// The command line that timed out.
        command: String,
        /// The timeout that expired.
        timeout: Duration,
    },

    /// The external command finished with a non-success status.
    #[error("'{command}' exited with {status}")]
    CommandFailed {
        /// The command line that failed.
        command: String,
        /// The exit status reported by the OS.
        status: ExitStatus,
    },

    /// The external command's output could not be collected.
    #[error("Failed to read output of '{command}': {source}")]
    Output {
        /// The command line whose output was lost.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The interface listing source could not be read.
    #[error("Failed to list interfaces under '{}': {source}", path.display())]
    SysfsUnreadable {
        /// Path of the listing directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn spawn_displays_command_and_source() {
        let error = QueryError::Spawn {
            command: "iw dev wlan0 info".to_string(),
            source: std::io::Error::other("no such file"),
        };

        assert!(error.to_string().contains("iw dev wlan0 info"));
        assert!(error.source().is_some());
    }

    #[test]
    fn timeout_displays_command_and_duration() {
        let error = QueryError::Timeout {
            command: "ip addr show dev eth0".to_string(),
            timeout: Duration::from_secs(2),
        };

        let message = error.to_string();
        assert!(message.contains("ip addr show dev eth0"));
        assert!(message.contains("2s"));
    }

    #[test]
    fn sysfs_unreadable_displays_path() {
        let error = QueryError::SysfsUnreadable {
            path: PathBuf::from("/sys/class/net"),
            source: std::io::Error::other("permission denied"),
        };

        assert!(error.to_string().contains("/sys/class/net"));
        assert!(error.source().unwrap().to_string().contains("permission"));
    }
}
