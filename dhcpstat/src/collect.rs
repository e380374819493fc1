use thiserror::Error;

use crate::paths::ServerPaths;
use crate::stats::DhcpStats;
use crate::{conf, leases, status};

/// Errors surfaced by [`collect`].
///
/// The three scan steps themselves cannot fail: a data file that is missing
/// or unreadable simply contributes nothing. Only the precondition check
/// produces a caller-visible reason.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectError {
    /// The daemon pid file was absent.
    #[error("dhcp server is not running")]
    ServerNotRunning,
}

/// Gather pool statistics from the server's on-disk artifacts.
///
/// Scans run in a fixed order against one shared aggregate: leases first
/// (which creates the pools), then status counters, then configured ranges.
pub fn collect(paths: &ServerPaths) -> Result<DhcpStats, CollectError> {
    if !paths.pid_file.exists() {
        return Err(CollectError::ServerNotRunning);
    }

    let mut stats = DhcpStats::new();
    leases::scan_file(&paths.leases_file, &mut stats);
    status::scan_file(&paths.status_file, &mut stats);
    conf::scan_file(&paths.conf_file, &mut stats);

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::{collect, CollectError};
    use crate::paths::ServerPaths;

    #[test]
    fn absent_pid_file_reports_server_not_running() {
        let paths = ServerPaths {
            pid_file: "/nonexistent/dhcpd.pid".into(),
            ..ServerPaths::default()
        };

        let err = collect(&paths).expect_err("collect should fail");
        assert_eq!(err, CollectError::ServerNotRunning);
        assert_eq!(err.to_string(), "dhcp server is not running");
    }
}
