use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Locations of the server artifacts the collector reads.
///
/// Defaults point at the running server's well-known paths; a TOML paths
/// file or CLI flags can redirect any of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerPaths {
    /// Daemon pid file; its existence gates the whole collection.
    pub pid_file: PathBuf,
    /// Lease database.
    pub leases_file: PathBuf,
    /// Daemon-generated runtime status file.
    pub status_file: PathBuf,
    /// Server configuration file.
    pub conf_file: PathBuf,
}

impl Default for ServerPaths {
    fn default() -> Self {
        Self {
            pid_file: PathBuf::from("/var/run/dhcpd.pid"),
            leases_file: PathBuf::from("/var/log/dhcpd.leases"),
            status_file: PathBuf::from("/var/log/dhcpd.status"),
            conf_file: PathBuf::from("/etc/dhcpd.conf"),
        }
    }
}

/// Errors returned when loading a paths file.
#[derive(Debug, Error)]
pub enum PathsLoadError {
    #[error("failed to read paths file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse paths file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load [`ServerPaths`] from a TOML file. Every key is optional and falls
/// back to the built-in default.
pub fn load_paths_file(path: &Path) -> Result<ServerPaths, PathsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| PathsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    toml::from_str(&raw).map_err(|source| PathsLoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}
