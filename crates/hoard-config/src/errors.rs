use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read address file {}", .path.display())]
    ReadAddressFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write config file {}", .path.display())]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file {}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// None of the lookup locations held a config file.
    #[error("no config file found, searched {searched:?}")]
    NotFound { searched: Vec<PathBuf> },
}
