use std::io;
use std::path::PathBuf;

use crate::components::ProviderError;
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
