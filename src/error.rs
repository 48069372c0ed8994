use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 启动阶段可能出现的错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read dataset {}: {source}", path.display())]
    DatasetRead { path: PathBuf, source: io::Error },

    #[error("malformed joke dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("could not determine user data directory")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, AppError>;
