// Error types for the reporter library

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to render config: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    #[error("failed to read events: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid event on line {line}: {source}")]
    Event {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize report: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("report is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, ReporterError>;
