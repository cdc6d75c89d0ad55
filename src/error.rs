use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BudError {
    #[error("Unable to open '{}'", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input")]
    ReadInput(#[source] std::io::Error),

    #[error("Failed to write output")]
    WriteOutput(#[source] std::io::Error),

    #[error("Failed to read {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
