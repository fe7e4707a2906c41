use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generators
#[derive(Error, Debug)]
pub enum CodeGeneratorError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
