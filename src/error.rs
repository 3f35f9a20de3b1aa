use std::path::PathBuf;
use thiserror::Error;

/// Ways a single document can fail to load.
///
/// None of these stop an analysis: the document is kept with an empty
/// frequency map and the error is logged.
#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("error opening file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error extracting text from {}: {message}", path.display())]
    Extract { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
