use std::io;
use std::path::PathBuf;

/// Errors raised while reading input or scanning a corpus.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The corpus directory is missing, not a directory, or cannot be listed.
    #[error("cannot read directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A document could not be opened or a read failed part way through.
    #[error("cannot read document {}: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("missing input line: {0}")]
    MissingInput(&'static str),
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
    /// A concurrent scan worker panicked or was cancelled.
    #[error("scan worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
