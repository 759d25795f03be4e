use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An odd number of `**`, `_` or `` ` `` occurrences in one inline scan.
    #[error("unmatched delimiter {delimiter:?}: found {count} occurrence(s) in {text:?}")]
    MalformedDelimiter {
        delimiter: String,
        count: usize,
        text: String,
    },

    /// The output tree broke the content/children invariant. Always a bug.
    #[error("malformed <{tag}> node: {reason}")]
    Structure { tag: String, reason: String },

    #[error("markdown document does not contain an h1 header")]
    MissingTitle,

    #[error("unsupported block kind: {0}")]
    UnsupportedBlockKind(String),

    #[error("not a heading block: {0:?}")]
    MalformedHeading(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Copying would clear or recurse into its own source.
    #[error("{dest} and {src} overlap")]
    OverlappingDirs { src: PathBuf, dest: PathBuf },

    #[error("failed to parse config file at {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
