// src/error.rs
// One error type for the whole pipeline. The CLI layer reports these
// via color-eyre; nothing in here retries or recovers.

use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    /// Input line with fewer than two whitespace-separated fields.
    /// `line` is 1-based, `text` the trimmed offending line. The file
    /// is attached once the source path is known.
    Format { file: Option<PathBuf>, line: usize, text: String },

    /// Invalid layout/config value (column count, span, flag values).
    Config(String),

    /// Out-of-range slot access under the legacy exact-fill mode.
    Index { index: usize, len: usize },

    /// Filesystem or stream failure, with the path when one applies.
    Io { path: Option<PathBuf>, source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format { file: Some(p), line, text } => {
                write!(f, "{}:{line}: expected `<name> <attribute>`, got {text:?}", p.display())
            }
            Error::Format { file: None, line, text } => {
                write!(f, "line {line}: expected `<name> <attribute>`, got {text:?}")
            }
            Error::Config(msg) => write!(f, "config: {msg}"),
            Error::Index { index, len } => {
                write!(f, "record index {index} out of range ({len} records); \
                           exact-fill mode requires a completely full grid")
            }
            Error::Io { path: Some(p), source } => {
                write!(f, "{}: {source}", p.display())
            }
            Error::Io { path: None, source } => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io { path: None, source: e }
    }
}

impl Error {
    pub fn io_at(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: Some(path.into()), source }
    }
}
