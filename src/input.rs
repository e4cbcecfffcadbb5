// src/input.rs
// Pattern file parsing. One record per line: `<name> <attribute>`,
// attribute is the last whitespace field, name is everything before it
// (names may contain spaces and commas).

use std::{fs, path::Path};

use crate::core::sanitize::strip_commas;
use crate::config::consts::{IMG_DIR, IMG_EXT};
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub attribute: String,
}

impl Record {
    /// Relative image path, `img/<name-without-commas>.png`.
    /// Derived on demand; never stored.
    pub fn image_path(&self) -> String {
        join!(IMG_DIR, "/", &strip_commas(&self.name), ".", IMG_EXT)
    }
}

/// Parse the whole input text. Lines are trimmed before splitting.
/// Any line without at least two fields aborts with its line number.
pub fn parse_records(text: &str) -> Result<Vec<Record>, Error> {
    let mut records = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let Some((name, attribute)) = line.rsplit_once(' ') else {
            return Err(Error::Format { file: None, line: i + 1, text: s!(line) });
        };
        let name = name.trim_end();
        if name.is_empty() {
            return Err(Error::Format { file: None, line: i + 1, text: s!(line) });
        }
        records.push(Record { name: s!(name), attribute: s!(attribute) });
    }
    Ok(records)
}

/// Read and parse a pattern file in one go. The file is small enough
/// that streaming buys nothing.
pub fn read_records(path: &Path) -> Result<Vec<Record>, Error> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io_at(path, e))?;
    parse_records(&text).map_err(|e| match e {
        Error::Format { file: None, line, text } => {
            Error::Format { file: Some(path.to_path_buf()), line, text }
        }
        other => other,
    })
}
