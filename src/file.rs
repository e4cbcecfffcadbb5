// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_OUT_FILE;
use crate::error::Error;

/// Where a render run writes its lines.
pub enum Sink {
    Stdout(io::Stdout),
    File(PathBuf, BufWriter<File>),
}

impl Sink {
    /// No `-o` → stdout. A path with a dir hint (trailing separator) or
    /// an existing directory gets the default filename joined on.
    pub fn open(out: Option<&Path>) -> Result<Sink, Error> {
        let Some(hint) = out else {
            return Ok(Sink::Stdout(io::stdout()));
        };
        let path = resolve_out_path(hint)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        let file = File::create(&path).map_err(|e| Error::io_at(&path, e))?;
        Ok(Sink::File(path, BufWriter::new(file)))
    }

    /// Final file path, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Sink::Stdout(_) => None,
            Sink::File(p, _) => Some(p),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(s) => s.write(buf),
            Sink::File(_, w) => w.write(buf),
        }
    }
    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(s) => s.flush(),
            Sink::File(_, w) => w.flush(),
        }
    }
}

pub fn resolve_out_path(hint: &Path) -> Result<PathBuf, Error> {
    let p: PathBuf = normalize_separators(&hint.to_string_lossy()).into();
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(DEFAULT_OUT_FILE))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Config(format!(
            "path exists but is not a directory: {}", dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io_at(dir, e))?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
