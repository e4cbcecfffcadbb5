// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;
use crate::error::Error;

/// How each super-row is rendered as physical `<tr>` bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowTemplate {
    /// Three bands, one `<td>` per record: names, attributes, images.
    Simple,
    /// Paired name/attribute cells in one band, then span-merged image and
    /// caption bands. Slot (0,0) carries the header labels and captions.
    WithHeader,
}

/// Partial-final-super-row policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsPolicy {
    /// Skip cells past the last record; the row is still closed.
    Checked,
    /// Legacy mode: no skipping. Overrunning the record list is fatal.
    /// Only valid when the record count fills the grid exactly.
    Exact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutOptions {
    pub columns: usize,
    pub template: RowTemplate,
    pub bounds: BoundsPolicy,
    /// Header labels for slot (0,0), WithHeader only.
    pub labels: (String, String),
    /// colspan for the merged image/caption cells, WithHeader only.
    pub span: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            template: RowTemplate::Simple,
            bounds: BoundsPolicy::Checked,
            labels: (s!(HEADER_NAME), s!(HEADER_ATTR)),
            span: PAIR_SPAN,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> Result<(), Error> {
        if self.columns < 1 {
            return Err(Error::Config(s!("column count must be at least 1")));
        }
        if self.span < 1 {
            return Err(Error::Config(s!("cell span must be at least 1")));
        }
        Ok(())
    }

    /// True when slot (0,0) is consumed by the header labels rather
    /// than a record.
    pub fn header_offset(&self) -> bool {
        self.template == RowTemplate::WithHeader
    }
}

/// One invocation's worth of settings, CLI-filled.
#[derive(Clone, Debug)]
pub struct Params {
    pub input: PathBuf,
    /// None → stdout. A dir hint ("out/") joins DEFAULT_OUT_FILE.
    pub out: Option<PathBuf>,
    pub layout: LayoutOptions,
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            out: None,
            layout: LayoutOptions::default(),
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
