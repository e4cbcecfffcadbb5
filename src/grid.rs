// src/grid.rs
// The grid pagination and cell layout. Records flow into super-rows of
// `columns` slots; each super-row renders as a fixed set of physical
// `<tr>` bands depending on the template. All column counts and both
// templates run through this one path. No per-variant copies.

use std::collections::VecDeque;
use std::io::Write;

use crate::config::consts::{CAPTION_LABEL, IMAGE_CAPTION};
use crate::config::options::{BoundsPolicy, LayoutOptions, RowTemplate};
use crate::core::html::{img, td, td_span};
use crate::error::Error;
use crate::input::Record;

#[derive(Clone, Copy)]
pub struct Grid<'a> {
    records: &'a [Record],
    layout: &'a LayoutOptions,
}

impl<'a> Grid<'a> {
    pub fn new(records: &'a [Record], layout: &'a LayoutOptions) -> Result<Self, Error> {
        layout.validate()?;
        Ok(Self { records, layout })
    }

    /// `ceil(slots / columns)`, where WithHeader spends one slot on the
    /// header labels.
    pub fn super_rows(&self) -> usize {
        let slots = self.records.len() + self.layout.header_offset() as usize;
        slots.div_ceil(self.layout.columns)
    }

    /// Lazy line sequence: `<table>`, the super-row bands, `</table>`.
    /// Rendering twice yields byte-identical lines.
    pub fn lines(&self) -> Lines<'a> {
        Lines {
            grid: *self,
            total: self.super_rows(),
            next_sr: 0,
            opened: false,
            closed: false,
            failed: false,
            buf: VecDeque::new(),
        }
    }

    /// Drain `lines()` into a writer, one line at a time. Output written
    /// before a failure stays written; nothing is transactional here.
    pub fn render_to<W: Write>(&self, mut w: W) -> Result<(), Error> {
        for line in self.lines() {
            writeln!(w, "{}", line?)?;
        }
        w.flush()?;
        Ok(())
    }

    /// Resolve a data slot to a record. `Checked` turns overruns into
    /// omitted cells; `Exact` makes them fatal.
    fn record_at(&self, slot: usize) -> Result<Option<&'a Record>, Error> {
        if slot < self.records.len() {
            return Ok(Some(&self.records[slot]));
        }
        match self.layout.bounds {
            BoundsPolicy::Checked => Ok(None),
            BoundsPolicy::Exact => Err(Error::Index {
                index: slot,
                len: self.records.len(),
            }),
        }
    }

    fn super_row(&self, i: usize) -> Result<Vec<String>, Error> {
        match self.layout.template {
            RowTemplate::Simple => self.simple_bands(i),
            RowTemplate::WithHeader => self.labeled_bands(i),
        }
    }

    /// Three bands, one `<td>` per present record: names, attributes,
    /// images. Missing cells in the final super-row are simply omitted;
    /// the row is closed regardless.
    fn simple_bands(&self, i: usize) -> Result<Vec<String>, Error> {
        let c = self.layout.columns;
        let mut out = Vec::new();

        out.push(s!("<tr>"));
        for j in 0..c {
            if let Some(r) = self.record_at(c * i + j)? {
                out.push(td(&r.name));
            }
        }
        out.push(s!("</tr>"));

        out.push(s!("<tr>"));
        for j in 0..c {
            if let Some(r) = self.record_at(c * i + j)? {
                out.push(td(&r.attribute));
            }
        }
        out.push(s!("</tr>"));

        out.push(s!("<tr>"));
        for j in 0..c {
            if let Some(r) = self.record_at(c * i + j)? {
                out.push(td(&img(&r.image_path())));
            }
        }
        out.push(s!("</tr>"));

        Ok(out)
    }

    /// Paired name/attribute cells, then span-merged image and caption
    /// bands. Slot (0,0) holds the header labels instead of a record,
    /// shifting every data index down by one.
    fn labeled_bands(&self, i: usize) -> Result<Vec<String>, Error> {
        let c = self.layout.columns;
        let span = self.layout.span;
        let mut out = Vec::new();

        out.push(s!("<tr>"));
        for j in 0..c {
            if i == 0 && j == 0 {
                out.push(td(&self.layout.labels.0));
                out.push(td(&self.layout.labels.1));
                continue;
            }
            if let Some(r) = self.record_at(c * i + j - 1)? {
                out.push(td(&r.name));
                out.push(td(&r.attribute));
            }
        }
        out.push(s!("</tr>"));

        out.push(s!("<tr>"));
        for j in 0..c {
            if i == 0 && j == 0 {
                out.push(td_span(span, IMAGE_CAPTION));
                continue;
            }
            if let Some(r) = self.record_at(c * i + j - 1)? {
                out.push(td_span(span, &img(&r.image_path())));
            }
        }
        out.push(s!("</tr>"));

        // Spacer band. The label cell is the only one carrying text.
        out.push(s!("<tr>"));
        for j in 0..c {
            if i == 0 && j == 0 {
                out.push(td_span(span, CAPTION_LABEL));
                continue;
            }
            if self.record_at(c * i + j - 1)?.is_some() {
                out.push(td_span(span, ""));
            }
        }
        out.push(s!("</tr>"));

        Ok(out)
    }
}

/// Line iterator over a grid. Buffers one super-row at a time; an
/// `Exact`-mode overrun surfaces as `Err` and fuses the iterator.
pub struct Lines<'a> {
    grid: Grid<'a>,
    total: usize,
    next_sr: usize,
    opened: bool,
    closed: bool,
    failed: bool,
    buf: VecDeque<String>,
}

impl Iterator for Lines<'_> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if !self.opened {
            self.opened = true;
            return Some(Ok(s!("<table>")));
        }
        loop {
            if let Some(line) = self.buf.pop_front() {
                return Some(Ok(line));
            }
            if self.next_sr < self.total {
                let sr = self.next_sr;
                self.next_sr += 1;
                match self.grid.super_row(sr) {
                    Ok(lines) => self.buf = lines.into(),
                    Err(e) => {
                        self.failed = true;
                        return Some(Err(e));
                    }
                }
            } else if !self.closed {
                self.closed = true;
                return Some(Ok(s!("</table>")));
            } else {
                return None;
            }
        }
    }
}
