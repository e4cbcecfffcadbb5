// src/runner.rs
// One-shot batch transform: read the pattern file, render the grid,
// stream lines into the sink. No retry, no cleanup of partial output.

use std::path::PathBuf;

use crate::config::options::Params;
use crate::error::Error;
use crate::file::Sink;
use crate::grid::Grid;
use crate::input;
use crate::logf;

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub records: usize,
    pub super_rows: usize,
    pub out: Option<PathBuf>,
}

pub fn run(params: &Params) -> Result<RunSummary, Error> {
    let records = input::read_records(&params.input)?;
    let grid = Grid::new(&records, &params.layout)?;

    let mut sink = Sink::open(params.out.as_deref())?;
    grid.render_to(&mut sink)?;

    let summary = RunSummary {
        records: records.len(),
        super_rows: grid.super_rows(),
        out: sink.path().map(|p| p.to_path_buf()),
    };
    logf!(
        "rendered {} records into {} super-rows ({} columns) from {}",
        summary.records,
        summary.super_rows,
        params.layout.columns,
        params.input.display()
    );
    Ok(summary)
}
