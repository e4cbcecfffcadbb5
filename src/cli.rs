// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{BoundsPolicy, Params, RowTemplate};
use crate::error::Error;
use crate::runner;

pub fn run() -> Result<(), Error> {
    let mut params = Params::new();
    parse_cli(&mut params, env::args().skip(1))?;

    let summary = runner::run(&params)?;
    if let Some(path) = &summary.out {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

fn parse_cli(params: &mut Params, mut args: impl Iterator<Item = String>) -> Result<(), Error> {
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--in" => {
                let v = args.next().ok_or(missing("--in"))?;
                params.input = PathBuf::from(v); }
            "-o" | "--out" => {
                let v = args.next().ok_or(missing("--out"))?;
                params.out = Some(PathBuf::from(v)); }
            "-c" | "--columns" => {
                let v = args.next().ok_or(missing("--columns"))?;
                params.layout.columns = v.parse().map_err(|_| {
                    Error::Config(format!("invalid column count: {v}"))
                })?; }
            "--template" => {
                let v = args.next().ok_or(missing("--template"))?;
                params.layout.template = match v.to_ascii_lowercase().as_str() {
                    "simple" => RowTemplate::Simple,
                    "header" => RowTemplate::WithHeader,
                    other => return Err(Error::Config(format!("unknown template: {other}"))),
                };}
            "--labels" => {
                let v = args.next().ok_or(missing("--labels"))?;
                params.layout.labels = parse_labels(&v)?; }
            "--exact" => params.layout.bounds = BoundsPolicy::Exact,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(Error::Config(format!("unknown arg: {a}"))),
        }
    }

    params.layout.validate()
}

fn missing(flag: &str) -> Error {
    Error::Config(format!("missing value for {flag}"))
}

/// "Name,Length" → ("Name", "Length"). Exactly two labels; a third
/// comma is rejected rather than folded into the second label.
fn parse_labels(s: &str) -> Result<(String, String), Error> {
    let mut parts = s.split(',');
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::Config(format!(
            "expected exactly two comma-separated labels, got {s:?}"
        )));
    };
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return Err(Error::Config(s!("header labels must be non-empty")));
    }
    Ok((s!(a), s!(b)))
}
