// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;

pub mod error;
pub mod file;
pub mod grid;
pub mod input;
pub mod log;
pub mod runner;
