//! Command-line interface for `bookkit`.

pub mod args;
pub mod commands;
