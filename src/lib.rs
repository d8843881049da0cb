//! `bookkit` — authoring support tools for the BCC lattice book
//!
//! Two one-shot batch tools used while building the book:
//! a figure generator that renders the benchmark bar charts referenced
//! from Appendix C, and an index generator that scans the chapter
//! markdown for a fixed vocabulary of domain terms and regenerates the
//! back-matter index page.

pub mod cli;
pub mod error;
pub mod figures;
pub mod index;
pub mod observability;
