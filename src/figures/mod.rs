//! Benchmark figure generation.
//!
//! Renders the three fixed bar charts referenced from Appendix C of the
//! book (neighbor lookup latency, sampling efficiency, isotropy) from
//! hard-coded illustrative datasets into PNG files.

pub mod dataset;
pub mod render;

pub use dataset::{Bar, FigureSpec, ValueFormat, FIGURES};
pub use render::{ensure_output_dir, render_figure};
