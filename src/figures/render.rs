//! Bar chart rendering via `plotters`.
//!
//! One PNG per [`FigureSpec`]: white background, caption, y-axis
//! description, filled bars on a segmented x axis, and a value label
//! above each bar.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::FigureError;
use crate::figures::dataset::FigureSpec;

const PX_HEIGHT: u32 = 600;

/// Create the figures output directory if it does not exist.
///
/// # Errors
///
/// Returns [`FigureError::OutputDir`] if creation fails.
pub fn ensure_output_dir(dir: &Path) -> Result<(), FigureError> {
    std::fs::create_dir_all(dir).map_err(|source| FigureError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Render one chart into `out_dir` and return the written path.
///
/// # Errors
///
/// Returns [`FigureError::Render`] if the plotting backend fails.
pub fn render_figure(spec: &FigureSpec, out_dir: &Path) -> Result<PathBuf, FigureError> {
    let out_path = out_dir.join(spec.file_name);

    draw(spec, &out_path).map_err(|e| FigureError::Render {
        figure: spec.file_name.to_string(),
        message: e.to_string(),
    })?;

    Ok(out_path)
}

fn draw(spec: &FigureSpec, out_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let n = u32::try_from(spec.bars.len())?;
    // Headroom above the tallest bar keeps value labels inside the plot.
    let y_max = spec.max_value() * 1.2;

    let root = BitMapBackend::new(out_path, (spec.px_width, PX_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(48)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..n).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(spec.y_desc)
        .axis_desc_style(("sans-serif", 20))
        .label_style(("sans-serif", 16))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) => spec
                .bars
                .get(*i as usize)
                .map_or_else(String::new, |b| b.label.to_string()),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(spec.bars.iter().enumerate().map(|(i, bar)| {
        let i = u32::try_from(i).unwrap_or(u32::MAX);
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), bar.value),
            ],
            bar.color.filled(),
        );
        rect.set_margin(0, 0, 24, 24);
        rect
    }))?;

    let value_style = ("sans-serif", 18)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(spec.bars.iter().enumerate().map(|(i, bar)| {
        let i = u32::try_from(i).unwrap_or(u32::MAX);
        Text::new(
            spec.value_format.label(bar.value),
            (SegmentValue::CenterOf(i), bar.value + y_max * 0.01),
            value_style.clone(),
        )
    }))?;

    if let Some(ann) = &spec.annotation {
        let ann_style = ("sans-serif", 20)
            .into_font()
            .style(FontStyle::Bold)
            .color(&ann.color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(std::iter::once(Text::new(
            ann.text.to_string(),
            (SegmentValue::CenterOf(ann.bar), ann.y),
            ann_style,
        )))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figures::dataset::FIGURES;

    #[test]
    fn ensure_output_dir_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("book").join("images");
        assert!(!dir.exists());

        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Idempotent for an existing directory.
        ensure_output_dir(&dir).unwrap();
    }

    #[test]
    fn render_writes_png_with_fixed_name() {
        let tmp = tempfile::tempdir().unwrap();
        let path = render_figure(&FIGURES[2], tmp.path()).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "benchmark_isotropy.png"
        );
        let len = std::fs::metadata(&path).unwrap().len();
        assert!(len > 0, "rendered PNG should not be empty");
    }

    #[test]
    fn render_fails_for_unwritable_target() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("no_such_dir");
        // render_figure does not create directories; that is ensure_output_dir's job
        let err = render_figure(&FIGURES[0], &missing).unwrap_err();
        assert!(matches!(err, FigureError::Render { .. }));
    }
}
