//! Chart datasets for the benchmark figures.
//!
//! All three datasets are compile-time constants carrying the
//! representative values quoted in the book text ("5x faster than
//! naive", "14 neighbors vs 26", "29% fewer points"). Nothing here is
//! measured at build time; these figures are illustrative.

use plotters::style::RGBColor;

// Palette shared across the charts.
const RED: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);
const GREY: RGBColor = RGBColor(0x95, 0xa5, 0xa6);
const GREEN: RGBColor = RGBColor(0x2e, 0xcc, 0x71);
const BLUE: RGBColor = RGBColor(0x34, 0x98, 0xdb);

/// How a bar's numeric value is rendered above the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// One decimal place with a `ns` suffix, e.g. `12.5 ns`.
    Nanoseconds,
    /// Whole percent, e.g. `71%`.
    Percent,
    /// Three decimal places, e.g. `0.414`.
    ThreeDecimals,
}

impl ValueFormat {
    /// Format a bar value for display.
    #[must_use]
    pub fn label(self, value: f64) -> String {
        match self {
            Self::Nanoseconds => format!("{value:.1} ns"),
            Self::Percent => format!("{value:.0}%"),
            Self::ThreeDecimals => format!("{value:.3}"),
        }
    }
}

/// A single bar: category label, value, fill color.
#[derive(Debug, Clone, Copy)]
pub struct Bar {
    /// Category label shown on the x axis.
    pub label: &'static str,
    /// Bar height in the chart's y units.
    pub value: f64,
    /// Fill color.
    pub color: RGBColor,
}

/// Free-standing text annotation placed inside the plot area.
#[derive(Debug, Clone, Copy)]
pub struct Annotation {
    /// Index of the bar the annotation is centered over.
    pub bar: u32,
    /// Vertical position in y units.
    pub y: f64,
    /// Annotation text.
    pub text: &'static str,
    /// Text color.
    pub color: RGBColor,
}

/// Complete description of one benchmark chart.
#[derive(Debug, Clone, Copy)]
pub struct FigureSpec {
    /// Output file name within the figures directory.
    pub file_name: &'static str,
    /// Chart caption.
    pub title: &'static str,
    /// Y-axis description.
    pub y_desc: &'static str,
    /// Image width in pixels.
    pub px_width: u32,
    /// Bars in left-to-right order.
    pub bars: &'static [Bar],
    /// Per-bar value label format.
    pub value_format: ValueFormat,
    /// Optional annotation.
    pub annotation: Option<Annotation>,
}

impl FigureSpec {
    /// Largest bar value, used to size the y axis.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

/// The three fixed charts, in generation order.
pub const FIGURES: [FigureSpec; 3] = [
    FigureSpec {
        file_name: "benchmark_neighbor_lookup.png",
        title: "Neighbor Lookup Latency (Lower is Better)",
        y_desc: "Time (nanoseconds)",
        px_width: 1000,
        bars: &[
            Bar {
                label: "Cubic (26-conn)",
                value: 12.5,
                color: RED,
            },
            Bar {
                label: "Octree",
                value: 45.0,
                color: GREY,
            },
            Bar {
                label: "BCC (14-conn)",
                value: 2.8,
                color: GREEN,
            },
        ],
        value_format: ValueFormat::Nanoseconds,
        annotation: None,
    },
    FigureSpec {
        file_name: "benchmark_memory_efficiency.png",
        title: "Sampling Efficiency (Points per Unit Volume)",
        y_desc: "Normalized Point Count",
        px_width: 800,
        bars: &[
            Bar {
                label: "Cubic Grid",
                value: 100.0,
                color: BLUE,
            },
            Bar {
                label: "BCC Lattice",
                value: 71.0,
                color: GREEN,
            },
        ],
        value_format: ValueFormat::Percent,
        annotation: Some(Annotation {
            bar: 1,
            y: 82.0,
            text: "-29% Memory",
            color: GREEN,
        }),
    },
    FigureSpec {
        file_name: "benchmark_isotropy.png",
        title: "Directional Bias (Coefficient of Variation)",
        y_desc: "CV of Neighbor Distances (Lower is Better)",
        px_width: 800,
        bars: &[
            Bar {
                label: "Cubic (26-conn)",
                value: 0.414,
                color: RED,
            },
            Bar {
                label: "BCC (14-conn)",
                value: 0.086,
                color: GREEN,
            },
        ],
        value_format: ValueFormat::ThreeDecimals,
        annotation: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_figures_with_fixed_names() {
        let names: Vec<_> = FIGURES.iter().map(|f| f.file_name).collect();
        assert_eq!(
            names,
            vec![
                "benchmark_neighbor_lookup.png",
                "benchmark_memory_efficiency.png",
                "benchmark_isotropy.png",
            ]
        );
    }

    #[test]
    fn nanosecond_labels_keep_one_decimal() {
        assert_eq!(ValueFormat::Nanoseconds.label(12.5), "12.5 ns");
        assert_eq!(ValueFormat::Nanoseconds.label(45.0), "45.0 ns");
    }

    #[test]
    fn percent_labels_are_whole() {
        assert_eq!(ValueFormat::Percent.label(71.0), "71%");
        assert_eq!(ValueFormat::Percent.label(100.0), "100%");
    }

    #[test]
    fn cv_labels_keep_three_decimals() {
        assert_eq!(ValueFormat::ThreeDecimals.label(0.414), "0.414");
        assert_eq!(ValueFormat::ThreeDecimals.label(0.086), "0.086");
    }

    #[test]
    fn max_value_picks_tallest_bar() {
        assert!((FIGURES[0].max_value() - 45.0).abs() < f64::EPSILON);
        assert!((FIGURES[1].max_value() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn annotation_sits_inside_axis_range() {
        let spec = &FIGURES[1];
        let ann = spec.annotation.expect("memory chart has an annotation");
        assert!(ann.y < spec.max_value() * 1.2);
        assert!((ann.bar as usize) < spec.bars.len());
    }
}
