//! CLI argument definitions.
//!
//! All Clap derive structs for `bookkit` command-line parsing. Both
//! subcommands run with no options at all; the defaults reproduce the
//! fixed paths the book build expects.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Authoring support tools for the BCC lattice book.
#[derive(Parser, Debug)]
#[command(name = "bookkit", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "BOOKKIT_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the benchmark figures into the book images directory.
    Figures(FiguresArgs),

    /// Regenerate the back-matter index from the chapter markdown.
    Index(IndexArgs),
}

// ============================================================================
// Figures Command
// ============================================================================

/// Arguments for `figures`.
#[derive(Args, Debug)]
pub struct FiguresArgs {
    /// Output directory for the rendered charts.
    #[arg(
        short,
        long,
        default_value = "book/images",
        env = "BOOKKIT_FIGURE_DIR"
    )]
    pub output: PathBuf,
}

// ============================================================================
// Index Command
// ============================================================================

/// Arguments for `index`.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Book content root to scan.
    #[arg(long, default_value = "book", env = "BOOKKIT_BOOK_DIR")]
    pub book_dir: PathBuf,

    /// Generated index file (defaults to `<book-dir>/back_matter/index.md`).
    #[arg(short, long, env = "BOOKKIT_INDEX_FILE")]
    pub output: Option<PathBuf>,

    /// YAML file of additional vocabulary terms to index.
    #[arg(long)]
    pub terms: Option<PathBuf>,
}

impl IndexArgs {
    /// Resolve the output path, applying the back-matter default.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.book_dir.join("back_matter").join("index.md"))
    }
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figures_parses_with_no_options() {
        let cli = Cli::try_parse_from(["bookkit", "figures"]);
        assert!(cli.is_ok(), "Failed to parse: {cli:?}");
    }

    #[test]
    fn test_figures_default_output() {
        let cli = Cli::try_parse_from(["bookkit", "figures"]).unwrap();
        let Commands::Figures(args) = cli.command else {
            panic!("Expected FiguresArgs");
        };
        assert_eq!(args.output, PathBuf::from("book/images"));
    }

    #[test]
    fn test_index_parses_with_no_options() {
        let cli = Cli::try_parse_from(["bookkit", "index"]);
        assert!(cli.is_ok(), "Failed to parse: {cli:?}");
    }

    #[test]
    fn test_index_default_output_follows_book_dir() {
        let cli = Cli::try_parse_from(["bookkit", "index", "--book-dir", "draft"]).unwrap();
        let Commands::Index(args) = cli.command else {
            panic!("Expected IndexArgs");
        };
        assert_eq!(
            args.output_path(),
            PathBuf::from("draft").join("back_matter").join("index.md")
        );
    }

    #[test]
    fn test_index_explicit_output_wins() {
        let cli =
            Cli::try_parse_from(["bookkit", "index", "--output", "out/index.md"]).unwrap();
        let Commands::Index(args) = cli.command else {
            panic!("Expected IndexArgs");
        };
        assert_eq!(args.output_path(), PathBuf::from("out/index.md"));
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_from(["bookkit", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let result = Cli::try_parse_from(["bookkit", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["bookkit", "--color", variant, "figures"]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["bookkit", "-vvv", "index"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from(["bookkit", "--quiet", "figures"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_subcommand_required() {
        let result = Cli::try_parse_from(["bookkit"]);
        assert!(result.is_err(), "Expected error for missing subcommand");
    }
}
