//! Error types for `bookkit`.
//!
//! Domain-specific error enums aggregated by a top-level error with a
//! stable exit-code mapping for the CLI.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `bookkit` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Vocabulary file error (invalid YAML, empty term list)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Figure rendering error
    pub const FIGURE_ERROR: i32 = 4;

    /// Index generation error (scan or page write failure)
    pub const INDEX_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `bookkit` operations.
///
/// Aggregates the domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum BookkitError {
    /// Figure rendering error
    #[error(transparent)]
    Figure(#[from] FigureError),

    /// Index generation error
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Vocabulary file error
    #[error(transparent)]
    Vocab(#[from] VocabError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BookkitError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Figure(_) => ExitCode::FIGURE_ERROR,
            Self::Index(_) => ExitCode::INDEX_ERROR,
            Self::Vocab(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Figure Errors
// ============================================================================

/// Figure generator errors.
///
/// Rendering runs under a single guard: the first failed chart aborts
/// the remaining ones.
#[derive(Debug, Error)]
pub enum FigureError {
    /// Output directory could not be created
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        /// Path to the output directory
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Chart rendering failed
    #[error("failed to render {figure}: {message}")]
    Render {
        /// File name of the figure being rendered
        figure: String,
        /// Error message from the plotting backend
        message: String,
    },
}

// ============================================================================
// Index Errors
// ============================================================================

/// Index generator errors.
///
/// Any failure aborts the whole run; the index page is regenerated in
/// full on the next invocation, so there is nothing to recover.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Chapter file could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path to the chapter file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A vocabulary term produced an invalid match pattern
    #[error("invalid term '{term}': {source}")]
    BadTerm {
        /// The offending vocabulary term
        term: String,
        /// Regex compilation error
        source: regex::Error,
    },

    /// Generated page could not be written
    #[error("cannot write {path}: {source}")]
    Write {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

// ============================================================================
// Vocabulary Errors
// ============================================================================

/// Errors loading an extra-terms vocabulary file.
#[derive(Debug, Error)]
pub enum VocabError {
    /// Vocabulary file could not be read
    #[error("cannot read terms file {path}: {source}")]
    Read {
        /// Path to the vocabulary file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Vocabulary file is not valid YAML
    #[error("parse error in {path}: {source}")]
    Parse {
        /// Path to the vocabulary file
        path: PathBuf,
        /// YAML parsing error
        source: serde_yaml::Error,
    },

    /// Vocabulary file parsed but contains no terms
    #[error("terms file {path} contains no terms")]
    Empty {
        /// Path to the vocabulary file
        path: PathBuf,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `bookkit` operations.
pub type Result<T> = std::result::Result<T, BookkitError>;

// ============================================================================
// Tests
// ============================================================================
