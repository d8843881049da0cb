//! `index` command handler.

use tracing::debug;

use crate::cli::args::IndexArgs;
use crate::error::BookkitError;
use crate::index::{Vocabulary, compile_terms, render_index_page, scan_book, write_index_page};

/// Execute `index`.
///
/// Scans the book content directory against the vocabulary and
/// regenerates the back-matter index page in full.
///
/// # Errors
///
/// Returns an error on any vocabulary, scan, or write failure; there
/// is no partial output.
pub fn run(args: &IndexArgs) -> Result<(), BookkitError> {
    let vocab = match &args.terms {
        Some(path) => Vocabulary::with_extra_file(path)?,
        None => Vocabulary::builtin(),
    };
    debug!(terms = vocab.len(), "vocabulary assembled");

    let compiled = compile_terms(vocab.terms())?;

    eprintln!("Scanning book content in {}...", args.book_dir.display());
    let index = scan_book(&args.book_dir, &compiled)?;
    eprintln!("Found {} terms.", index.len());

    let page = render_index_page(&index);
    let out_path = args.output_path();
    write_index_page(&page, &out_path)?;

    eprintln!("Index generated at {}", out_path.display());
    Ok(())
}
