//! Chapter scanning and term matching.
//!
//! Single sequential pass over the book directory: find every markdown
//! chapter (minus the exclusion lists), derive its display title, and
//! record which vocabulary terms appear in it.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::IndexError;

/// Directories never descended into.
pub const IGNORE_DIRS: [&str; 2] = ["images", "back_matter"];

/// Auxiliary files never scanned or linked.
pub const IGNORE_FILES: [&str; 5] = [
    "index.md",
    "SUMMARY.md",
    "BOOK_ENHANCEMENT_SUGGESTIONS.md",
    "ERRATA.md",
    "LICENSE.md",
];

/// One chapter hit for a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Chapter display title.
    pub title: String,
    /// Chapter path relative to the book directory.
    pub path: String,
}

/// Canonical term → chapter hits, in walk order.
pub type TermIndex = IndexMap<String, Vec<Occurrence>>;

/// A vocabulary term with its compiled match pattern.
#[derive(Debug)]
pub struct CompiledTerm {
    /// Canonical spelling used in the generated page.
    pub canonical: String,
    pattern: Regex,
}

impl CompiledTerm {
    fn new(term: &str) -> Result<Self, IndexError> {
        // Case-insensitive, word boundaries on both ends. Escaping keeps
        // terms like "A*" literal.
        let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
        let pattern = Regex::new(&pattern).map_err(|source| IndexError::BadTerm {
            term: term.to_string(),
            source,
        })?;

        Ok(Self {
            canonical: term.to_string(),
            pattern,
        })
    }

    /// Whether the term appears in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Compile every vocabulary term once per run.
///
/// # Errors
///
/// Returns [`IndexError::BadTerm`] if a term cannot be turned into a
/// valid pattern.
pub fn compile_terms(terms: &[String]) -> Result<Vec<CompiledTerm>, IndexError> {
    terms.iter().map(|t| CompiledTerm::new(t)).collect()
}

/// Derive a chapter's display title: first `# ` heading line, falling
/// back to the file name.
#[must_use]
pub fn chapter_title(path: &Path, content: &str) -> String {
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("# ") {
            return rest.trim().to_string();
        }
    }

    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    if entry.file_type().is_dir() {
        let name = entry.file_name().to_string_lossy();
        return !IGNORE_DIRS.contains(&name.as_ref());
    }
    true
}

fn is_chapter_file(entry: &DirEntry) -> bool {
    if !entry.file_type().is_file() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.ends_with(".md") && !IGNORE_FILES.contains(&name.as_ref())
}

/// Scan every chapter under `book_dir` against the compiled vocabulary.
///
/// The walk is deterministic (entries sorted by file name) so the
/// generated page is stable across runs.
///
/// # Errors
///
/// Any traversal or read error aborts the whole scan.
pub fn scan_book(book_dir: &Path, terms: &[CompiledTerm]) -> Result<TermIndex, IndexError> {
    let mut index = TermIndex::new();

    let walker = WalkDir::new(book_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(keep_entry);

    for entry in walker {
        let entry = entry?;
        if !is_chapter_file(&entry) {
            continue;
        }

        let path = entry.path();
        let content = fs::read_to_string(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let title = chapter_title(path, &content);
        let rel_path = path
            .strip_prefix(book_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();

        debug!(chapter = %rel_path, title = %title, "scanning chapter");

        for term in terms {
            if term.is_match(&content) {
                index
                    .entry(term.canonical.clone())
                    .or_default()
                    .push(Occurrence {
                        title: title.clone(),
                        path: rel_path.clone(),
                    });
            }
        }
    }

    Ok(index)
}
