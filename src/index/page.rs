//! Index page rendering.
//!
//! Converts a [`TermIndex`] into the generated back-matter markdown:
//! terms sorted case-insensitively, one `##` section per leading
//! letter, and each term line listing its chapters as relative links,
//! deduplicated by chapter title.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::IndexError;
use crate::index::scan::{Occurrence, TermIndex};

/// Render the full index page as markdown.
#[must_use]
pub fn render_index_page(index: &TermIndex) -> String {
    let mut terms: Vec<&String> = index.keys().collect();
    terms.sort_by_key(|t| t.to_lowercase());

    let mut lines = vec!["# Index".to_string(), String::new()];
    let mut current_letter: Option<char> = None;

    for term in terms {
        let letter = section_letter(term);
        if current_letter != Some(letter) {
            if current_letter.is_some() {
                lines.push(String::new());
            }
            lines.push(format!("## {letter}"));
            lines.push(String::new());
            current_letter = Some(letter);
        }

        let links = render_links(&index[term]);
        lines.push(format!("- **{term}**: {links}"));
    }

    let mut page = lines.join("\n");
    page.push('\n');
    page
}

/// Write the rendered page, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`IndexError::Write`] if directory creation or the write
/// fails.
pub fn write_index_page(page: &str, out_path: &Path) -> Result<(), IndexError> {
    let write_err = |source| IndexError::Write {
        path: out_path.to_path_buf(),
        source,
    };

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(out_path, page).map_err(write_err)
}

/// Section letter for a term: uppercased first character.
fn section_letter(term: &str) -> char {
    term.chars()
        .next()
        .map_or('#', |c| c.to_uppercase().next().unwrap_or(c))
}

/// Comma-separated chapter links, deduplicated by title.
///
/// When two chapters render the same title the later path wins, which
/// matches insertion-ordered map semantics: one link per distinct
/// title, positioned where the title first appeared.
fn render_links(occurrences: &[Occurrence]) -> String {
    let mut unique: IndexMap<&str, &str> = IndexMap::new();
    for occ in occurrences {
        unique.insert(occ.title.as_str(), occ.path.as_str());
    }

    unique
        .iter()
        .map(|(title, path)| format!("[{title}](../{path})"))
        .collect::<Vec<_>>()
        .join(", ")
}
