//! Vocabulary assembly.
//!
//! The built-in term list optionally extended with terms from a YAML
//! file of the form:
//!
//! ```yaml
//! terms:
//!   - Wavelet
//!   - k-d Tree
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::VocabError;
use crate::index::terms::BUILTIN_TERMS;

/// On-disk shape of an extra-terms file.
#[derive(Debug, Deserialize)]
struct TermsFile {
    /// Additional canonical terms to index.
    terms: Vec<String>,
}

/// The full set of terms to index, in canonical casing.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// The built-in vocabulary only.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            terms: BUILTIN_TERMS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Built-in vocabulary merged with terms from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`VocabError`] if the file cannot be read, is not
    /// valid YAML, or lists no terms.
    pub fn with_extra_file(path: &Path) -> Result<Self, VocabError> {
        let mut vocab = Self::builtin();
        vocab.merge(load_terms_file(path)?);
        Ok(vocab)
    }

    /// Merge additional terms, skipping case-insensitive duplicates
    /// and blank entries.
    pub fn merge(&mut self, extra: impl IntoIterator<Item = String>) {
        for term in extra {
            let term = term.trim().to_string();
            if term.is_empty() {
                continue;
            }
            let lowered = term.to_lowercase();
            if self.terms.iter().any(|t| t.to_lowercase() == lowered) {
                tracing::debug!(term = %term, "skipping duplicate vocabulary term");
                continue;
            }
            self.terms.push(term);
        }
    }

    /// All terms, built-ins first, extras in file order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Load an extra-terms YAML file.
///
/// # Errors
///
/// Returns a [`VocabError`] if the file cannot be read, is not valid
/// YAML, or lists no terms.
pub fn load_terms_file(path: &Path) -> Result<Vec<String>, VocabError> {
    let content = fs::read_to_string(path).map_err(|source| VocabError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: TermsFile = serde_yaml::from_str(&content).map_err(|source| VocabError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if parsed.terms.is_empty() {
        return Err(VocabError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(parsed.terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_vocabulary_is_complete() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.len(), BUILTIN_TERMS.len());
        assert!(vocab.terms().iter().any(|t| t == "BCC"));
        assert!(vocab.terms().iter().any(|t| t == "A*"));
    }

    #[test]
    fn merge_skips_case_insensitive_duplicates() {
        let mut vocab = Vocabulary::builtin();
        let before = vocab.len();
        vocab.merge(["bcc".to_string(), "OCTREE".to_string()]);
        assert_eq!(vocab.len(), before);
    }

    #[test]
    fn merge_appends_new_terms() {
        let mut vocab = Vocabulary::builtin();
        let before = vocab.len();
        vocab.merge(["Wavelet".to_string(), "  ".to_string()]);
        assert_eq!(vocab.len(), before + 1);
        assert_eq!(vocab.terms().last().map(String::as_str), Some("Wavelet"));
    }

    #[test]
    fn load_terms_file_parses_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "terms:\n  - Wavelet\n  - k-d Tree").unwrap();

        let terms = load_terms_file(file.path()).unwrap();
        assert_eq!(terms, vec!["Wavelet".to_string(), "k-d Tree".to_string()]);
    }

    #[test]
    fn load_terms_file_rejects_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "terms: []").unwrap();

        let err = load_terms_file(file.path()).unwrap_err();
        assert!(matches!(err, VocabError::Empty { .. }));
    }

    #[test]
    fn load_terms_file_rejects_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not yaml: [").unwrap();

        let err = load_terms_file(file.path()).unwrap_err();
        assert!(matches!(err, VocabError::Parse { .. }));
    }

    #[test]
    fn load_terms_file_missing_file() {
        let err = load_terms_file(Path::new("/nonexistent/terms.yaml")).unwrap_err();
        assert!(matches!(err, VocabError::Read { .. }));
    }
}
