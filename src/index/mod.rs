//! Back-matter index generation.
//!
//! Walks the book content directory, matches each chapter's markdown
//! against a closed vocabulary of domain terms, and renders the
//! generated `back_matter/index.md` page with alphabetized sections and
//! per-term chapter links.

pub mod page;
pub mod scan;
pub mod terms;
pub mod vocab;

pub use page::{render_index_page, write_index_page};
pub use scan::{CompiledTerm, Occurrence, TermIndex, compile_terms, scan_book};
pub use vocab::Vocabulary;
