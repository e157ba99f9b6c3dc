//! Boundary error type and library configuration knobs.
//!
//! This is distinct from the in-band recovery protocol in
//! [`crate::constructs::syntax_error`]: a `ParserError` is only ever
//! returned by the handful of entry points that can fail *outside* that
//! protocol (malformed input that cannot even be tokenized, or an
//! inconsistent caller-supplied symbol table). A WebIDL document full of
//! garbage is not an error by this definition — it parses into a tree
//! full of `SyntaxError` members instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("source text is not valid UTF-8 at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("symbol table entry {name:?} does not reference a construct owned by this parser")]
    ForeignSymbolTableEntry { name: String },
}

/// Behavioral knobs that are meaningful to expose without crossing into
/// semantic validation. All default to the historically permissive
/// WebIDL-corpus behavior.
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Accept deprecated forms (`implements`, multi-inheritance tails,
    /// legacy `[]` suffixes, `legacyiterable<T>`, `Constructor`/
    /// `NamedConstructor` extended attributes, `inherits getter`,
    /// `get/setraises`/`raises`). Disabling this does not make the
    /// parser reject such input — it still recovers via `SyntaxError`
    /// as with any unrecognized form — it just stops treating the forms
    /// as first-class productions.
    pub accept_legacy_syntax: bool,

    /// Emit a `tracing::warn!` the first time each legacy camelCase
    /// marker hook is used via [`crate::markup::LegacyMarkerAdapter`].
    pub warn_on_legacy_marker_hooks: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions { accept_legacy_syntax: true, warn_on_legacy_marker_hooks: true }
    }
}
