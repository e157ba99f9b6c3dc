//! The `Production` base behavior shared by every grammar node.
//!
//! A production owns everything needed to reproduce, byte for byte,
//! the span of input it consumed: leading trivia, an optional trailing
//! trivia run, an optional tail of tokens absorbed during error
//! recovery, and an optional semicolon. `Production::text()` is the
//! serialization contract the whole crate is built around: concatenate
//! every top-level construct's `text()` and you get back exactly the
//! input.

use crate::token::Token;

/// Trivia and recovery bookkeeping common to every production.
#[derive(Debug, Clone, Default)]
pub struct Trivia {
    pub leading_space: String,
    pub trailing_space: Option<String>,
    pub tail: Vec<Token>,
    /// The terminating `;`'s full rendered text (its own leading
    /// whitespace/comments plus the `;` itself), not just the bare
    /// token — whitespace between a construct's body and its `;` is
    /// significant trivia, not just whitespace before the next
    /// construct.
    pub semicolon: Option<String>,
}

impl Trivia {
    pub fn tail_and_semicolon_text(&self) -> String {
        let mut out = String::new();
        for t in &self.tail {
            out.push_str(&t.text);
        }
        if let Some(semi) = &self.semicolon {
            out.push_str(semi);
        }
        out
    }
}

/// Shared behavior for every grammar node: a way to get at its trivia
/// and a way to render its own significant-token body (everything
/// between the leading and trailing whitespace, excluding the tail and
/// semicolon which `Trivia` already accounts for).
pub trait Production {
    fn trivia(&self) -> &Trivia;

    /// The production's own body text, not including leading/trailing
    /// whitespace, recovery tail, or semicolon.
    fn body_text(&self) -> String;

    /// Full lossless serialization: leading + body + tail + semicolon + trailing.
    fn text(&self) -> String {
        let trivia = self.trivia();
        let mut out = String::new();
        out.push_str(&trivia.leading_space);
        out.push_str(&self.body_text());
        out.push_str(&trivia.tail_and_semicolon_text());
        if let Some(trailing) = &trivia.trailing_space {
            out.push_str(trailing);
        }
        out
    }
}
