//! The smallest productions: a single consumed token (`Symbol`), and the
//! two flavors of name (`Identifier`, `TypeIdentifier`) that every named
//! construct is built from.

use crate::production::{Production, Trivia};
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// A production that consumes exactly one significant token verbatim.
/// Used both for literal punctuation/keywords (`Symbol::peek(tokens,
/// Some("("))`) and for "whatever token is here" consumption
/// (`Symbol::peek(tokens, None)`, used by `OperationName`/`Constructor`
/// to swallow a bare keyword as a name).
#[derive(Debug, Clone)]
pub struct Symbol {
    trivia: Trivia,
    token: Token,
}

impl Symbol {
    pub fn peek(tokens: &mut Tokenizer, expected: Option<&str>) -> bool {
        tokens.push_position();
        let matched = match (tokens.peek(), expected) {
            (Some(t), Some(sym)) => t.is_symbol(sym),
            (Some(t), None) => t.kind == TokenKind::Symbol,
            (None, _) => false,
        };
        tokens.pop_position(matched)
    }

    pub fn new(tokens: &mut Tokenizer, expected: Option<&str>) -> Self {
        let leading_space = tokens.whitespace();
        let token = tokens.next().expect("Symbol::new called without peek succeeding");
        if let Some(sym) = expected {
            debug_assert!(token.is_symbol(sym), "expected symbol {sym:?}, got {token:?}");
        }
        Symbol { trivia: Trivia { leading_space, ..Default::default() }, token }
    }

    /// The raw token text, with no leading trivia. Prefer
    /// `Production::text` (i.e. plain `.text()` with the trait in
    /// scope) when composing a parent's serialization; this is for
    /// call sites that only care about the literal spelling (e.g.
    /// `Symbol` equality checks elsewhere).
    pub fn raw_text(&self) -> &str {
        &self.token.text
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl Production for Symbol {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        self.token.text.clone()
    }
}

/// A plain identifier name. Exposes the semantic name (leading `_`
/// stripped) separately from the literal source text.
#[derive(Debug, Clone)]
pub struct Identifier {
    trivia: Trivia,
    token: Token,
}

impl Identifier {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = tokens.peek().is_some_and(|t| t.is_identifier() || t.kind == TokenKind::Symbol);
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let token = tokens.next().expect("Identifier::new called without peek succeeding");
        Identifier { trivia: Trivia { leading_space, ..Default::default() }, token }
    }

    pub fn name(&self) -> &str {
        self.token.semantic_name()
    }
}

impl Production for Identifier {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        self.token.text.clone()
    }
}

/// An identifier used in type position (same lexical shape, distinct
/// production so type-identifier call sites read intention-first,
/// mirroring the WebIDL grammar's own split between `Identifier` and
/// `TypeIdentifier`).
pub type TypeIdentifier = Identifier;
