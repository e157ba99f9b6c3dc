//! Lexical analysis plus position checkpointing.
//!
//! The lexical rules are expressed with `logos`: one `#[derive(Logos)]`
//! enum with `#[logos(skip r"")]` so that nothing is implicitly
//! discarded — whitespace and comments come back out as ordinary
//! tokens, because WebIDL round-tripping needs them.
//!
//! On top of the raw token stream, `Tokenizer` adds the one thing a
//! logos `Lexer` does not give you: an arbitrarily nestable
//! `push_position`/`pop_position` checkpoint stack, which is what makes
//! unlimited backtracking possible for the production network in
//! [`crate::productions`].

use std::rc::Rc;
use std::cell::RefCell;

use logos::Logos;

use crate::token::{Position, Token, TokenKind};
use crate::ui::Ui;

/// The fixed WebIDL keyword table. Order matters only in that longer
/// keywords must be tried before shorter ones that are prefixes of
/// them; `logos` handles that via its own maximal-munch matching, this
/// list exists for `Token::is_keyword` lookups used by the markup layer
/// to decide whether a `Symbol` token should be rendered as a keyword.
pub const KEYWORDS: &[&str] = &[
    "unsigned", "long", "short", "float", "double", "unrestricted", "boolean", "byte", "octet",
    "sequence", "FrozenArray", "Promise", "record", "object", "Error", "any", "void",
    "const", "enum", "typedef", "dictionary", "namespace", "interface", "mixin", "partial",
    "callback", "attribute", "readonly", "inherit", "static", "stringifier", "getter", "setter",
    "creator", "deleter", "legacycaller", "iterable", "legacyiterable", "maplike", "setlike",
    "async", "constructor", "required", "optional", "includes", "implements", "or",
    "true", "false", "null", "in", "out",
    "ByteString", "DOMString", "USVString", "ArrayBuffer", "DataView",
    "Int8Array", "Int16Array", "Int32Array", "Uint8Array", "Uint16Array", "Uint32Array",
    "Uint8ClampedArray", "Float32Array", "Float64Array",
    "Infinity", "NaN",
];

/// Symbol text considered "keyword-like" (alphabetic) rather than pure
/// punctuation, for the markup layer's keyword-vs-text leaf decision.
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"")]
enum LogosToken {
    #[regex(r"[ \t\r\n]+|//[^\n]*|/\*([^*]|\*[^/])*\*/")]
    Whitespace,

    #[regex(r#""[^"]*""#)]
    StringLiteral,

    // Symbolic float constants get their own float-adjacent symbol
    // forms, matched before the generic identifier rule.
    #[token("-Infinity")]
    NegInfinity,

    #[regex(r"-?(\d+\.\d*|\.\d+|\d+[eE][+-]?\d+|\d+\.\d*[eE][+-]?\d+)")]
    Float,

    #[regex(r"0[Xx][0-9A-Fa-f]+")]
    HexInteger,

    #[regex(r"-?0[0-7]*")]
    OctalOrZero,

    #[regex(r"-?[1-9][0-9]*")]
    DecimalInteger,

    #[regex(r"[A-Z_a-z][0-9A-Z_a-z]*")]
    Identifier,

    #[token("...")]
    Ellipsis,
    #[token("::")]
    ColonColon,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("=")]
    Equals,
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
}

fn raw_kind(t: LogosToken, text: &str) -> TokenKind {
    match t {
        LogosToken::Whitespace => TokenKind::Whitespace,
        LogosToken::StringLiteral => TokenKind::String,
        LogosToken::NegInfinity => TokenKind::Symbol,
        LogosToken::Float => TokenKind::Float,
        LogosToken::HexInteger | LogosToken::OctalOrZero | LogosToken::DecimalInteger => {
            TokenKind::Integer
        }
        // The keyword table takes priority over the generic identifier
        // rule: `interface`, `readonly`, `sequence`, ... are Symbol
        // tokens, same as punctuation, per the tokenizer's word list.
        LogosToken::Identifier if is_keyword(text) => TokenKind::Symbol,
        LogosToken::Identifier => TokenKind::Identifier,
        _ => TokenKind::Symbol,
    }
}

fn lex_all(text: &str) -> Vec<Token> {
    let mut position = Position { line: 1, column: 1, offset: 0 };
    let mut out = Vec::new();
    let mut lexer = LogosToken::lexer(text);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = &text[span.clone()];
        let kind = match result {
            Ok(tok) => raw_kind(tok, slice),
            Err(()) => TokenKind::Other,
        };
        out.push(Token::new(kind, slice, position));
        for ch in slice.chars() {
            if ch == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
            position.offset += ch.len_utf8();
        }
    }
    out
}

/// The token stream plus a nestable position-checkpoint stack.
///
/// Every production's `peek` wraps its attempt in
/// `push_position`/`pop_position`; `new` constructors assume the tokens
/// are exactly where `peek` left them.
pub struct Tokenizer {
    tokens: Vec<Token>,
    pos: usize,
    checkpoints: Vec<usize>,
    ui: Rc<RefCell<dyn Ui>>,
}

impl Tokenizer {
    pub fn new(text: &str, ui: Rc<RefCell<dyn Ui>>) -> Self {
        Tokenizer { tokens: lex_all(text), pos: 0, checkpoints: Vec::new(), ui }
    }

    /// More non-eof input available (ignoring trailing whitespace).
    pub fn has_tokens(&self) -> bool {
        self.tokens[self.pos..].iter().any(|t| t.kind != TokenKind::Whitespace)
    }

    /// Consume and return every whitespace/comment token sitting at the
    /// cursor, concatenated. A run of trivia can be more than one token
    /// (e.g. blank line, comment, blank line each lex separately), so
    /// this drains the whole run rather than just the first token;
    /// productions call it first thing to capture their leading trivia.
    /// A no-op (returns an empty string) if the cursor is already on a
    /// significant token.
    pub fn whitespace(&mut self) -> String {
        let mut text = String::new();
        while let Some(t) = self.tokens.get(self.pos) {
            if t.kind != TokenKind::Whitespace {
                break;
            }
            text.push_str(&t.text);
            self.pos += 1;
        }
        text
    }

    /// Consume and return the next significant token, silently skipping
    /// any whitespace that a caller chose not to capture explicitly.
    pub fn next(&mut self) -> Option<Token> {
        while let Some(t) = self.tokens.get(self.pos) {
            if t.kind == TokenKind::Whitespace {
                self.pos += 1;
                continue;
            }
            let tok = t.clone();
            self.pos += 1;
            return Some(tok);
        }
        None
    }

    /// Look at the next significant token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens[self.pos..].iter().find(|t| t.kind != TokenKind::Whitespace)
    }

    /// Same contract as `peek`; kept distinct because some call sites
    /// in the grammar read more naturally as "sneak a peek mid-loop"
    /// than "peek ahead before deciding to recurse".
    pub fn sneak_peek(&self) -> Option<&Token> {
        self.peek()
    }

    pub fn peek_is_symbol(&self, symbol: &str) -> bool {
        self.peek().is_some_and(|t| t.is_symbol(symbol))
    }

    /// Save a checkpoint, returning the token about to be examined for
    /// convenience at the call site.
    pub fn push_position(&mut self) -> Option<Token> {
        self.checkpoints.push(self.pos);
        self.peek().cloned()
    }

    /// Restore the most recent checkpoint iff `outcome` is false; pops
    /// it either way. Returns `outcome` unchanged, so call sites read as
    /// `return tokens.pop_position(some_bool);`.
    pub fn pop_position(&mut self, outcome: bool) -> bool {
        let checkpoint = self
            .checkpoints
            .pop()
            .expect("pop_position called without a matching push_position");
        if !outcome {
            self.pos = checkpoint;
        }
        outcome
    }

    /// Scan forward (no bracket balancing) for `symbol`, without
    /// consuming anything.
    pub fn peek_symbol(&self, symbol: &str) -> bool {
        self.tokens[self.pos..].iter().any(|t| t.is_symbol(symbol))
    }

    /// Error recovery: collect tokens (including trivia, so the result
    /// can be serialized back verbatim) through the first occurrence of
    /// any of `terminators`. If `consume` is false, the terminator
    /// itself is left unconsumed. Reports to the UI.
    pub fn syntax_error(&mut self, terminators: &[&str], consume: bool) -> Vec<Token> {
        let mut collected = Vec::new();
        loop {
            match self.tokens.get(self.pos) {
                None => break,
                Some(t) if t.kind == TokenKind::Symbol && terminators.contains(&t.text.as_str()) => {
                    if consume {
                        collected.push(t.clone());
                        self.pos += 1;
                    }
                    break;
                }
                Some(t) => {
                    collected.push(t.clone());
                    self.pos += 1;
                }
            }
        }
        let text: String = collected.iter().map(|t| t.text.as_str()).collect();
        self.ui.borrow_mut().error(&["unrecognized syntax: ", &text], collected.first().map(|t| t.position));
        collected
    }

    /// Error recovery for a construct that terminates on `;` but must
    /// never swallow an enclosing `}`: collects raw tokens (trivia
    /// included, so the result round-trips) through the first `;`,
    /// which is consumed and returned separately, or stops before a `}`
    /// or end of input, neither of which is consumed. Reports to the UI.
    pub fn syntax_error_to_semicolon_or_brace(&mut self) -> (Vec<Token>, Option<Token>) {
        let mut collected = Vec::new();
        let mut semicolon = None;
        loop {
            match self.tokens.get(self.pos) {
                None => break,
                Some(t) if t.is_symbol(";") => {
                    semicolon = Some(t.clone());
                    self.pos += 1;
                    break;
                }
                Some(t) if t.is_symbol("}") => break,
                Some(t) => {
                    collected.push(t.clone());
                    self.pos += 1;
                }
            }
        }
        let text: String = collected.iter().map(|t| t.text.as_str()).collect();
        self.ui.borrow_mut().error(&["unrecognized syntax: ", &text], collected.first().map(|t| t.position));
        (collected, semicolon)
    }

    pub fn did_ignore(&mut self, thing: &str) {
        let position = self.peek().map(|t| t.position);
        self.ui.borrow_mut().did_ignore(thing, position);
    }

    pub fn error(&mut self, parts: &[&str]) {
        let position = self.peek().map(|t| t.position);
        self.ui.borrow_mut().error(parts, position);
    }

    pub fn current_position(&self) -> Option<Position> {
        self.peek().map(|t| t.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::NullUi;
    use rstest::rstest;

    fn tokenizer(text: &str) -> Tokenizer {
        Tokenizer::new(text, Rc::new(RefCell::new(NullUi)))
    }

    #[test]
    fn test_keywords_lex_as_symbols_not_identifiers() {
        let mut t = tokenizer("interface Foo");
        let first = t.next().unwrap();
        assert_eq!(first.kind, TokenKind::Symbol);
        assert_eq!(first.text, "interface");
        let second = t.next().unwrap();
        assert_eq!(second.kind, TokenKind::Identifier);
        assert_eq!(second.text, "Foo");
    }

    #[test]
    fn test_whitespace_is_retained_not_skipped_silently() {
        let mut t = tokenizer("  interface");
        let leading = t.whitespace();
        assert_eq!(leading, "  ");
        let tok = t.next().unwrap();
        assert_eq!(tok.text, "interface");
    }

    #[test]
    fn test_push_pop_position_restores_cursor() {
        let mut t = tokenizer("a b c");
        t.push_position();
        let _ = t.next();
        let _ = t.next();
        t.pop_position(false);
        let tok = t.next().unwrap();
        assert_eq!(tok.text, "a");
    }

    #[test]
    fn test_push_pop_position_commits_on_true() {
        let mut t = tokenizer("a b c");
        t.push_position();
        let _ = t.next();
        t.pop_position(true);
        let tok = t.next().unwrap();
        assert_eq!(tok.text, "b");
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut t = tokenizer("a b c d");
        t.push_position();
        let _ = t.next();
        t.push_position();
        let _ = t.next();
        t.pop_position(false);
        t.pop_position(false);
        let tok = t.next().unwrap();
        assert_eq!(tok.text, "a");
    }

    #[rstest]
    #[case("42", TokenKind::Integer)]
    #[case("3.14", TokenKind::Float)]
    #[case("-Infinity", TokenKind::Symbol)]
    #[case("\"hi\"", TokenKind::String)]
    #[case("0x2A", TokenKind::Integer)]
    fn test_literal_kinds(#[case] text: &str, #[case] kind: TokenKind) {
        let mut t = tokenizer(text);
        assert_eq!(t.next().unwrap().kind, kind);
    }

    #[test]
    fn test_syntax_error_collects_through_terminator() {
        let mut t = tokenizer("garbage tokens here ; after");
        let collected = t.syntax_error(&[";"], true);
        assert!(collected.iter().any(|tok| tok.text == "garbage"));
        assert!(collected.last().unwrap().is_symbol(";"));
        let tok = t.next().unwrap();
        assert_eq!(tok.text, "after");
    }

    #[test]
    fn test_peek_symbol_scans_without_consuming() {
        let mut t = tokenizer("a, b]");
        assert!(t.peek_symbol("]"));
        let tok = t.next().unwrap();
        assert_eq!(tok.text, "a");
    }
}
