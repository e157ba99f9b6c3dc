//! `SyntaxError`: the in-band recovery construct. Never matched by
//! `peek` — it's the fallback every dispatch list falls through to when
//! nothing else recognized the current position.

use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::token::Token;
use crate::tokenizer::Tokenizer;

/// Raw tokens absorbed through the next `;`, or up to (not including) a
/// closing `}` if end-of-body is reached first. Round-trips exactly —
/// serialization doesn't care that the content was unrecognized.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    trivia: Trivia,
    body: Vec<Token>,
}

impl SyntaxError {
    /// Collects through the first `;` or `}` (the `}` itself is left for
    /// the caller, since it closes the enclosing container rather than
    /// belonging to this member).
    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let (body, semicolon) = tokens.syntax_error_to_semicolon_or_brace();
        let trivia = Trivia { leading_space, semicolon: semicolon.map(|t| t.text), ..Default::default() };
        SyntaxError { trivia, body }
    }

    pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
        &mut self.trivia
    }
}

impl Production for SyntaxError {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        self.body.iter().map(|t| t.text.as_str()).collect()
    }
}

impl IdlNode for SyntaxError {
    fn idl_type(&self) -> &'static str {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::NullUi;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_recovers_through_semicolon() {
        let mut t = Tokenizer::new("garbage tokens ; after", Rc::new(RefCell::new(NullUi)));
        let err = SyntaxError::new(&mut t);
        assert_eq!(err.text(), "garbage tokens ;");
        let remaining = t.next().unwrap();
        assert_eq!(remaining.text, "after");
    }

    #[test]
    fn test_stops_before_closing_brace() {
        let mut t = Tokenizer::new("garbage } after", Rc::new(RefCell::new(NullUi)));
        let err = SyntaxError::new(&mut t);
        assert_eq!(err.text(), "garbage ");
        assert!(t.peek_is_symbol("}"));
    }
}
