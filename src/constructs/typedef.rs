//! `Typedef`: `"typedef" TypeWithExtendedAttributes Identifier ";"`.

use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::base::{Identifier, Symbol};
use crate::productions::types::TypeWithExtendedAttributes;
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone)]
pub struct Typedef {
    trivia: Trivia,
    keyword: Symbol,
    pub type_: TypeWithExtendedAttributes,
    pub identifier: Identifier,
}

impl Typedef {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        Symbol::peek(tokens, Some("typedef"))
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let keyword = Symbol::new(tokens, Some("typedef"));
        let type_ = TypeWithExtendedAttributes::new(tokens);
        let identifier = Identifier::new(tokens);
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        Typedef { trivia, keyword, type_, identifier }
    }

    pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
        &mut self.trivia
    }
}

impl Production for Typedef {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        format!("{}{}{}", self.keyword.text(), self.type_.text(), self.identifier.text())
    }
}

impl IdlNode for Typedef {
    fn idl_type(&self) -> &'static str {
        "typedef"
    }

    fn name(&self) -> Option<&str> {
        Some(self.identifier.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::NullUi;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_typedef_sequence_round_trips() {
        let mut t = Tokenizer::new("typedef sequence<DOMString> StringList;", Rc::new(RefCell::new(NullUi)));
        assert!(Typedef::peek(&mut t));
        let td = Typedef::new(&mut t);
        assert_eq!(td.name(), Some("StringList"));
        assert_eq!(td.text(), "typedef sequence<DOMString> StringList;");
    }
}
