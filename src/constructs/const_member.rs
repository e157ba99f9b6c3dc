//! `Const`: `"const" ConstType Identifier "=" ConstValue ";"`. Used both
//! as an interface/mixin member and — in the deprecated top-level form —
//! directly inside [`TopLevel`](crate::constructs::top_level::TopLevel).

use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::base::{Identifier, Symbol};
use crate::productions::literals::ConstValue;
use crate::productions::types::Type;
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone)]
pub struct Const {
    trivia: Trivia,
    keyword: Symbol,
    pub const_type: Type,
    pub identifier: Identifier,
    equals: Symbol,
    pub value: ConstValue,
}

impl Const {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        Symbol::peek(tokens, Some("const"))
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let keyword = Symbol::new(tokens, Some("const"));
        let const_type = Type::new(tokens);
        let identifier = Identifier::new(tokens);
        let equals = Symbol::new(tokens, Some("="));
        let value = ConstValue::new(tokens);
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        Const { trivia, keyword, const_type, identifier, equals, value }
    }

    pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
        &mut self.trivia
    }
}

impl Production for Const {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.keyword.text(),
            self.const_type.text(),
            self.identifier.text(),
            self.equals.text(),
            self.value.text()
        )
    }
}

impl IdlNode for Const {
    fn idl_type(&self) -> &'static str {
        "const"
    }

    fn name(&self) -> Option<&str> {
        Some(self.identifier.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_round_trips() {
        use crate::ui::NullUi;
        use std::cell::RefCell;
        use std::rc::Rc;
        let mut t = Tokenizer::new("const long MAX = 42;", Rc::new(RefCell::new(NullUi)));
        assert!(Const::peek(&mut t));
        let c = Const::new(&mut t);
        assert_eq!(c.name(), Some("MAX"));
        assert_eq!(c.value.text(), "42");
        assert_eq!(c.text(), "const long MAX = 42;");
    }
}
