//! `Enum`: `"enum" Identifier "{" EnumValueList "}" ";"`.

use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::base::{Identifier, Symbol};
use crate::productions::literals::EnumValueList;
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone)]
pub struct Enum {
    trivia: Trivia,
    keyword: Symbol,
    pub identifier: Identifier,
    open: Symbol,
    pub values: EnumValueList,
    close: Symbol,
}

impl Enum {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        Symbol::peek(tokens, Some("enum"))
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let keyword = Symbol::new(tokens, Some("enum"));
        let identifier = Identifier::new(tokens);
        let open = Symbol::new(tokens, Some("{"));
        let values = EnumValueList::new(tokens, &mut |t| {
            t.did_ignore("trailing comma in enum value list");
        });
        let close = Symbol::new(tokens, Some("}"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        Enum { trivia, keyword, identifier, open, values, close }
    }

    /// The enum's value names, in declaration order, quotes stripped.
    pub fn values(&self) -> Vec<String> {
        self.values.names().into_iter().map(|v| v.trim_matches('"').to_string()).collect()
    }

    pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
        &mut self.trivia
    }
}

impl Production for Enum {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.keyword.text(),
            self.identifier.text(),
            self.open.text(),
            self.values.text(),
            self.close.text()
        )
    }
}

impl IdlNode for Enum {
    fn idl_type(&self) -> &'static str {
        "enum"
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
    fn test_enum_round_trips() {
        let mut t = Tokenizer::new(
            r#"enum MealType { "rice", "noodles", "other" };"#,
            Rc::new(RefCell::new(NullUi)),
        );
        assert!(Enum::peek(&mut t));
        let e = Enum::new(&mut t);
        assert_eq!(e.name(), Some("MealType"));
        assert_eq!(e.values(), vec!["rice", "noodles", "other"]);
        assert_eq!(e.text(), r#"enum MealType { "rice", "noodles", "other" };"#);
    }

    #[test]
    fn test_enum_trailing_comma_preserved() {
        let mut t = Tokenizer::new(r#"enum E { "a", };"#, Rc::new(RefCell::new(NullUi)));
        let e = Enum::new(&mut t);
        assert_eq!(e.values(), vec!["a"]);
        assert_eq!(e.text(), r#"enum E { "a", };"#);
    }
}
