//! `ImplementsStatement` (deprecated) and `IncludesStatement`:
//! `Identifier ("implements" | "includes") Identifier ";"`.

use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::base::{Symbol, TypeIdentifier};
use crate::tokenizer::Tokenizer;

macro_rules! left_right_statement {
    ($name:ident, $keyword:literal, $idl_type:literal) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            trivia: Trivia,
            pub left: TypeIdentifier,
            keyword: Symbol,
            pub right: TypeIdentifier,
        }

        impl $name {
            pub fn peek(tokens: &mut Tokenizer) -> bool {
                tokens.push_position();
                let ok = TypeIdentifier::peek(tokens) && {
                    let _ = TypeIdentifier::new(tokens);
                    Symbol::peek(tokens, Some($keyword))
                };
                tokens.pop_position(ok)
            }

            pub fn new(tokens: &mut Tokenizer) -> Self {
                let leading_space = tokens.whitespace();
                let left = TypeIdentifier::new(tokens);
                let keyword = Symbol::new(tokens, Some($keyword));
                let right = TypeIdentifier::new(tokens);
                let mut trivia = Trivia { leading_space, ..Default::default() };
                if Symbol::peek(tokens, Some(";")) {
                    trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
                } else {
                    trivia.tail = tokens.syntax_error(&[";"], true);
                }
                $name { trivia, left, keyword, right }
            }

            pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
                &mut self.trivia
            }
        }

        impl Production for $name {
            fn trivia(&self) -> &Trivia {
                &self.trivia
            }

            fn body_text(&self) -> String {
                format!("{}{}{}", self.left.text(), self.keyword.text(), self.right.text())
            }
        }

        impl IdlNode for $name {
            fn idl_type(&self) -> &'static str {
                $idl_type
            }

            fn name(&self) -> Option<&str> {
                Some(self.left.name())
            }
        }
    };
}

left_right_statement!(ImplementsStatement, "implements", "implements");
left_right_statement!(IncludesStatement, "includes", "includes");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::NullUi;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_includes_statement() {
        let mut t = Tokenizer::new("Window includes WindowOrWorkerGlobalScope;", Rc::new(RefCell::new(NullUi)));
        assert!(IncludesStatement::peek(&mut t));
        let inc = IncludesStatement::new(&mut t);
        assert_eq!(inc.left.name(), "Window");
        assert_eq!(inc.right.name(), "WindowOrWorkerGlobalScope");
    }

    #[test]
    fn test_implements_statement_legacy() {
        let mut t = Tokenizer::new("A implements B;", Rc::new(RefCell::new(NullUi)));
        assert!(ImplementsStatement::peek(&mut t));
        let imp = ImplementsStatement::new(&mut t);
        assert_eq!(imp.idl_type(), "implements");
    }
}
