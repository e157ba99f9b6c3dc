//! `Stringifier` and `StaticMember`: wrappers around an `Attribute` or
//! `OperationRest`-shaped operation, distinguished from a plain
//! `Attribute`/`Operation` only by the leading keyword. Both forward
//! `idl_type`/`name` to the wrapped shape so lookup doesn't need to know
//! which keyword introduced a member; the bare `stringifier;` form gets
//! its own synthesized name, matching the special-operation convention.

use crate::constructs::attribute::Attribute;
use crate::constructs::operation::OperationRest;
use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::base::Symbol;
use crate::productions::extended_attributes::ExtendedAttributeList;
use crate::productions::types::ReturnType;
use crate::tokenizer::Tokenizer;
use crate::ui::Ui;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone)]
enum Wrapped {
    Attribute(Attribute),
    Operation { return_type: ReturnType, rest: OperationRest },
    Bare,
}

/// `"stringifier" (Attribute | ReturnType OperationRest | ";")`.
#[derive(Debug, Clone)]
pub struct Stringifier {
    trivia: Trivia,
    keyword: Symbol,
    wrapped: Wrapped,
}

impl Stringifier {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        Symbol::peek(tokens, Some("stringifier"))
    }

    pub fn new(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        let leading_space = tokens.whitespace();
        let keyword = Symbol::new(tokens, Some("stringifier"));
        if Attribute::peek(tokens) {
            let attr = Attribute::new(tokens);
            return Stringifier { trivia: Trivia { leading_space, ..Default::default() }, keyword, wrapped: Wrapped::Attribute(attr) };
        }
        if Symbol::peek(tokens, Some(";")) {
            let mut trivia = Trivia { leading_space, ..Default::default() };
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
            return Stringifier { trivia, keyword, wrapped: Wrapped::Bare };
        }
        let return_type = ReturnType::new(tokens);
        let rest = OperationRest::new(tokens, dictionary_has_no_required_members, ui);
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        Stringifier { trivia, keyword, wrapped: Wrapped::Operation { return_type, rest } }
    }
}

impl Production for Stringifier {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = self.keyword.text();
        match &self.wrapped {
            Wrapped::Attribute(a) => out.push_str(&a.text()),
            Wrapped::Operation { return_type, rest } => {
                out.push_str(&return_type.text());
                out.push_str(&rest.text());
            }
            Wrapped::Bare => {}
        }
        out
    }
}

impl IdlNode for Stringifier {
    fn idl_type(&self) -> &'static str {
        match &self.wrapped {
            Wrapped::Attribute(_) => "attribute",
            Wrapped::Operation { .. } => "method",
            Wrapped::Bare => "stringifier",
        }
    }

    fn name(&self) -> Option<&str> {
        match &self.wrapped {
            Wrapped::Attribute(a) => a.name(),
            Wrapped::Operation { rest, .. } => rest.declared_name().or(Some("__stringifier__")),
            Wrapped::Bare => Some("__stringifier__"),
        }
    }
}

/// `"static" (Attribute | ReturnType OperationRest)`, used by interfaces
/// and mixins for class-side members.
#[derive(Debug, Clone)]
pub struct StaticMember {
    trivia: Trivia,
    keyword: Symbol,
    wrapped: Wrapped,
}

impl StaticMember {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        Symbol::peek(tokens, Some("static"))
    }

    pub fn new(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        let leading_space = tokens.whitespace();
        let keyword = Symbol::new(tokens, Some("static"));
        if Attribute::peek(tokens) {
            let attr = Attribute::new(tokens);
            return StaticMember { trivia: Trivia { leading_space, ..Default::default() }, keyword, wrapped: Wrapped::Attribute(attr) };
        }
        let return_type = ReturnType::new(tokens);
        let rest = OperationRest::new(tokens, dictionary_has_no_required_members, ui);
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        StaticMember { trivia, keyword, wrapped: Wrapped::Operation { return_type, rest } }
    }
}

impl Production for StaticMember {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = self.keyword.text();
        match &self.wrapped {
            Wrapped::Attribute(a) => out.push_str(&a.text()),
            Wrapped::Operation { return_type, rest } => {
                out.push_str(&return_type.text());
                out.push_str(&rest.text());
            }
            Wrapped::Bare => {}
        }
        out
    }
}

impl IdlNode for StaticMember {
    fn idl_type(&self) -> &'static str {
        match &self.wrapped {
            Wrapped::Attribute(_) => "attribute",
            _ => "method",
        }
    }

    fn name(&self) -> Option<&str> {
        match &self.wrapped {
            Wrapped::Attribute(a) => a.name(),
            Wrapped::Operation { rest, .. } => rest.declared_name(),
            Wrapped::Bare => None,
        }
    }
}

// Unused but kept for symmetry with `Operation`/`SpecialOperation`: both
// wrappers expose `method_name` once they settle on an operation shape.
impl Stringifier {
    pub fn method_name(&self) -> Option<String> {
        match &self.wrapped {
            Wrapped::Operation { rest, .. } => {
                Some(format!("{}({})", self.name().unwrap_or_default(), rest.arguments.as_ref().map(|a| a.first_variant()).unwrap_or_default()))
            }
            _ => None,
        }
    }
}

impl StaticMember {
    pub fn method_name(&self) -> Option<String> {
        match &self.wrapped {
            Wrapped::Operation { rest, .. } => {
                Some(format!("{}({})", self.name().unwrap_or_default(), rest.arguments.as_ref().map(|a| a.first_variant()).unwrap_or_default()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::NullUi;

    fn tokenizer(text: &str) -> Tokenizer {
        Tokenizer::new(text, Rc::new(RefCell::new(NullUi)))
    }

    #[test]
    fn test_bare_stringifier_synthesizes_name() {
        let mut t = tokenizer("stringifier;");
        let ui: Rc<RefCell<dyn Ui>> = Rc::new(RefCell::new(NullUi));
        let s = Stringifier::new(&mut t, None, &ui);
        assert_eq!(s.idl_type(), "stringifier");
        assert_eq!(s.name(), Some("__stringifier__"));
    }

    #[test]
    fn test_stringifier_attribute_forwards_idl_type() {
        let mut t = tokenizer("stringifier attribute DOMString name;");
        let ui: Rc<RefCell<dyn Ui>> = Rc::new(RefCell::new(NullUi));
        let s = Stringifier::new(&mut t, None, &ui);
        assert_eq!(s.idl_type(), "attribute");
        assert_eq!(s.name(), Some("name"));
    }

    #[test]
    fn test_static_operation() {
        let mut t = tokenizer("static void reset();");
        let ui: Rc<RefCell<dyn Ui>> = Rc::new(RefCell::new(NullUi));
        let s = StaticMember::new(&mut t, None, &ui);
        assert_eq!(s.idl_type(), "method");
        assert_eq!(s.name(), Some("reset"));
    }
}
