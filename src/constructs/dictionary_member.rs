//! `DictionaryMember`: the body of a `Dictionary` container.
//! `[ExtendedAttributeList] ("required" TypeWithExtendedAttributes |
//! TypeWithExtendedAttributes [Default]) Identifier ";"` — `required`
//! members never carry a `Default`, matching the grammar.

use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::base::{Identifier, Symbol};
use crate::productions::extended_attributes::ExtendedAttributeList;
use crate::productions::literals::DefaultClause;
use crate::productions::types::TypeWithExtendedAttributes;
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone)]
pub struct DictionaryMember {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub required: Option<Symbol>,
    pub type_: TypeWithExtendedAttributes,
    pub identifier: Identifier,
    pub default: Option<DefaultClause>,
}

impl DictionaryMember {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let _ = Symbol::peek(tokens, Some("required"));
        let ok = TypeWithExtendedAttributes::peek(tokens);
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let required = if Symbol::peek(tokens, Some("required")) { Some(Symbol::new(tokens, Some("required"))) } else { None };
        let type_ = TypeWithExtendedAttributes::new(tokens);
        let identifier = Identifier::new(tokens);
        let default = if required.is_none() && DefaultClause::peek(tokens) { Some(DefaultClause::new(tokens)) } else { None };
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        DictionaryMember { trivia, extended_attributes, required, type_, identifier, default }
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }
}

impl Production for DictionaryMember {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        if let Some(r) = &self.required {
            out.push_str(&r.text());
        }
        out.push_str(&self.type_.text());
        out.push_str(&self.identifier.text());
        if let Some(d) = &self.default {
            out.push_str(&d.text());
        }
        out
    }
}

impl IdlNode for DictionaryMember {
    fn idl_type(&self) -> &'static str {
        "dict-member"
    }

    fn name(&self) -> Option<&str> {
        Some(self.identifier.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_member_round_trips() {
        let mut t = Tokenizer::new(
            "required DOMString name;",
            std::rc::Rc::new(std::cell::RefCell::new(crate::ui::NullUi)),
        );
        assert!(DictionaryMember::peek(&mut t));
        let m = DictionaryMember::new(&mut t);
        assert!(m.is_required());
        assert_eq!(m.name(), Some("name"));
        assert_eq!(m.text(), "required DOMString name;");
    }

    #[test]
    fn test_optional_member_with_default() {
        let mut t = Tokenizer::new(
            " long count = 0;",
            std::rc::Rc::new(std::cell::RefCell::new(crate::ui::NullUi)),
        );
        let m = DictionaryMember::new(&mut t);
        assert!(!m.is_required());
        assert!(m.default.is_some());
    }
}
