//! `Attribute`, shared across Interface, Mixin (where `inherit` never
//! appears), and Namespace (where only the `readonly` form is legal —
//! enforced by the container's member dispatch, not by this production).

use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::base::{Identifier, Symbol};
use crate::productions::extended_attributes::ExtendedAttributeList;
use crate::productions::inheritance::Ignore;
use crate::productions::types::TypeWithExtendedAttributes;
use crate::tokenizer::Tokenizer;

/// `[ExtendedAttributeList] ["inherit"] ["readonly"] "attribute"
/// TypeWithExtendedAttributes Identifier [Ignore] ";"`.
#[derive(Debug, Clone)]
pub struct Attribute {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub inherit: Option<Symbol>,
    pub readonly: Option<Symbol>,
    keyword: Symbol,
    pub type_: TypeWithExtendedAttributes,
    pub identifier: Identifier,
    ignore: Option<Ignore>,
}

impl Attribute {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let _ = Symbol::peek(tokens, Some("inherit"));
        let _ = Symbol::peek(tokens, Some("readonly"));
        let ok = Symbol::peek(tokens, Some("attribute"));
        tokens.pop_position(ok)
    }

    /// Like `peek`, but additionally requires a leading `readonly` —
    /// used by `NamespaceMember`, which only accepts the readonly form.
    pub fn peek_readonly(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Symbol::peek(tokens, Some("readonly")) && {
            let _ = Symbol::new(tokens, Some("readonly"));
            Symbol::peek(tokens, Some("attribute"))
        };
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let inherit = if Symbol::peek(tokens, Some("inherit")) { Some(Symbol::new(tokens, Some("inherit"))) } else { None };
        let readonly = if Symbol::peek(tokens, Some("readonly")) { Some(Symbol::new(tokens, Some("readonly"))) } else { None };
        let keyword = Symbol::new(tokens, Some("attribute"));
        let type_ = TypeWithExtendedAttributes::new(tokens);
        let identifier = Identifier::new(tokens);
        let ignore = if Ignore::peek(tokens) { Some(Ignore::new(tokens)) } else { None };
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        Attribute { trivia, extended_attributes, inherit, readonly, keyword, type_, identifier, ignore }
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly.is_some()
    }
}

impl Production for Attribute {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        if let Some(i) = &self.inherit {
            out.push_str(&i.text());
        }
        if let Some(r) = &self.readonly {
            out.push_str(&r.text());
        }
        out.push_str(&self.keyword.text());
        out.push_str(&self.type_.text());
        out.push_str(&self.identifier.text());
        if let Some(ignore) = &self.ignore {
            out.push_str(&ignore.text());
        }
        out
    }
}

impl IdlNode for Attribute {
    fn idl_type(&self) -> &'static str {
        "attribute"
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

    fn tokenizer(text: &str) -> Tokenizer {
        Tokenizer::new(text, Rc::new(RefCell::new(NullUi)))
    }

    #[test]
    fn test_readonly_attribute_round_trips() {
        let mut t = tokenizer(" readonly attribute long n;");
        assert!(Attribute::peek(&mut t));
        let attr = Attribute::new(&mut t);
        assert!(attr.is_readonly());
        assert_eq!(attr.name(), Some("n"));
        assert_eq!(attr.text(), " readonly attribute long n;");
    }

    #[test]
    fn test_legacy_inherits_getter_absorbed() {
        let mut t = tokenizer("attribute long n inherits getter;");
        let attr = Attribute::new(&mut t);
        assert_eq!(attr.name(), Some("n"));
        assert_eq!(attr.text(), "attribute long n inherits getter;");
    }

    #[test]
    fn test_namespace_requires_readonly() {
        let mut t = tokenizer("attribute long n;");
        assert!(!Attribute::peek_readonly(&mut t));
        let mut t2 = tokenizer("readonly attribute long n;");
        assert!(Attribute::peek_readonly(&mut t2));
    }
}
