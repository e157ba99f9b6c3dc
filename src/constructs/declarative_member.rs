//! The anonymous declarative container members: `iterable<...>`,
//! `async iterable<...>`, `maplike<...>`, `setlike<...>`, and the legacy
//! `legacyiterable<T>` spelling. Each is a member in its own right (a
//! synthesized name, no symbol-table entry) rather than a modifier on
//! something else.

use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::base::Symbol;
use crate::productions::extended_attributes::ExtendedAttributeList;
use crate::productions::types::Type;
use crate::tokenizer::Tokenizer;

fn finish_semicolon(tokens: &mut Tokenizer, trivia: &mut Trivia) {
    if Symbol::peek(tokens, Some(";")) {
        trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
    } else {
        trivia.tail = tokens.syntax_error(&[";"], true);
    }
}

/// `"iterable" "<" Type ["," Type] ">"` or the deprecated
/// `"legacyiterable" "<" Type ">"` spelling.
#[derive(Debug, Clone)]
pub struct Iterable {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    keyword: Symbol,
    open: Symbol,
    pub key_or_value: Type,
    pub value: Option<(Symbol, Type)>,
    close: Symbol,
}

impl Iterable {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let ok = Symbol::peek(tokens, Some("iterable")) || Symbol::peek(tokens, Some("legacyiterable"));
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let keyword = Symbol::new(tokens, None);
        let open = Symbol::new(tokens, Some("<"));
        let key_or_value = Type::new(tokens);
        let value = if Symbol::peek(tokens, Some(",")) {
            let comma = Symbol::new(tokens, Some(","));
            Some((comma, Type::new(tokens)))
        } else {
            None
        };
        let close = Symbol::new(tokens, Some(">"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        finish_semicolon(tokens, &mut trivia);
        Iterable { trivia, extended_attributes, keyword, open, key_or_value, value, close }
    }

    pub fn is_legacy(&self) -> bool {
        self.keyword.raw_text() == "legacyiterable"
    }
}

impl Production for Iterable {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        out.push_str(&self.keyword.text());
        out.push_str(&self.open.text());
        out.push_str(&self.key_or_value.text());
        if let Some((comma, v)) = &self.value {
            out.push_str(&comma.text());
            out.push_str(&v.text());
        }
        out.push_str(&self.close.text());
        out
    }
}

impl IdlNode for Iterable {
    fn idl_type(&self) -> &'static str {
        "iterable"
    }

    fn name(&self) -> Option<&str> {
        Some("__iterable__")
    }
}

/// `"async" "iterable" "<" Type "," Type ">"`.
#[derive(Debug, Clone)]
pub struct AsyncIterable {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    async_keyword: Symbol,
    keyword: Symbol,
    open: Symbol,
    pub key: Type,
    comma: Symbol,
    pub value: Type,
    close: Symbol,
}

impl AsyncIterable {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let ok = Symbol::peek(tokens, Some("async"));
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let async_keyword = Symbol::new(tokens, Some("async"));
        let keyword = Symbol::new(tokens, Some("iterable"));
        let open = Symbol::new(tokens, Some("<"));
        let key = Type::new(tokens);
        let comma = Symbol::new(tokens, Some(","));
        let value = Type::new(tokens);
        let close = Symbol::new(tokens, Some(">"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        finish_semicolon(tokens, &mut trivia);
        AsyncIterable { trivia, extended_attributes, async_keyword, keyword, open, key, comma, value, close }
    }
}

impl Production for AsyncIterable {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        out.push_str(&self.async_keyword.text());
        out.push_str(&self.keyword.text());
        out.push_str(&self.open.text());
        out.push_str(&self.key.text());
        out.push_str(&self.comma.text());
        out.push_str(&self.value.text());
        out.push_str(&self.close.text());
        out
    }
}

impl IdlNode for AsyncIterable {
    fn idl_type(&self) -> &'static str {
        "async-iterable"
    }

    fn name(&self) -> Option<&str> {
        Some("__async_iterable__")
    }
}

/// `["readonly"] "maplike" "<" Type "," Type ">"`.
#[derive(Debug, Clone)]
pub struct Maplike {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub readonly: Option<Symbol>,
    keyword: Symbol,
    open: Symbol,
    pub key: Type,
    comma: Symbol,
    pub value: Type,
    close: Symbol,
}

impl Maplike {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let _ = Symbol::peek(tokens, Some("readonly"));
        let ok = Symbol::peek(tokens, Some("maplike"));
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let readonly = if Symbol::peek(tokens, Some("readonly")) { Some(Symbol::new(tokens, Some("readonly"))) } else { None };
        let keyword = Symbol::new(tokens, Some("maplike"));
        let open = Symbol::new(tokens, Some("<"));
        let key = Type::new(tokens);
        let comma = Symbol::new(tokens, Some(","));
        let value = Type::new(tokens);
        let close = Symbol::new(tokens, Some(">"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        finish_semicolon(tokens, &mut trivia);
        Maplike { trivia, extended_attributes, readonly, keyword, open, key, comma, value, close }
    }
}

impl Production for Maplike {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        if let Some(r) = &self.readonly {
            out.push_str(&r.text());
        }
        out.push_str(&self.keyword.text());
        out.push_str(&self.open.text());
        out.push_str(&self.key.text());
        out.push_str(&self.comma.text());
        out.push_str(&self.value.text());
        out.push_str(&self.close.text());
        out
    }
}

impl IdlNode for Maplike {
    fn idl_type(&self) -> &'static str {
        "maplike"
    }

    fn name(&self) -> Option<&str> {
        Some("__maplike__")
    }
}

/// `["readonly"] "setlike" "<" Type ">"`.
#[derive(Debug, Clone)]
pub struct Setlike {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub readonly: Option<Symbol>,
    keyword: Symbol,
    open: Symbol,
    pub value: Type,
    close: Symbol,
}

impl Setlike {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let _ = Symbol::peek(tokens, Some("readonly"));
        let ok = Symbol::peek(tokens, Some("setlike"));
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let readonly = if Symbol::peek(tokens, Some("readonly")) { Some(Symbol::new(tokens, Some("readonly"))) } else { None };
        let keyword = Symbol::new(tokens, Some("setlike"));
        let open = Symbol::new(tokens, Some("<"));
        let value = Type::new(tokens);
        let close = Symbol::new(tokens, Some(">"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        finish_semicolon(tokens, &mut trivia);
        Setlike { trivia, extended_attributes, readonly, keyword, open, value, close }
    }
}

impl Production for Setlike {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        if let Some(r) = &self.readonly {
            out.push_str(&r.text());
        }
        out.push_str(&self.keyword.text());
        out.push_str(&self.open.text());
        out.push_str(&self.value.text());
        out.push_str(&self.close.text());
        out
    }
}

impl IdlNode for Setlike {
    fn idl_type(&self) -> &'static str {
        "setlike"
    }

    fn name(&self) -> Option<&str> {
        Some("__setlike__")
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
    fn test_iterable_single_type() {
        let mut t = tokenizer("iterable<long>;");
        assert!(Iterable::peek(&mut t));
        let it = Iterable::new(&mut t);
        assert_eq!(it.name(), Some("__iterable__"));
        assert!(it.value.is_none());
        assert!(!it.is_legacy());
    }

    #[test]
    fn test_legacyiterable() {
        let mut t = tokenizer("legacyiterable<long>;");
        let it = Iterable::new(&mut t);
        assert!(it.is_legacy());
    }

    #[test]
    fn test_maplike_round_trips() {
        let mut t = tokenizer(" readonly maplike<DOMString, long>;");
        let m = Maplike::new(&mut t);
        assert_eq!(m.text(), " readonly maplike<DOMString, long>;");
        assert_eq!(m.idl_type(), "maplike");
    }

    #[test]
    fn test_async_iterable() {
        let mut t = tokenizer("async iterable<DOMString, long>;");
        assert!(AsyncIterable::peek(&mut t));
        let a = AsyncIterable::new(&mut t);
        assert_eq!(a.idl_type(), "async-iterable");
    }
}
