//! `TopLevel`: the tagged union of everything that can appear at the
//! top of a WebIDL fragment, plus the dispatch function encoding the
//! peek-precedence table from §4.1: Callback, Interface, Mixin,
//! Namespace, Dictionary, Enum, Typedef, the deprecated top-level
//! `Const`, `ImplementsStatement`, `IncludesStatement`, else
//! `SyntaxError`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::constructs::callback::Callback;
use crate::constructs::const_member::Const;
use crate::constructs::container::{Dictionary, Interface, Mixin, Namespace};
use crate::constructs::enum_construct::Enum;
use crate::constructs::implements_includes::{ImplementsStatement, IncludesStatement};
use crate::constructs::syntax_error::SyntaxError;
use crate::constructs::typedef::Typedef;
use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::tokenizer::Tokenizer;
use crate::ui::Ui;

#[derive(Debug, Clone)]
pub enum TopLevel {
    Callback(Callback),
    Interface(Interface),
    Mixin(Mixin),
    Namespace(Namespace),
    Dictionary(Dictionary),
    Enum(Enum),
    Typedef(Typedef),
    Const(Const),
    Implements(ImplementsStatement),
    Includes(IncludesStatement),
    SyntaxError(SyntaxError),
}

impl TopLevel {
    /// `dictionary_has_no_required_members` backs `ArgumentList`'s
    /// required-dictionary-argument-must-be-optional rule; callers
    /// without a symbol table (bare round-trip parsing) can pass `None`
    /// and the rule is simply never triggered.
    pub fn parse(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        if Callback::peek(tokens) {
            return TopLevel::Callback(Callback::new(tokens, dictionary_has_no_required_members, ui));
        }
        if Interface::peek(tokens) {
            return TopLevel::Interface(Interface::new(tokens, dictionary_has_no_required_members, ui));
        }
        if Mixin::peek(tokens) {
            return TopLevel::Mixin(Mixin::new(tokens, dictionary_has_no_required_members, ui));
        }
        if Namespace::peek(tokens) {
            return TopLevel::Namespace(Namespace::new(tokens, dictionary_has_no_required_members, ui));
        }
        if Dictionary::peek(tokens) {
            return TopLevel::Dictionary(Dictionary::new(tokens));
        }
        if Enum::peek(tokens) {
            return TopLevel::Enum(Enum::new(tokens));
        }
        if Typedef::peek(tokens) {
            return TopLevel::Typedef(Typedef::new(tokens));
        }
        if Const::peek(tokens) {
            return TopLevel::Const(Const::new(tokens));
        }
        if ImplementsStatement::peek(tokens) {
            return TopLevel::Implements(ImplementsStatement::new(tokens));
        }
        if IncludesStatement::peek(tokens) {
            return TopLevel::Includes(IncludesStatement::new(tokens));
        }
        TopLevel::SyntaxError(SyntaxError::new(tokens))
    }

    /// The nested member/constructor query surface, where the variant
    /// holds one (everything but the leaf constructs).
    pub fn as_interface(&self) -> Option<&Interface> {
        match self {
            TopLevel::Interface(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_mixin(&self) -> Option<&Mixin> {
        match self {
            TopLevel::Mixin(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            TopLevel::Namespace(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            TopLevel::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&Enum> {
        match self {
            TopLevel::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            TopLevel::Callback(c) => Some(c),
            _ => None,
        }
    }

    /// Mutable access to this construct's own trivia, used by
    /// [`crate::parser::Parser::parse`] to attach document-final
    /// whitespace to the last construct parsed (there is no following
    /// construct for it to show up as leading space on).
    pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
        match self {
            TopLevel::Callback(c) => c.trivia_mut(),
            TopLevel::Interface(c) => c.trivia_mut(),
            TopLevel::Mixin(c) => c.trivia_mut(),
            TopLevel::Namespace(c) => c.trivia_mut(),
            TopLevel::Dictionary(c) => c.trivia_mut(),
            TopLevel::Enum(c) => c.trivia_mut(),
            TopLevel::Typedef(c) => c.trivia_mut(),
            TopLevel::Const(c) => c.trivia_mut(),
            TopLevel::Implements(c) => c.trivia_mut(),
            TopLevel::Includes(c) => c.trivia_mut(),
            TopLevel::SyntaxError(c) => c.trivia_mut(),
        }
    }
}

impl Production for TopLevel {
    fn trivia(&self) -> &Trivia {
        match self {
            TopLevel::Callback(c) => c.trivia(),
            TopLevel::Interface(c) => c.trivia(),
            TopLevel::Mixin(c) => c.trivia(),
            TopLevel::Namespace(c) => c.trivia(),
            TopLevel::Dictionary(c) => c.trivia(),
            TopLevel::Enum(c) => c.trivia(),
            TopLevel::Typedef(c) => c.trivia(),
            TopLevel::Const(c) => c.trivia(),
            TopLevel::Implements(c) => c.trivia(),
            TopLevel::Includes(c) => c.trivia(),
            TopLevel::SyntaxError(c) => c.trivia(),
        }
    }

    fn body_text(&self) -> String {
        match self {
            TopLevel::Callback(c) => c.body_text(),
            TopLevel::Interface(c) => c.body_text(),
            TopLevel::Mixin(c) => c.body_text(),
            TopLevel::Namespace(c) => c.body_text(),
            TopLevel::Dictionary(c) => c.body_text(),
            TopLevel::Enum(c) => c.body_text(),
            TopLevel::Typedef(c) => c.body_text(),
            TopLevel::Const(c) => c.body_text(),
            TopLevel::Implements(c) => c.body_text(),
            TopLevel::Includes(c) => c.body_text(),
            TopLevel::SyntaxError(c) => c.body_text(),
        }
    }
}

impl IdlNode for TopLevel {
    fn idl_type(&self) -> &'static str {
        match self {
            TopLevel::Callback(c) => c.idl_type(),
            TopLevel::Interface(c) => c.idl_type(),
            TopLevel::Mixin(c) => c.idl_type(),
            TopLevel::Namespace(c) => c.idl_type(),
            TopLevel::Dictionary(c) => c.idl_type(),
            TopLevel::Enum(c) => c.idl_type(),
            TopLevel::Typedef(c) => c.idl_type(),
            TopLevel::Const(c) => c.idl_type(),
            TopLevel::Implements(c) => c.idl_type(),
            TopLevel::Includes(c) => c.idl_type(),
            TopLevel::SyntaxError(c) => c.idl_type(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            TopLevel::Callback(c) => c.name(),
            TopLevel::Interface(c) => c.name(),
            TopLevel::Mixin(c) => c.name(),
            TopLevel::Namespace(c) => c.name(),
            TopLevel::Dictionary(c) => c.name(),
            TopLevel::Enum(c) => c.name(),
            TopLevel::Typedef(c) => c.name(),
            TopLevel::Const(c) => c.name(),
            TopLevel::Implements(c) => c.name(),
            TopLevel::Includes(c) => c.name(),
            TopLevel::SyntaxError(c) => c.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::NullUi;

    fn ui() -> Rc<RefCell<dyn Ui>> {
        Rc::new(RefCell::new(NullUi))
    }

    #[test]
    fn test_dispatches_interface() {
        let mut t = Tokenizer::new("interface Foo { };", ui());
        let top = TopLevel::parse(&mut t, None, &ui());
        assert!(matches!(top, TopLevel::Interface(_)));
        assert_eq!(top.name(), Some("Foo"));
    }

    #[test]
    fn test_dispatches_mixin_before_interface() {
        let mut t = Tokenizer::new("interface mixin Bar { };", ui());
        let top = TopLevel::parse(&mut t, None, &ui());
        assert!(matches!(top, TopLevel::Mixin(_)));
    }

    #[test]
    fn test_dispatches_includes_statement() {
        let mut t = Tokenizer::new("Window includes WindowSessionStorage;", ui());
        let top = TopLevel::parse(&mut t, None, &ui());
        assert!(matches!(top, TopLevel::Includes(_)));
    }

    #[test]
    fn test_falls_back_to_syntax_error() {
        let mut t = Tokenizer::new("%%% garbage ;", ui());
        let top = TopLevel::parse(&mut t, None, &ui());
        assert!(matches!(top, TopLevel::SyntaxError(_)));
    }
}
