//! `Operation`, `SpecialOperation`, and the bare `constructor(...)` member
//! form, all built on the shared `OperationRest` tail.

use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::arguments::ArgumentList;
use crate::productions::base::{Identifier, Symbol};
use crate::productions::extended_attributes::ExtendedAttributeList;
use crate::productions::inheritance::Ignore;
use crate::productions::types::ReturnType;
use crate::tokenizer::Tokenizer;
use crate::ui::Ui;
use std::cell::RefCell;
use std::rc::Rc;

/// `[Identifier] "(" [ArgumentList] ")" [Ignore]`. The identifier is
/// absent for every anonymous declarative member (special operations,
/// iterable, maplike, setlike) — those callers supply a synthesized name
/// separately rather than reading `OperationRest::name`. `Ignore` absorbs
/// a trailing `raises(...)`/`getraises(...)`/`setraises(...)` clause some
/// pre-standardization bindings carried after the argument list.
#[derive(Debug, Clone)]
pub struct OperationRest {
    trivia: Trivia,
    pub identifier: Option<Identifier>,
    open: Symbol,
    pub arguments: Option<ArgumentList>,
    close: Symbol,
    ignore: Option<Ignore>,
}

impl OperationRest {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = Identifier::peek(tokens);
        let ok = Symbol::peek(tokens, Some("("));
        tokens.pop_position(ok)
    }

    pub fn new(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        let leading_space = tokens.whitespace();
        let identifier = if Identifier::peek(tokens) { Some(Identifier::new(tokens)) } else { None };
        let open = Symbol::new(tokens, Some("("));
        let arguments = if ArgumentList::peek(tokens) {
            Some(ArgumentList::new(tokens, dictionary_has_no_required_members, ui))
        } else {
            None
        };
        let close = Symbol::new(tokens, Some(")"));
        let ignore = if Ignore::peek(tokens) { Some(Ignore::new(tokens)) } else { None };
        OperationRest { trivia: Trivia { leading_space, ..Default::default() }, identifier, open, arguments, close, ignore }
    }

    pub fn declared_name(&self) -> Option<&str> {
        self.identifier.as_ref().map(|i| i.name())
    }

    pub fn argument_name_variants(&self) -> Vec<String> {
        self.arguments.as_ref().map(|a| a.argument_name_variants()).unwrap_or_else(|| vec![String::new()])
    }
}

impl Production for OperationRest {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(i) = &self.identifier {
            out.push_str(&i.text());
        }
        out.push_str(&self.open.text());
        if let Some(a) = &self.arguments {
            out.push_str(&a.text());
        }
        out.push_str(&self.close.text());
        if let Some(ignore) = &self.ignore {
            out.push_str(&ignore.text());
        }
        out
    }
}

/// A regular operation: `[ExtendedAttributeList] ReturnType OperationRest ";"`.
/// Always named — an unnamed `OperationRest` only ever occurs behind a
/// special-operation or declarative-member keyword, never bare.
#[derive(Debug, Clone)]
pub struct Operation {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub return_type: ReturnType,
    pub rest: OperationRest,
}

impl Operation {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let ok = ReturnType::peek(tokens);
        tokens.pop_position(ok)
    }

    pub fn new(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let return_type = ReturnType::new(tokens);
        let rest = OperationRest::new(tokens, dictionary_has_no_required_members, ui);
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        Operation { trivia, extended_attributes, return_type, rest }
    }

    pub fn method_name(&self) -> String {
        format!("{}({})", self.name().unwrap_or_default(), self.rest.arguments.as_ref().map(|a| a.first_variant()).unwrap_or_default())
    }
}

impl Production for Operation {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        out.push_str(&self.return_type.text());
        out.push_str(&self.rest.text());
        out
    }
}

impl IdlNode for Operation {
    fn idl_type(&self) -> &'static str {
        "method"
    }

    fn name(&self) -> Option<&str> {
        self.rest.declared_name()
    }
}

const SPECIAL_KEYWORDS: &[&str] = &["getter", "setter", "creator", "deleter", "legacycaller"];

/// One or more of `{getter, setter, creator, deleter, legacycaller}`
/// followed by a `ReturnType` and `OperationRest`. When `OperationRest`
/// carries no identifier the member's name is synthesized as
/// `__<specials joined by _>__`; that synthesized name is never entered
/// into the symbol table.
#[derive(Debug, Clone)]
pub struct SpecialOperation {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub specials: Vec<Symbol>,
    pub return_type: ReturnType,
    pub rest: OperationRest,
    synthesized_name: String,
}

impl SpecialOperation {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let ok = tokens.peek().is_some_and(|t| SPECIAL_KEYWORDS.contains(&t.text.as_str()));
        tokens.pop_position(ok)
    }

    pub fn new(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let mut specials = Vec::new();
        while tokens.peek().is_some_and(|t| SPECIAL_KEYWORDS.contains(&t.text.as_str())) {
            specials.push(Symbol::new(tokens, None));
        }
        let return_type = ReturnType::new(tokens);
        let rest = OperationRest::new(tokens, dictionary_has_no_required_members, ui);
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        let synthesized_name = crate::constructs::synthesize_name(
            &specials.iter().map(|s| s.raw_text()).collect::<Vec<_>>(),
        );
        SpecialOperation { trivia, extended_attributes, specials, return_type, rest, synthesized_name }
    }

    pub fn method_name(&self) -> String {
        format!("{}({})", self.name().unwrap_or_default(), self.rest.arguments.as_ref().map(|a| a.first_variant()).unwrap_or_default())
    }
}

impl Production for SpecialOperation {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        for s in &self.specials {
            out.push_str(&s.text());
        }
        out.push_str(&self.return_type.text());
        out.push_str(&self.rest.text());
        out
    }
}

impl IdlNode for SpecialOperation {
    fn idl_type(&self) -> &'static str {
        "method"
    }

    fn name(&self) -> Option<&str> {
        Some(self.rest.declared_name().unwrap_or(&self.synthesized_name))
    }
}

/// The bare `constructor(ArgumentList);` member form that superseded the
/// `[Constructor(...)]` extended attribute. `idl_type` is `"constructor"`
/// and `name` is always `"constructor"`, matching the lifted legacy
/// extended-attribute form so both sort into the same lookup surface.
#[derive(Debug, Clone)]
pub struct ConstructorMember {
    trivia: Trivia,
    keyword: Symbol,
    open: Symbol,
    pub arguments: Option<ArgumentList>,
    close: Symbol,
}

impl ConstructorMember {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        Symbol::peek(tokens, Some("constructor"))
    }

    pub fn new(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        let leading_space = tokens.whitespace();
        let keyword = Symbol::new(tokens, Some("constructor"));
        let open = Symbol::new(tokens, Some("("));
        let arguments = if ArgumentList::peek(tokens) {
            Some(ArgumentList::new(tokens, dictionary_has_no_required_members, ui))
        } else {
            None
        };
        let close = Symbol::new(tokens, Some(")"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        ConstructorMember { trivia, keyword, open, arguments, close }
    }

    pub fn method_name(&self) -> String {
        format!("constructor({})", self.arguments.as_ref().map(|a| a.first_variant()).unwrap_or_default())
    }
}

impl Production for ConstructorMember {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = format!("{}{}", self.keyword.text(), self.open.text());
        if let Some(a) = &self.arguments {
            out.push_str(&a.text());
        }
        out.push_str(&self.close.text());
        out
    }
}

impl IdlNode for ConstructorMember {
    fn idl_type(&self) -> &'static str {
        "constructor"
    }

    fn name(&self) -> Option<&str> {
        Some("constructor")
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
    fn test_special_operation_synthesizes_getter_name() {
        let mut t = tokenizer("getter long (long index);");
        assert!(SpecialOperation::peek(&mut t));
        let ui: Rc<RefCell<dyn Ui>> = Rc::new(RefCell::new(NullUi));
        let op = SpecialOperation::new(&mut t, None, &ui);
        assert_eq!(op.name(), Some("__getter__"));
        assert_eq!(op.method_name(), "__getter__(index)");
    }

    #[test]
    fn test_operation_round_trips() {
        let mut t = tokenizer(" void set(long v) ;");
        assert!(Operation::peek(&mut t));
        let ui: Rc<RefCell<dyn Ui>> = Rc::new(RefCell::new(NullUi));
        let op = Operation::new(&mut t, None, &ui);
        assert_eq!(op.name(), Some("set"));
        assert_eq!(op.text(), " void set(long v) ;");
    }

    #[test]
    fn test_operation_absorbs_legacy_raises() {
        let mut t = tokenizer("void set(long v) raises(DOMException);");
        assert!(Operation::peek(&mut t));
        let ui: Rc<RefCell<dyn Ui>> = Rc::new(RefCell::new(NullUi));
        let op = Operation::new(&mut t, None, &ui);
        assert_eq!(op.name(), Some("set"));
        assert_eq!(op.text(), "void set(long v) raises(DOMException);");
    }

    #[test]
    fn test_constructor_member() {
        let mut t = tokenizer("constructor(long x);");
        assert!(ConstructorMember::peek(&mut t));
        let ui: Rc<RefCell<dyn Ui>> = Rc::new(RefCell::new(NullUi));
        let ctor = ConstructorMember::new(&mut t, None, &ui);
        assert_eq!(ctor.idl_type(), "constructor");
        assert_eq!(ctor.name(), Some("constructor"));
    }
}
