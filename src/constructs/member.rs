//! `Member`: the tagged union of everything that can appear inside an
//! Interface, Mixin, or Namespace body, plus the three dispatch
//! functions (one per container kind) that encode the peek-precedence
//! tables from §4.2.

use std::cell::RefCell;
use std::rc::Rc;

use crate::constructs::attribute::Attribute;
use crate::constructs::const_member::Const;
use crate::constructs::declarative_member::{AsyncIterable, Iterable, Maplike, Setlike};
use crate::constructs::operation::{ConstructorMember, Operation, SpecialOperation};
use crate::constructs::stringifier::{StaticMember, Stringifier};
use crate::constructs::syntax_error::SyntaxError;
use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::tokenizer::Tokenizer;
use crate::ui::Ui;

#[derive(Debug, Clone)]
pub enum Member {
    Constructor(ConstructorMember),
    Const(Const),
    Stringifier(Stringifier),
    Static(StaticMember),
    AsyncIterable(AsyncIterable),
    Iterable(Iterable),
    Maplike(Maplike),
    Setlike(Setlike),
    Attribute(Attribute),
    SpecialOperation(SpecialOperation),
    Operation(Operation),
    SyntaxError(SyntaxError),
}

impl Member {
    /// `InterfaceMember` dispatch precedence: Constructor, Const,
    /// Stringifier, StaticMember, AsyncIterable, Iterable, Maplike,
    /// Setlike, Attribute, SpecialOperation, Operation, else SyntaxError.
    pub fn parse_interface_member(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        if ConstructorMember::peek(tokens) {
            return Member::Constructor(ConstructorMember::new(tokens, dictionary_has_no_required_members, ui));
        }
        if Const::peek(tokens) {
            return Member::Const(Const::new(tokens));
        }
        if Stringifier::peek(tokens) {
            return Member::Stringifier(Stringifier::new(tokens, dictionary_has_no_required_members, ui));
        }
        if StaticMember::peek(tokens) {
            return Member::Static(StaticMember::new(tokens, dictionary_has_no_required_members, ui));
        }
        if AsyncIterable::peek(tokens) {
            return Member::AsyncIterable(AsyncIterable::new(tokens));
        }
        if Iterable::peek(tokens) {
            return Member::Iterable(Iterable::new(tokens));
        }
        if Maplike::peek(tokens) {
            return Member::Maplike(Maplike::new(tokens));
        }
        if Setlike::peek(tokens) {
            return Member::Setlike(Setlike::new(tokens));
        }
        if Attribute::peek(tokens) {
            return Member::Attribute(Attribute::new(tokens));
        }
        if SpecialOperation::peek(tokens) {
            return Member::SpecialOperation(SpecialOperation::new(tokens, dictionary_has_no_required_members, ui));
        }
        if Operation::peek(tokens) {
            return Member::Operation(Operation::new(tokens, dictionary_has_no_required_members, ui));
        }
        Member::SyntaxError(SyntaxError::new(tokens))
    }

    /// `MixinMember` dispatch precedence: Const, Stringifier,
    /// MixinAttribute (a plain `Attribute` — mixins never carry
    /// `inherit`, but the production tolerates its absence the same
    /// way), Operation, else SyntaxError.
    pub fn parse_mixin_member(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        if Const::peek(tokens) {
            return Member::Const(Const::new(tokens));
        }
        if Stringifier::peek(tokens) {
            return Member::Stringifier(Stringifier::new(tokens, dictionary_has_no_required_members, ui));
        }
        if Attribute::peek(tokens) {
            return Member::Attribute(Attribute::new(tokens));
        }
        if Operation::peek(tokens) {
            return Member::Operation(Operation::new(tokens, dictionary_has_no_required_members, ui));
        }
        Member::SyntaxError(SyntaxError::new(tokens))
    }

    /// `NamespaceMember` dispatch precedence: readonly Attribute, else
    /// Operation, else SyntaxError.
    pub fn parse_namespace_member(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        if Attribute::peek_readonly(tokens) {
            return Member::Attribute(Attribute::new(tokens));
        }
        if Operation::peek(tokens) {
            return Member::Operation(Operation::new(tokens, dictionary_has_no_required_members, ui));
        }
        Member::SyntaxError(SyntaxError::new(tokens))
    }

    /// The argument-name-qualified method name (`"set(v)"`), for members
    /// shaped like an operation. `None` for non-operation members.
    pub fn method_name(&self) -> Option<String> {
        match self {
            Member::Constructor(c) => Some(c.method_name()),
            Member::SpecialOperation(s) => Some(s.method_name()),
            Member::Operation(o) => Some(o.method_name()),
            Member::Stringifier(s) => s.method_name(),
            Member::Static(s) => s.method_name(),
            _ => None,
        }
    }

    /// All argument-name-qualified name variants for this member, in the
    /// order `normalized_method_names` needs (canonical form first, then
    /// progressively shorter). Non-operation members yield a single
    /// variant equal to the bare name; `Stringifier`/`StaticMember` don't
    /// expose their wrapped argument list, so they fall back to whatever
    /// single variant `method_name` already computed for them.
    pub fn method_name_variants(&self) -> Vec<String> {
        match self {
            Member::Constructor(c) => {
                let name = "constructor";
                c.arguments
                    .as_ref()
                    .map(|a| a.argument_name_variants())
                    .unwrap_or_else(|| vec![String::new()])
                    .into_iter()
                    .map(|v| format!("{name}({v})"))
                    .collect()
            }
            Member::SpecialOperation(s) => {
                let name = s.name().unwrap_or_default();
                s.rest.argument_name_variants().into_iter().map(|v| format!("{name}({v})")).collect()
            }
            Member::Operation(o) => {
                let name = o.name().unwrap_or_default();
                o.rest.argument_name_variants().into_iter().map(|v| format!("{name}({v})")).collect()
            }
            Member::Stringifier(s) => s.method_name().into_iter().collect(),
            Member::Static(s) => s.method_name().into_iter().collect(),
            _ => self.name().map(|n| vec![n.to_string()]).unwrap_or_default(),
        }
    }

    /// Reverse-order positional argument lookup, matching the "last
    /// declaration wins" rule the same way the symbol table does.
    pub fn find_argument(&self, name: &str) -> Option<&crate::productions::arguments::Argument> {
        let args = match self {
            Member::Constructor(c) => c.arguments.as_ref(),
            Member::SpecialOperation(s) => s.rest.arguments.as_ref(),
            Member::Operation(o) => o.rest.arguments.as_ref(),
            _ => None,
        };
        args?.arguments.iter().rev().find(|a| a.name() == name)
    }
}

impl Production for Member {
    fn trivia(&self) -> &Trivia {
        match self {
            Member::Constructor(m) => m.trivia(),
            Member::Const(m) => m.trivia(),
            Member::Stringifier(m) => m.trivia(),
            Member::Static(m) => m.trivia(),
            Member::AsyncIterable(m) => m.trivia(),
            Member::Iterable(m) => m.trivia(),
            Member::Maplike(m) => m.trivia(),
            Member::Setlike(m) => m.trivia(),
            Member::Attribute(m) => m.trivia(),
            Member::SpecialOperation(m) => m.trivia(),
            Member::Operation(m) => m.trivia(),
            Member::SyntaxError(m) => m.trivia(),
        }
    }

    fn body_text(&self) -> String {
        match self {
            Member::Constructor(m) => m.body_text(),
            Member::Const(m) => m.body_text(),
            Member::Stringifier(m) => m.body_text(),
            Member::Static(m) => m.body_text(),
            Member::AsyncIterable(m) => m.body_text(),
            Member::Iterable(m) => m.body_text(),
            Member::Maplike(m) => m.body_text(),
            Member::Setlike(m) => m.body_text(),
            Member::Attribute(m) => m.body_text(),
            Member::SpecialOperation(m) => m.body_text(),
            Member::Operation(m) => m.body_text(),
            Member::SyntaxError(m) => m.body_text(),
        }
    }
}

impl IdlNode for Member {
    fn idl_type(&self) -> &'static str {
        match self {
            Member::Constructor(m) => m.idl_type(),
            Member::Const(m) => m.idl_type(),
            Member::Stringifier(m) => m.idl_type(),
            Member::Static(m) => m.idl_type(),
            Member::AsyncIterable(m) => m.idl_type(),
            Member::Iterable(m) => m.idl_type(),
            Member::Maplike(m) => m.idl_type(),
            Member::Setlike(m) => m.idl_type(),
            Member::Attribute(m) => m.idl_type(),
            Member::SpecialOperation(m) => m.idl_type(),
            Member::Operation(m) => m.idl_type(),
            Member::SyntaxError(m) => m.idl_type(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Member::Constructor(m) => m.name(),
            Member::Const(m) => m.name(),
            Member::Stringifier(m) => m.name(),
            Member::Static(m) => m.name(),
            Member::AsyncIterable(m) => m.name(),
            Member::Iterable(m) => m.name(),
            Member::Maplike(m) => m.name(),
            Member::Setlike(m) => m.name(),
            Member::Attribute(m) => m.name(),
            Member::SpecialOperation(m) => m.name(),
            Member::Operation(m) => m.name(),
            Member::SyntaxError(m) => m.name(),
        }
    }
}
