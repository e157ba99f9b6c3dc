//! The four member-holding top-level constructs: `Interface`, `Mixin`,
//! `Namespace`, `Dictionary`. Each owns an ordered member list and
//! exposes the query surface `Parser::find`/`find_all` build on:
//! ordinal access, name lookup (last declaration wins, same as the
//! symbol table), and method/argument lookup for the operation-shaped
//! members.
//!
//! Legacy `[Constructor(...)]` / `[NamedConstructor=Name(...)]`
//! extended attributes are lifted into the same query surface as the
//! modern `constructor(...)` member form via [`LiftedConstructor`] —
//! they never appear twice in `body_text`, since the lift is read-only
//! bookkeeping over the already-parsed `ExtendedAttributeList`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::constructs::dictionary_member::DictionaryMember;
use crate::constructs::member::Member;
use crate::constructs::syntax_error::SyntaxError;
use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::arguments::{Argument, ArgumentList};
use crate::productions::base::{Identifier, Symbol};
use crate::productions::extended_attributes::{ExtendedAttribute, ExtendedAttributeList};
use crate::productions::inheritance::Inheritance;
use crate::tokenizer::Tokenizer;
use crate::ui::Ui;

/// A `[Constructor(...)]` or `[NamedConstructor=Name(...)]` extended
/// attribute, re-surfaced as a constructor member. Not itself a
/// `Production` — it owns no trivia of its own, only a view over the
/// `ArgumentList` the extended attribute already parsed.
#[derive(Debug, Clone)]
pub struct LiftedConstructor {
    pub arguments: Option<ArgumentList>,
    pub named: Option<String>,
}

impl LiftedConstructor {
    pub fn idl_type(&self) -> &'static str {
        "constructor"
    }

    pub fn name(&self) -> &str {
        "constructor"
    }

    pub fn method_name(&self) -> String {
        format!("constructor({})", self.arguments.as_ref().map(|a| a.first_variant()).unwrap_or_default())
    }

    pub fn method_name_variants(&self) -> Vec<String> {
        self.arguments
            .as_ref()
            .map(|a| a.argument_name_variants())
            .unwrap_or_else(|| vec![String::new()])
            .into_iter()
            .map(|v| format!("constructor({v})"))
            .collect()
    }

    pub fn find_argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.as_ref()?.arguments.iter().rev().find(|a| a.name() == name)
    }
}

fn lift_constructors(extended_attributes: Option<&ExtendedAttributeList>) -> Vec<LiftedConstructor> {
    let Some(list) = extended_attributes else {
        return Vec::new();
    };
    list.attributes
        .iter()
        .filter_map(|a| match a {
            ExtendedAttribute::ArgList { name, arguments, .. } if name.name() == "Constructor" => {
                Some(LiftedConstructor { arguments: Some(arguments.clone()), named: None })
            }
            ExtendedAttribute::NoArgs { name } if name.name() == "Constructor" => {
                Some(LiftedConstructor { arguments: None, named: None })
            }
            ExtendedAttribute::NamedArgList { name, rhs_name, arguments, .. } if name.name() == "NamedConstructor" => {
                Some(LiftedConstructor { arguments: Some(arguments.clone()), named: Some(rhs_name.name().to_string()) })
            }
            _ => None,
        })
        .collect()
}

/// Read-only lookahead: is the `interface` keyword at the cursor
/// actually the start of `interface mixin ...`? Used both to exclude
/// that shape from [`Interface::peek`] and to require it in
/// [`Mixin::peek`]. Always restores the cursor.
fn is_mixin_ahead(tokens: &mut Tokenizer) -> bool {
    tokens.push_position();
    let is_mixin = Symbol::peek(tokens, Some("interface")) && {
        let _ = Symbol::new(tokens, Some("interface"));
        Symbol::peek(tokens, Some("mixin"))
    };
    tokens.pop_position(false);
    is_mixin
}

/// A query-surface entry, either a textual `Member` or a constructor
/// lifted out of a legacy `[Constructor]`/`[NamedConstructor]` extended
/// attribute. Only `Interface` can produce the latter.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    Member(&'a Member),
    Constructor(&'a LiftedConstructor),
}

impl<'a> Entry<'a> {
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Entry::Member(m) => m.name(),
            Entry::Constructor(_) => Some("constructor"),
        }
    }

    pub fn idl_type(&self) -> &'static str {
        match self {
            Entry::Member(m) => m.idl_type(),
            Entry::Constructor(_) => "constructor",
        }
    }

    pub fn method_name(&self) -> Option<String> {
        match self {
            Entry::Member(m) => m.method_name(),
            Entry::Constructor(c) => Some(c.method_name()),
        }
    }

    pub fn method_name_variants(&self) -> Vec<String> {
        match self {
            Entry::Member(m) => m.method_name_variants(),
            Entry::Constructor(c) => c.method_name_variants(),
        }
    }

    pub fn find_argument(&self, name: &str) -> Option<&'a Argument> {
        match self {
            Entry::Member(m) => m.find_argument(name),
            Entry::Constructor(c) => c.find_argument(name),
        }
    }

    /// Positional argument-name matching for `find_method(name, args)`:
    /// every supplied name must match the argument at that position
    /// exactly; any arguments beyond the supplied names must all be
    /// optional or variadic.
    pub fn matches_argument_names(&self, names: Option<&[&str]>) -> bool {
        let Some(names) = names else { return true };
        let args: Vec<&Argument> = match self {
            Entry::Member(Member::Constructor(c)) => c.arguments.as_ref().map(|a| a.arguments.iter().collect()).unwrap_or_default(),
            Entry::Member(Member::SpecialOperation(s)) => s.rest.arguments.as_ref().map(|a| a.arguments.iter().collect()).unwrap_or_default(),
            Entry::Member(Member::Operation(o)) => o.rest.arguments.as_ref().map(|a| a.arguments.iter().collect()).unwrap_or_default(),
            Entry::Constructor(c) => c.arguments.as_ref().map(|a| a.arguments.iter().collect()).unwrap_or_default(),
            _ => return false,
        };
        if names.len() > args.len() {
            return false;
        }
        for (i, name) in names.iter().enumerate() {
            if args[i].name() != *name {
                return false;
            }
        }
        args[names.len()..].iter().all(|a| !a.is_required())
    }
}

/// `[ExtendedAttributeList] ["partial"] "interface" Identifier
/// [Inheritance] "{" InterfaceMember* "}" ";"`.
#[derive(Debug, Clone)]
pub struct Interface {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub partial: Option<Symbol>,
    keyword: Symbol,
    pub identifier: Identifier,
    pub inheritance: Option<Inheritance>,
    open: Symbol,
    pub members: Vec<Member>,
    close: Symbol,
    constructors: Vec<LiftedConstructor>,
}

impl Interface {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let _ = Symbol::peek(tokens, Some("partial"));
        let ok = Symbol::peek(tokens, Some("interface")) && !is_mixin_ahead(tokens);
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
        let partial = if Symbol::peek(tokens, Some("partial")) { Some(Symbol::new(tokens, Some("partial"))) } else { None };
        let keyword = Symbol::new(tokens, Some("interface"));
        let identifier = Identifier::new(tokens);
        let inheritance = if Inheritance::peek(tokens) { Some(Inheritance::new(tokens)) } else { None };
        let open = Symbol::new(tokens, Some("{"));
        let mut members = Vec::new();
        while tokens.has_tokens() && !Symbol::peek(tokens, Some("}")) {
            members.push(Member::parse_interface_member(tokens, dictionary_has_no_required_members, ui));
        }
        let close = Symbol::new(tokens, Some("}"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        let constructors = lift_constructors(extended_attributes.as_ref());
        Interface { trivia, extended_attributes, partial, keyword, identifier, inheritance, open, members, close, constructors }
    }

    pub fn is_partial(&self) -> bool {
        self.partial.is_some()
    }

    /// Lifted constructors, in declaration order, ahead of the declared
    /// members — matching the order a legacy `[Constructor]` interface's
    /// query surface presents them in.
    pub fn entries(&self) -> Vec<Entry<'_>> {
        let mut out: Vec<Entry<'_>> = self.constructors.iter().map(Entry::Constructor).collect();
        out.extend(self.members.iter().map(Entry::Member));
        out
    }

    pub fn len(&self) -> usize {
        self.constructors.len() + self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Legacy `[Constructor]`/`[NamedConstructor]` extended attributes,
    /// re-surfaced as constructor members alongside `constructor(...)`.
    pub fn constructors(&self) -> &[LiftedConstructor] {
        &self.constructors
    }

    /// Last declaration wins, matching the symbol table's overwrite rule.
    pub fn find_member(&self, name: &str) -> Option<Entry<'_>> {
        self.entries().into_iter().rev().find(|e| e.name() == Some(name))
    }

    pub fn find_members(&self, name: &str) -> Vec<Entry<'_>> {
        self.entries().into_iter().filter(|e| e.name() == Some(name)).collect()
    }

    pub fn find_method(&self, name: &str, argument_names: Option<&[&str]>) -> Option<Entry<'_>> {
        self.entries()
            .into_iter()
            .rev()
            .find(|e| e.method_name().is_some() && e.name() == Some(name) && e.matches_argument_names(argument_names))
    }

    pub fn find_methods(&self, name: &str) -> Vec<Entry<'_>> {
        self.entries().into_iter().filter(|e| e.method_name().is_some() && e.name() == Some(name)).collect()
    }

    /// `search_members` broadens the scan to every entry's arguments
    /// (in reverse declaration order) when the named method itself
    /// doesn't carry the argument — useful for inherited-signature
    /// lookups where the caller only has a bare argument name.
    pub fn find_argument(&self, method_name: &str, argument_name: &str, search_members: bool) -> Option<&Argument> {
        let bare = method_name.split('(').next().unwrap_or(method_name);
        if let Some(e) = self.find_method(bare, None) {
            if let Some(a) = e.find_argument(argument_name) {
                return Some(a);
            }
        }
        if search_members {
            for e in self.entries().into_iter().rev() {
                if let Some(a) = e.find_argument(argument_name) {
                    return Some(a);
                }
            }
        }
        None
    }

    pub fn normalized_method_names(&self) -> Vec<String> {
        self.entries().into_iter().flat_map(|e| e.method_name_variants()).collect()
    }

    pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
        &mut self.trivia
    }
}

impl Production for Interface {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        if let Some(p) = &self.partial {
            out.push_str(&p.text());
        }
        out.push_str(&self.keyword.text());
        out.push_str(&self.identifier.text());
        if let Some(i) = &self.inheritance {
            out.push_str(&i.text());
        }
        out.push_str(&self.open.text());
        for m in &self.members {
            out.push_str(&m.text());
        }
        out.push_str(&self.close.text());
        out
    }
}

impl IdlNode for Interface {
    fn idl_type(&self) -> &'static str {
        "interface"
    }

    fn name(&self) -> Option<&str> {
        Some(self.identifier.name())
    }
}

/// `[ExtendedAttributeList] ["partial"] "interface" "mixin" Identifier
/// "{" MixinMember* "}" ";"`.
#[derive(Debug, Clone)]
pub struct Mixin {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub partial: Option<Symbol>,
    interface_keyword: Symbol,
    mixin_keyword: Symbol,
    pub identifier: Identifier,
    open: Symbol,
    pub members: Vec<Member>,
    close: Symbol,
}

impl Mixin {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let _ = Symbol::peek(tokens, Some("partial"));
        let ok = is_mixin_ahead(tokens);
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
        let partial = if Symbol::peek(tokens, Some("partial")) { Some(Symbol::new(tokens, Some("partial"))) } else { None };
        let interface_keyword = Symbol::new(tokens, Some("interface"));
        let mixin_keyword = Symbol::new(tokens, Some("mixin"));
        let identifier = Identifier::new(tokens);
        let open = Symbol::new(tokens, Some("{"));
        let mut members = Vec::new();
        while tokens.has_tokens() && !Symbol::peek(tokens, Some("}")) {
            members.push(Member::parse_mixin_member(tokens, dictionary_has_no_required_members, ui));
        }
        let close = Symbol::new(tokens, Some("}"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        Mixin { trivia, extended_attributes, partial, interface_keyword, mixin_keyword, identifier, open, members, close }
    }

    pub fn is_partial(&self) -> bool {
        self.partial.is_some()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn find_member(&self, name: &str) -> Option<&Member> {
        self.members.iter().rev().find(|m| m.name() == Some(name))
    }

    pub fn find_members<'a>(&'a self, name: &str) -> Vec<&'a Member> {
        self.members.iter().filter(|m| m.name() == Some(name)).collect()
    }

    pub fn find_method(&self, name: &str) -> Option<&Member> {
        self.members.iter().rev().find(|m| m.method_name().is_some() && m.name() == Some(name))
    }

    pub fn find_methods<'a>(&'a self, name: &str) -> Vec<&'a Member> {
        self.members.iter().filter(|m| m.method_name().is_some() && m.name() == Some(name)).collect()
    }

    pub fn find_argument(&self, method_name: &str, argument_name: &str, search_members: bool) -> Option<&Argument> {
        let bare = method_name.split('(').next().unwrap_or(method_name);
        if let Some(m) = self.find_method(bare) {
            if let Some(a) = m.find_argument(argument_name) {
                return Some(a);
            }
        }
        if search_members {
            for m in self.members.iter().rev() {
                if let Some(a) = m.find_argument(argument_name) {
                    return Some(a);
                }
            }
        }
        None
    }

    pub fn normalized_method_names(&self) -> Vec<String> {
        self.members.iter().flat_map(|m| m.method_name_variants()).collect()
    }

    pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
        &mut self.trivia
    }
}

impl Production for Mixin {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        if let Some(p) = &self.partial {
            out.push_str(&p.text());
        }
        out.push_str(&self.interface_keyword.text());
        out.push_str(&self.mixin_keyword.text());
        out.push_str(&self.identifier.text());
        out.push_str(&self.open.text());
        for m in &self.members {
            out.push_str(&m.text());
        }
        out.push_str(&self.close.text());
        out
    }
}

impl IdlNode for Mixin {
    fn idl_type(&self) -> &'static str {
        "mixin"
    }

    fn name(&self) -> Option<&str> {
        Some(self.identifier.name())
    }
}

/// `[ExtendedAttributeList] ["partial"] "namespace" Identifier "{"
/// NamespaceMember* "}" ";"`.
#[derive(Debug, Clone)]
pub struct Namespace {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub partial: Option<Symbol>,
    keyword: Symbol,
    pub identifier: Identifier,
    open: Symbol,
    pub members: Vec<Member>,
    close: Symbol,
}

impl Namespace {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let _ = Symbol::peek(tokens, Some("partial"));
        let ok = Symbol::peek(tokens, Some("namespace"));
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
        let partial = if Symbol::peek(tokens, Some("partial")) { Some(Symbol::new(tokens, Some("partial"))) } else { None };
        let keyword = Symbol::new(tokens, Some("namespace"));
        let identifier = Identifier::new(tokens);
        let open = Symbol::new(tokens, Some("{"));
        let mut members = Vec::new();
        while tokens.has_tokens() && !Symbol::peek(tokens, Some("}")) {
            members.push(Member::parse_namespace_member(tokens, dictionary_has_no_required_members, ui));
        }
        let close = Symbol::new(tokens, Some("}"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        Namespace { trivia, extended_attributes, partial, keyword, identifier, open, members, close }
    }

    pub fn is_partial(&self) -> bool {
        self.partial.is_some()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn find_member(&self, name: &str) -> Option<&Member> {
        self.members.iter().rev().find(|m| m.name() == Some(name))
    }

    pub fn find_members<'a>(&'a self, name: &str) -> Vec<&'a Member> {
        self.members.iter().filter(|m| m.name() == Some(name)).collect()
    }

    pub fn find_method(&self, name: &str) -> Option<&Member> {
        self.members.iter().rev().find(|m| m.method_name().is_some() && m.name() == Some(name))
    }

    pub fn find_methods<'a>(&'a self, name: &str) -> Vec<&'a Member> {
        self.members.iter().filter(|m| m.method_name().is_some() && m.name() == Some(name)).collect()
    }

    pub fn find_argument(&self, method_name: &str, argument_name: &str, search_members: bool) -> Option<&Argument> {
        let bare = method_name.split('(').next().unwrap_or(method_name);
        if let Some(m) = self.find_method(bare) {
            if let Some(a) = m.find_argument(argument_name) {
                return Some(a);
            }
        }
        if search_members {
            for m in self.members.iter().rev() {
                if let Some(a) = m.find_argument(argument_name) {
                    return Some(a);
                }
            }
        }
        None
    }

    pub fn normalized_method_names(&self) -> Vec<String> {
        self.members.iter().flat_map(|m| m.method_name_variants()).collect()
    }

    pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
        &mut self.trivia
    }
}

impl Production for Namespace {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        if let Some(p) = &self.partial {
            out.push_str(&p.text());
        }
        out.push_str(&self.keyword.text());
        out.push_str(&self.identifier.text());
        out.push_str(&self.open.text());
        for m in &self.members {
            out.push_str(&m.text());
        }
        out.push_str(&self.close.text());
        out
    }
}

impl IdlNode for Namespace {
    fn idl_type(&self) -> &'static str {
        "namespace"
    }

    fn name(&self) -> Option<&str> {
        Some(self.identifier.name())
    }
}

/// A `DictionaryMember` or, on unrecognized input, an absorbed
/// [`SyntaxError`] — the same recovery shape `Member` uses, kept
/// separate since dictionaries have no member-precedence dispatch.
#[derive(Debug, Clone)]
pub enum DictionaryEntry {
    Member(DictionaryMember),
    SyntaxError(SyntaxError),
}

impl DictionaryEntry {
    pub fn name(&self) -> Option<&str> {
        match self {
            DictionaryEntry::Member(m) => m.name(),
            DictionaryEntry::SyntaxError(_) => None,
        }
    }
}

impl Production for DictionaryEntry {
    fn trivia(&self) -> &Trivia {
        match self {
            DictionaryEntry::Member(m) => m.trivia(),
            DictionaryEntry::SyntaxError(m) => m.trivia(),
        }
    }

    fn body_text(&self) -> String {
        match self {
            DictionaryEntry::Member(m) => m.body_text(),
            DictionaryEntry::SyntaxError(m) => m.body_text(),
        }
    }
}

/// `[ExtendedAttributeList] ["partial"] "dictionary" Identifier
/// [Inheritance] "{" DictionaryMember* "}" ";"`.
#[derive(Debug, Clone)]
pub struct Dictionary {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub partial: Option<Symbol>,
    keyword: Symbol,
    pub identifier: Identifier,
    pub inheritance: Option<Inheritance>,
    open: Symbol,
    pub members: Vec<DictionaryEntry>,
    close: Symbol,
}

impl Dictionary {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let _ = Symbol::peek(tokens, Some("partial"));
        let ok = Symbol::peek(tokens, Some("dictionary"));
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let partial = if Symbol::peek(tokens, Some("partial")) { Some(Symbol::new(tokens, Some("partial"))) } else { None };
        let keyword = Symbol::new(tokens, Some("dictionary"));
        let identifier = Identifier::new(tokens);
        let inheritance = if Inheritance::peek(tokens) { Some(Inheritance::new(tokens)) } else { None };
        let open = Symbol::new(tokens, Some("{"));
        let mut members = Vec::new();
        while tokens.has_tokens() && !Symbol::peek(tokens, Some("}")) {
            if DictionaryMember::peek(tokens) {
                members.push(DictionaryEntry::Member(DictionaryMember::new(tokens)));
            } else {
                members.push(DictionaryEntry::SyntaxError(SyntaxError::new(tokens)));
            }
        }
        let close = Symbol::new(tokens, Some("}"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        Dictionary { trivia, extended_attributes, partial, keyword, identifier, inheritance, open, members, close }
    }

    pub fn is_partial(&self) -> bool {
        self.partial.is_some()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn find_member(&self, name: &str) -> Option<&DictionaryMember> {
        self.members.iter().rev().find_map(|m| match m {
            DictionaryEntry::Member(dm) if dm.name() == Some(name) => Some(dm),
            _ => None,
        })
    }

    /// Used by `ArgumentList::check_ordering` via the closure the parser
    /// engine wires up: true when this dictionary (own members only,
    /// ignoring any `Inheritance` chain the engine resolves separately)
    /// declares no `required` member.
    pub fn has_no_required_members(&self) -> bool {
        !self.members.iter().any(|m| matches!(m, DictionaryEntry::Member(dm) if dm.is_required()))
    }

    pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
        &mut self.trivia
    }
}

impl Production for Dictionary {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        if let Some(p) = &self.partial {
            out.push_str(&p.text());
        }
        out.push_str(&self.keyword.text());
        out.push_str(&self.identifier.text());
        if let Some(i) = &self.inheritance {
            out.push_str(&i.text());
        }
        out.push_str(&self.open.text());
        for m in &self.members {
            out.push_str(&m.text());
        }
        out.push_str(&self.close.text());
        out
    }
}

impl IdlNode for Dictionary {
    fn idl_type(&self) -> &'static str {
        "dictionary"
    }

    fn name(&self) -> Option<&str> {
        Some(self.identifier.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::NullUi;

    fn tokenizer(text: &str) -> Tokenizer {
        Tokenizer::new(text, Rc::new(RefCell::new(NullUi)))
    }

    fn ui() -> Rc<RefCell<dyn Ui>> {
        Rc::new(RefCell::new(NullUi))
    }

    #[test]
    fn test_interface_with_members_round_trips() {
        let mut t = tokenizer("interface Foo { attribute long x; void bar(); };");
        assert!(Interface::peek(&mut t));
        let iface = Interface::new(&mut t, None, &ui());
        assert_eq!(iface.name(), Some("Foo"));
        assert_eq!(iface.len(), 2);
        assert!(iface.find_member("x").is_some());
        assert!(iface.find_method("bar").is_some());
    }

    #[test]
    fn test_interface_not_confused_with_mixin() {
        let mut t = tokenizer("interface mixin Foo { };");
        assert!(!Interface::peek(&mut t));
        assert!(Mixin::peek(&mut t));
    }

    #[test]
    fn test_mixin_round_trips() {
        let mut t = tokenizer("interface mixin Bar { readonly attribute long y; };");
        let mixin = Mixin::new(&mut t, None, &ui());
        assert_eq!(mixin.name(), Some("Bar"));
        assert_eq!(mixin.len(), 1);
    }

    #[test]
    fn test_namespace_round_trips() {
        let mut t = tokenizer("namespace Console { void log(); };");
        assert!(Namespace::peek(&mut t));
        let ns = Namespace::new(&mut t, None, &ui());
        assert_eq!(ns.name(), Some("Console"));
        assert!(ns.find_method("log").is_some());
    }

    #[test]
    fn test_dictionary_round_trips_and_required_lookup() {
        let mut t = tokenizer("dictionary Options { required DOMString name; long count = 0; };");
        assert!(Dictionary::peek(&mut t));
        let dict = Dictionary::new(&mut t);
        assert_eq!(dict.name(), Some("Options"));
        assert!(!dict.has_no_required_members());
        assert!(dict.find_member("name").unwrap().is_required());
    }

    #[test]
    fn test_legacy_constructor_lifted() {
        let mut t = tokenizer("[Constructor(long x), NamedConstructor=Audio(DOMString src)] interface A { };");
        let iface = Interface::new(&mut t, None, &ui());
        let ctors = iface.constructors();
        assert_eq!(ctors.len(), 2);
        assert_eq!(ctors[0].method_name(), "constructor(x)");
        assert_eq!(ctors[1].named.as_deref(), Some("Audio"));
    }
}
