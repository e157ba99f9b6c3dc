//! The driver: turns WebIDL source into a flat arena of [`TopLevel`]
//! constructs, keeps a [`SymbolTable`] in step with it as each
//! declaration completes, and answers the query surface every caller
//! actually needs — name resolution, method-name normalization, and
//! whole-document round-trip via [`Production`].
//!
//! `find`/`find_all`'s path-lookup and bare-name fallback behavior
//! keeps scanning earlier constructs even after a name match whose
//! member search failed, rather than stopping at the first name hit —
//! easy to get wrong by inspection alone, so it's called out here.

pub mod symbol_table;

use std::cell::RefCell;
use std::rc::Rc;

use crate::constructs::{
    ConstructId, Dictionary, DictionaryEntry, DictionaryMember, Entry, IdlNode, Interface, Member, Mixin, Namespace, TopLevel,
};
use crate::error::{ParserError, ParserOptions};
use crate::markup::Marker;
use crate::production::Production;
use crate::productions::{Argument, ArgumentList};
use crate::tokenizer::Tokenizer;
use crate::ui::{TracingUi, Ui};

pub use symbol_table::SymbolTable;

/// One hit from [`Parser::find`]/[`Parser::find_all`]. Carries enough
/// of the container it came from that a caller can keep navigating
/// (`method_name`, `idl_type`) without the lookup re-deriving it.
#[derive(Debug, Clone, Copy)]
pub enum Found<'a> {
    Construct(&'a TopLevel),
    InterfaceEntry(&'a Interface, Entry<'a>),
    MixinMember(&'a Mixin, &'a Member),
    NamespaceMember(&'a Namespace, &'a Member),
    DictionaryMember(&'a Dictionary, &'a DictionaryMember),
    Argument(&'a Argument),
}

impl<'a> Found<'a> {
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Found::Construct(c) => c.name(),
            Found::InterfaceEntry(_, e) => e.name(),
            Found::MixinMember(_, m) => m.name(),
            Found::NamespaceMember(_, m) => m.name(),
            Found::DictionaryMember(_, m) => m.name(),
            Found::Argument(a) => Some(a.name()),
        }
    }

    pub fn idl_type(&self) -> &'static str {
        match self {
            Found::Construct(c) => c.idl_type(),
            Found::InterfaceEntry(_, e) => e.idl_type(),
            Found::MixinMember(_, m) => m.idl_type(),
            Found::NamespaceMember(_, m) => m.idl_type(),
            Found::DictionaryMember(_, m) => m.idl_type(),
            Found::Argument(a) => a.idl_type(),
        }
    }

    /// The argument-name-qualified method name, for results that wrap
    /// something operation-shaped. `None` for everything else.
    pub fn method_name(&self) -> Option<String> {
        match self {
            Found::InterfaceEntry(_, e) => e.method_name(),
            Found::MixinMember(_, m) => m.method_name(),
            Found::NamespaceMember(_, m) => m.method_name(),
            _ => None,
        }
    }

    fn as_construct(&self) -> Option<&'a TopLevel> {
        match self {
            Found::Construct(c) => Some(c),
            _ => None,
        }
    }
}

/// Strip `(...)` substrings, repeatedly taking the rightmost
/// `(`-to-last-`)` span and removing it, until none remain. Mirrors
/// the greedy regex `(.*)\(.*\)(.*)` matched in a loop: group 1's
/// greediness means the match always lands on the last `(` in the
/// string paired with the last `)`.
fn strip_argument_parens(name: &str) -> String {
    let mut s = name.to_string();
    loop {
        let Some(open) = s.rfind('(') else { break };
        let Some(close) = s.rfind(')') else { break };
        if close <= open {
            break;
        }
        s = format!("{}{}", &s[..open], &s[close + 1..]);
    }
    s
}

/// `/` takes strict priority over `.`: a name with both is split on
/// `/` only. Returns `None` for a bare name (no separator at all).
fn split_path(name: &str) -> Option<(String, String, Option<String>)> {
    let parts: Vec<&str> = if name.contains('/') {
        name.split('/').collect()
    } else if name.contains('.') {
        name.split('.').collect()
    } else {
        return None;
    };
    let construct_name = parts[0].to_string();
    let member_name = parts.get(1).copied().unwrap_or("").to_string();
    let argument_name = if parts.len() > 2 { Some(parts[2].to_string()) } else { None };
    Some((construct_name, member_name, argument_name))
}

/// Same `prefix(args)suffix` split used by `normalized_method_name`,
/// on the last `(`/last `)` pair in the text.
fn split_name_args(text: &str) -> Option<(String, String, String)> {
    let open = text.rfind('(')?;
    let close = text.rfind(')')?;
    if close <= open {
        return None;
    }
    Some((text[..open].to_string(), text[open + 1..close].to_string(), text[close + 1..].to_string()))
}

/// Split a raw argument-name list like `"a, b"` on commas. Empty text
/// (an explicit `()`) yields zero names rather than one empty-string
/// name — `matches_argument_names` treats an empty-string name as an
/// unnamed position, so `[""]` and `[]` are equivalent, but `[]` is
/// the form that reads sanely everywhere else this is used.
fn split_argument_names(args_text: &str) -> Vec<String> {
    if args_text.trim().is_empty() {
        return Vec::new();
    }
    args_text.split(',').map(|a| a.trim().to_string()).collect()
}

/// A single pass over one construct looking for `member_name`, and
/// (when `argument_name` is supplied) for that argument on a matching
/// member. Collects every hit rather than stopping at the first —
/// `find` takes the first of what this returns, `find_all` keeps them
/// all. Members are walked in reverse within the construct either way,
/// matching "last declaration wins".
fn matches_in_construct<'a>(construct: &'a TopLevel, member_name: &str, argument_name: Option<&str>) -> Vec<Found<'a>> {
    let mut out = Vec::new();
    match construct {
        TopLevel::Interface(iface) => {
            for entry in iface.entries().into_iter().rev() {
                if entry.name() != Some(member_name) {
                    continue;
                }
                match argument_name {
                    Some(arg) => {
                        if let Some(a) = entry.find_argument(arg) {
                            out.push(Found::Argument(a));
                        }
                    }
                    None => out.push(Found::InterfaceEntry(iface, entry)),
                }
            }
        }
        TopLevel::Mixin(mixin) => {
            for member in mixin.members.iter().rev() {
                if member.name() != Some(member_name) {
                    continue;
                }
                match argument_name {
                    Some(arg) => {
                        if let Some(a) = member.find_argument(arg) {
                            out.push(Found::Argument(a));
                        }
                    }
                    None => out.push(Found::MixinMember(mixin, member)),
                }
            }
        }
        TopLevel::Namespace(ns) => {
            for member in ns.members.iter().rev() {
                if member.name() != Some(member_name) {
                    continue;
                }
                match argument_name {
                    Some(arg) => {
                        if let Some(a) = member.find_argument(arg) {
                            out.push(Found::Argument(a));
                        }
                    }
                    None => out.push(Found::NamespaceMember(ns, member)),
                }
            }
        }
        TopLevel::Dictionary(dict) => {
            // Dictionary members never carry arguments of their own.
            if argument_name.is_none() {
                for member in dict.members.iter().rev() {
                    if let DictionaryEntry::Member(dm) = member {
                        if dm.name() == Some(member_name) {
                            out.push(Found::DictionaryMember(dict, dm));
                        }
                    }
                }
            }
        }
        _ => {}
    }
    out
}

/// Bare-name second pass: a direct member-name match, no argument
/// involved.
fn find_member_only<'a>(construct: &'a TopLevel, name: &str) -> Option<Found<'a>> {
    matches_in_construct(construct, name, None).into_iter().next()
}

/// Bare-name third pass: scan every member's own arguments (not
/// filtered by member name) for one called `name`.
fn find_bare_argument<'a>(construct: &'a TopLevel, name: &str) -> Option<Found<'a>> {
    match construct {
        TopLevel::Interface(iface) => iface.entries().into_iter().rev().find_map(|e| e.find_argument(name)).map(Found::Argument),
        TopLevel::Mixin(mixin) => mixin.members.iter().rev().find_map(|m| m.find_argument(name)).map(Found::Argument),
        TopLevel::Namespace(ns) => ns.members.iter().rev().find_map(|m| m.find_argument(name)).map(Found::Argument),
        _ => None,
    }
}

/// Parses WebIDL text into an append-only arena of top-level
/// constructs, with a symbol table kept current as each one finishes.
pub struct Parser {
    constructs: Vec<TopLevel>,
    symbol_table: SymbolTable,
    ui: Rc<RefCell<dyn Ui>>,
    options: ParserOptions,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    /// An empty parser reporting diagnostics via `tracing`.
    pub fn new() -> Self {
        Parser::with_ui(Rc::new(RefCell::new(TracingUi)))
    }

    pub fn with_ui(ui: Rc<RefCell<dyn Ui>>) -> Self {
        Parser { constructs: Vec::new(), symbol_table: SymbolTable::new(), ui, options: ParserOptions::default() }
    }

    /// Adopt an externally supplied symbol table — e.g. one shared
    /// across several `Parser`s parsing fragments of the same corpus.
    /// Ownership remains with the caller conceptually; this `Parser`
    /// only ever inserts into it, never removes.
    pub fn with_symbol_table(mut self, symbol_table: SymbolTable) -> Self {
        self.symbol_table = symbol_table;
        self
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Every supplied symbol-table entry must reference a construct
    /// this parser actually owns. Only meaningful after at least one
    /// `parse` call; a table adopted before parsing starts is empty by
    /// construction and trivially passes.
    pub fn verify_symbol_table(&self) -> Result<(), ParserError> {
        for (name, id) in self.symbol_table.iter() {
            if self.constructs.get(id.index()).is_none() {
                return Err(ParserError::ForeignSymbolTableEntry { name: name.to_string() });
            }
        }
        Ok(())
    }

    /// Parse `text`, appending every top-level construct found to the
    /// existing arena. Calling this more than once accumulates rather
    /// than replaces — a second call's constructs are appended after
    /// the first's, and can reference earlier ones by name.
    ///
    /// There are no fatal errors: unrecognized input becomes a
    /// `SyntaxError` construct, not a parse failure.
    pub fn parse(&mut self, text: &str) {
        let mut tokens = Tokenizer::new(text, self.ui.clone());
        while tokens.has_tokens() {
            let top = {
                let symbol_table = &self.symbol_table;
                let constructs = &self.constructs;
                let check = move |name: &str| {
                    symbol_table
                        .get(name)
                        .and_then(|id| constructs.get(id.index()))
                        .and_then(TopLevel::as_dictionary)
                        .map(Dictionary::has_no_required_members)
                        .unwrap_or(false)
                };
                let check: &dyn Fn(&str) -> bool = &check;
                TopLevel::parse(&mut tokens, Some(check), &self.ui)
            };
            let id = ConstructId::new(self.constructs.len());
            let is_named_entity = matches!(
                top,
                TopLevel::Interface(_)
                    | TopLevel::Mixin(_)
                    | TopLevel::Namespace(_)
                    | TopLevel::Dictionary(_)
                    | TopLevel::Enum(_)
                    | TopLevel::Typedef(_)
                    | TopLevel::Callback(_)
            );
            if is_named_entity {
                if let Some(name) = top.name() {
                    self.symbol_table.insert(name.to_string(), id);
                }
            }
            self.constructs.push(top);
        }
        let trailing = tokens.whitespace();
        if !trailing.is_empty() {
            if let Some(last) = self.constructs.last_mut() {
                last.trivia_mut().trailing_space = Some(trailing);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.constructs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TopLevel> {
        self.constructs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TopLevel> {
        self.constructs.iter()
    }

    /// Declared top-level names in declaration order (re-declarations
    /// keep their original slot, matching the symbol table).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.symbol_table.keys()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbol_table.contains(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&TopLevel> {
        self.symbol_table.get(name).and_then(|id| self.constructs.get(id.index()))
    }

    /// Register an already-parsed construct's name in the symbol
    /// table. `parse` calls this automatically for every named-entity
    /// top-level construct; exposed for callers building a tree by
    /// hand (e.g. merging constructs parsed by a different `Parser`
    /// sharing this one's symbol table).
    pub fn add_type(&mut self, id: ConstructId) {
        if let Some(name) = self.constructs.get(id.index()).and_then(|c| c.name()) {
            self.symbol_table.insert(name.to_string(), id);
        }
    }

    /// Sum over top-level constructs of `len(members)+1` for the four
    /// container kinds, `0` for a (legacy) top-level `const`, `1` for
    /// everything else.
    pub fn complexity_factor(&self) -> usize {
        self.constructs
            .iter()
            .map(|c| match c {
                TopLevel::Interface(i) => i.len() + 1,
                TopLevel::Mixin(m) => m.len() + 1,
                TopLevel::Namespace(n) => n.len() + 1,
                TopLevel::Dictionary(d) => d.len() + 1,
                TopLevel::Const(_) => 0,
                _ => 1,
            })
            .sum()
    }

    /// Resolve `name`, which may be a bare identifier, a `/`- or
    /// `.`-separated path (`construct/member/argument`, the last
    /// segment optional), or carry `(...)` argument-list decoration
    /// anywhere (stripped before matching). Returns the first hit:
    /// reverse declaration order for a path's construct segment and
    /// for the three bare-name passes, reverse member order within
    /// whichever construct matched.
    pub fn find(&self, name: &str) -> Option<Found<'_>> {
        let cleaned = strip_argument_parens(name);
        if let Some((construct_name, member_name, argument_name)) = split_path(&cleaned) {
            for construct in self.constructs.iter().rev() {
                if construct.name() != Some(construct_name.as_str()) {
                    continue;
                }
                if let Some(found) = matches_in_construct(construct, &member_name, argument_name.as_deref()).into_iter().next() {
                    return Some(found);
                }
                // No member (or no matching argument) in this construct;
                // an earlier construct sharing the name might still work.
            }
            return None;
        }

        for construct in self.constructs.iter().rev() {
            if construct.name() == Some(cleaned.as_str()) {
                return Some(Found::Construct(construct));
            }
        }
        for construct in self.constructs.iter().rev() {
            if let Some(found) = find_member_only(construct, &cleaned) {
                return Some(found);
            }
        }
        for construct in self.constructs.iter().rev() {
            if let Some(found) = find_bare_argument(construct, &cleaned) {
                return Some(found);
            }
        }
        None
    }

    /// Like `find`, but forward declaration order and collecting every
    /// hit instead of stopping at the first.
    pub fn find_all(&self, name: &str) -> Vec<Found<'_>> {
        let cleaned = strip_argument_parens(name);
        let mut results = Vec::new();

        if let Some((construct_name, member_name, argument_name)) = split_path(&cleaned) {
            for construct in self.constructs.iter() {
                if construct.name() == Some(construct_name.as_str()) {
                    results.extend(matches_in_construct(construct, &member_name, argument_name.as_deref()));
                }
            }
            return results;
        }

        for construct in self.constructs.iter() {
            if construct.name() == Some(cleaned.as_str()) {
                results.push(Found::Construct(construct));
            }
        }
        for construct in self.constructs.iter() {
            if let Some(found) = find_member_only(construct, &cleaned) {
                results.push(found);
            }
        }
        for construct in self.constructs.iter() {
            if let Some(found) = find_bare_argument(construct, &cleaned) {
                results.push(found);
            }
        }
        results
    }

    /// Normalize a method description like `"set(v)"` or a bare
    /// `"set"` into its canonical argument-name signature. When
    /// `interface_name` is supplied, resolution is scoped to that
    /// interface; otherwise every top-level construct is tried in
    /// declaration order. Falls back to re-synthesizing `Name(args)`
    /// from the input when nothing in the tree matches.
    pub fn normalized_method_name(&self, method_text: &str, interface_name: Option<&str>) -> String {
        let (name, argument_names) = match split_name_args(method_text) {
            Some((prefix, args_text, suffix)) => {
                let mut arg_tokens = Tokenizer::new(&args_text, Rc::new(RefCell::new(crate::ui::NullUi)));
                if ArgumentList::peek(&mut arg_tokens) {
                    let ui: Rc<RefCell<dyn Ui>> = Rc::new(RefCell::new(crate::ui::NullUi));
                    let arguments = ArgumentList::new(&mut arg_tokens, None, &ui);
                    return format!("{}({})", prefix.trim(), arguments.first_variant());
                }
                let name = format!("{}{}", prefix.trim(), suffix);
                let argument_names = split_argument_names(&args_text);
                (name, Some(argument_names))
            }
            None => (method_text.to_string(), None),
        };

        if let Some(interface_name) = interface_name {
            if let Some(iface) = self.find(interface_name).and_then(|f| f.as_construct()).and_then(TopLevel::as_interface) {
                let names_ref: Option<Vec<&str>> = argument_names.as_ref().map(|v| v.iter().map(String::as_str).collect());
                if let Some(entry) = iface.find_method(&name, names_ref.as_deref()) {
                    if let Some(mn) = entry.method_name() {
                        return mn;
                    }
                }
            }
            return format!("{}({})", name, argument_names.unwrap_or_default().join(", "));
        }

        for construct in &self.constructs {
            let method_name = match construct {
                TopLevel::Interface(iface) => {
                    let names_ref: Option<Vec<&str>> = argument_names.as_ref().map(|v| v.iter().map(String::as_str).collect());
                    iface.find_method(&name, names_ref.as_deref()).and_then(|e| e.method_name())
                }
                TopLevel::Mixin(m) => m.find_method(&name).and_then(Member::method_name),
                TopLevel::Namespace(n) => n.find_method(&name).and_then(Member::method_name),
                _ => None,
            };
            if let Some(mn) = method_name {
                return mn;
            }
        }

        if let Some(found) = self.find(&name) {
            if let Some(mn) = found.method_name() {
                return mn;
            }
        }
        format!("{}({})", name, argument_names.unwrap_or_default().join(", "))
    }

    /// All normalized variants (one per dropped-trailing-optional-argument
    /// step), rather than just the canonical one.
    pub fn normalized_method_names(&self, method_text: &str, interface_name: Option<&str>) -> Vec<String> {
        let (name, argument_names) = match split_name_args(method_text) {
            Some((prefix, args_text, suffix)) => {
                let mut arg_tokens = Tokenizer::new(&args_text, Rc::new(RefCell::new(crate::ui::NullUi)));
                if ArgumentList::peek(&mut arg_tokens) {
                    let ui: Rc<RefCell<dyn Ui>> = Rc::new(RefCell::new(crate::ui::NullUi));
                    let arguments = ArgumentList::new(&mut arg_tokens, None, &ui);
                    return arguments.argument_name_variants().into_iter().map(|v| format!("{}({})", prefix.trim(), v)).collect();
                }
                let name = format!("{}{}", prefix.trim(), suffix);
                let argument_names = split_argument_names(&args_text);
                (name, Some(argument_names))
            }
            None => (method_text.to_string(), None),
        };

        if let Some(interface_name) = interface_name {
            if let Some(iface) = self.find(interface_name).and_then(|f| f.as_construct()).and_then(TopLevel::as_interface) {
                let variants: Vec<String> = iface.find_methods(&name).into_iter().flat_map(|e| e.method_name_variants()).collect();
                if !variants.is_empty() {
                    return variants;
                }
            }
            return vec![format!("{}({})", name, argument_names.unwrap_or_default().join(", "))];
        }

        for construct in &self.constructs {
            let variants: Vec<String> = match construct {
                TopLevel::Interface(iface) => iface.find_methods(&name).into_iter().flat_map(|e| e.method_name_variants()).collect(),
                TopLevel::Mixin(m) => m.find_methods(&name).into_iter().flat_map(Member::method_name_variants).collect(),
                TopLevel::Namespace(n) => n.find_methods(&name).into_iter().flat_map(Member::method_name_variants).collect(),
                _ => Vec::new(),
            };
            if !variants.is_empty() {
                return variants;
            }
        }

        vec![format!("{}({})", name, argument_names.unwrap_or_default().join(", "))]
    }

    /// Decorated serialization via `marker`; see [`crate::markup`]. A
    /// marker with every hook at its default produces exactly
    /// `self.to_string()`.
    pub fn markup(&self, marker: &mut dyn Marker) -> String {
        crate::markup::markup(&self.constructs, marker)
    }
}

impl std::fmt::Display for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.constructs {
            write!(f, "{}", c.text())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accumulates_across_calls() {
        let mut parser = Parser::new();
        parser.parse("interface A { };");
        parser.parse("interface B { };");
        assert_eq!(parser.len(), 2);
        assert_eq!(parser.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_round_trip_display() {
        let mut parser = Parser::new();
        let src = "interface A { attribute long x; };\ninterface B { };";
        parser.parse(src);
        assert_eq!(parser.to_string(), src);
    }

    #[test]
    fn test_get_type_resolves_named_entities() {
        let mut parser = Parser::new();
        parser.parse("dictionary D { long n; };");
        let found = parser.get_type("D").unwrap();
        assert_eq!(found.name(), Some("D"));
        assert_eq!(found.idl_type(), "dictionary");
    }

    #[test]
    fn test_reverse_declaration_lookup() {
        let mut parser = Parser::new();
        parser.parse("interface Dup { void a(); }; interface Dup { void b(); };");
        let found = parser.find("Dup").unwrap();
        assert_eq!(found.idl_type(), "interface");
        let iface = found.as_construct().and_then(TopLevel::as_interface).unwrap();
        assert!(iface.find_member("b").is_some());

        let all = parser.find_all("Dup");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_path_lookup_interface_member_argument() {
        let mut parser = Parser::new();
        parser.parse("interface I { void m(long a, long b); };");
        let found = parser.find("I.m.a").unwrap();
        assert_eq!(found.name(), Some("a"));
        assert_eq!(found.idl_type(), "argument");
    }

    #[test]
    fn test_path_lookup_accepts_slash_separator() {
        let mut parser = Parser::new();
        parser.parse("interface I { void m(long a); };");
        assert!(parser.find("I/m/a").is_some());
    }

    #[test]
    fn test_two_segment_path_returns_member() {
        let mut parser = Parser::new();
        parser.parse("interface I { attribute long n; };");
        let found = parser.find("I.n").unwrap();
        assert_eq!(found.idl_type(), "attribute");
    }

    #[test]
    fn test_bare_name_argument_fallback_pass() {
        let mut parser = Parser::new();
        parser.parse("interface I { void m(long target); };");
        let found = parser.find("target").unwrap();
        assert_eq!(found.idl_type(), "argument");
    }

    #[test]
    fn test_complexity_factor() {
        let mut parser = Parser::new();
        parser.parse("interface I { void a(); void b(); }; typedef long T;");
        assert_eq!(parser.complexity_factor(), 3 + 1);
    }

    #[test]
    fn test_normalized_method_name_synthesizes_canonical_form() {
        let mut parser = Parser::new();
        parser.parse("interface I { void foo(optional long a, optional long b); };");
        assert_eq!(parser.normalized_method_name("foo()", Some("I")), "foo(a, b)");
    }

    #[test]
    fn test_normalized_method_names_lists_every_variant() {
        let mut parser = Parser::new();
        parser.parse("interface I { void foo(optional long a, optional long b); };");
        assert_eq!(parser.normalized_method_names("foo()", Some("I")), vec!["foo(a, b)", "foo(a)", "foo()"]);
    }

    #[test]
    fn test_dictionary_argument_ordering_respects_declaration_order() {
        struct Collect(Vec<String>);
        impl Ui for Collect {
            fn message(&mut self, text: &str, _position: Option<crate::token::Position>) {
                self.0.push(text.to_string());
            }
        }

        // D has no required members, so a *required* argument of type D
        // triggers the rule; an *optional* one never does regardless.
        let messages = Rc::new(RefCell::new(Collect(Vec::new())));
        let mut parser = Parser::with_ui(messages.clone());
        parser.parse("interface I { void f(optional D d); }; dictionary D { long n; };");
        assert!(messages.borrow().0.is_empty());

        // D isn't registered yet when g's arguments are checked (it's
        // declared later in this same fragment), so no diagnostic fires.
        let messages2 = Rc::new(RefCell::new(Collect(Vec::new())));
        let mut parser2 = Parser::with_ui(messages2.clone());
        parser2.parse("interface I2 { void g(D d); }; dictionary D { long n; };");
        assert!(messages2.borrow().0.is_empty());

        // Declared first, D is visible when I2's arguments are checked.
        let messages3 = Rc::new(RefCell::new(Collect(Vec::new())));
        let mut parser3 = Parser::with_ui(messages3.clone());
        parser3.parse("dictionary D { long n; }; interface I2 { void g(D d); };");
        assert!(messages3.borrow().0.iter().any(|m| m.contains("must be optional")));
    }
}
