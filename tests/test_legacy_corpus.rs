//! Deprecated WebIDL dialects the tokenizer/productions still accept,
//! each absorbed via `did_ignore` rather than rejected.

use std::cell::RefCell;
use std::rc::Rc;

use widl_parser::{Parser, Position, Ui};

struct Collect(Vec<String>);
impl Ui for Collect {
    fn message(&mut self, text: &str, _position: Option<Position>) {
        self.0.push(text.to_string());
    }
}

fn parse_with_sink(src: &str) -> (Parser, Rc<RefCell<Collect>>) {
    let sink = Rc::new(RefCell::new(Collect(Vec::new())));
    let mut parser = Parser::with_ui(sink.clone());
    parser.parse(src);
    (parser, sink)
}

#[test]
fn test_top_level_const_round_trips() {
    let src = "const long MAX = 10;";
    let mut parser = Parser::new();
    parser.parse(src);
    assert_eq!(parser.to_string(), src);
    assert_eq!(parser.len(), 1);
}

#[test]
fn test_implements_statement_round_trips() {
    let src = "A implements B;";
    let mut parser = Parser::new();
    parser.parse(src);
    assert_eq!(parser.to_string(), src);
}

#[test]
fn test_includes_statement_round_trips() {
    let src = "A includes B;";
    let mut parser = Parser::new();
    parser.parse(src);
    assert_eq!(parser.to_string(), src);
}

#[test]
fn test_legacyiterable_is_accepted_as_legacy_iterable_member() {
    let src = "interface I { legacyiterable<long>; };";
    let mut parser = Parser::new();
    parser.parse(src);
    assert_eq!(parser.to_string(), src);
    let iface = parser.get_type("I").unwrap().as_interface().unwrap();
    assert!(iface.find_member("__iterable__").is_some());
}

#[test]
fn test_stray_in_out_before_argument_type_is_absorbed() {
    let (parser, sink) = parse_with_sink("interface I { void f(optional in long a); };");
    assert!(parser.get_type("I").is_some());
    assert!(sink.borrow().0.iter().any(|m| m.contains("ignored")));
}

#[test]
fn test_inherits_getter_is_absorbed() {
    let (parser, sink) = parse_with_sink("interface I { attribute long n inherits getter; };");
    assert!(parser.get_type("I").is_some());
    assert!(sink.borrow().0.iter().any(|m| m.contains("ignored")));
}

#[test]
fn test_raises_clause_is_absorbed() {
    let (parser, sink) = parse_with_sink("interface I { void f() raises(DOMException); };");
    assert!(parser.get_type("I").is_some());
    assert!(sink.borrow().0.iter().any(|m| m.contains("ignored")));
}

#[test]
fn test_getraises_clause_is_absorbed() {
    let (parser, sink) = parse_with_sink("interface I { attribute long n getraises(DOMException); };");
    assert!(parser.get_type("I").is_some());
    assert!(sink.borrow().0.iter().any(|m| m.contains("ignored")));
}

#[test]
fn test_multi_inheritance_tail_is_absorbed() {
    let (parser, sink) = parse_with_sink("interface I : A, B, C { };");
    let iface = parser.get_type("I").unwrap().as_interface().unwrap();
    assert_eq!(iface.inheritance.as_ref().map(|i| i.parent_name()), Some("A"));
    assert!(sink.borrow().0.iter().any(|m| m.contains("ignored")));
}

#[test]
fn test_legacy_array_suffix_round_trips() {
    let src = "interface I { attribute long[] xs; };";
    let mut parser = Parser::new();
    parser.parse(src);
    assert_eq!(parser.to_string(), src);
}

#[test]
fn test_any_array_union_member_accepted_without_diagnostic() {
    let (parser, sink) = parse_with_sink("interface I { attribute (any[] or DOMString) x; };");
    assert!(parser.get_type("I").is_some());
    assert!(sink.borrow().0.is_empty());
}

#[test]
fn test_named_constructor_extended_attribute_lifts_into_members() {
    let mut parser = Parser::new();
    parser.parse("[NamedConstructor=Image(DOMString src)] interface HTMLImageElement { };");
    let iface = parser.get_type("HTMLImageElement").unwrap().as_interface().unwrap();
    assert!(iface.find_member("constructor").is_some());
}
