//! Cross-module scenarios exercising the full parse → query → markup
//! pipeline, as opposed to the single-production unit tests that live
//! next to their modules.

use widl_parser::{NullUi, Parser, Ui};

#[test]
fn test_round_trip_is_exact_for_unmodified_input() {
    let src = "[Exposed=Window]\ninterface Foo {\n  // a comment\n  readonly attribute long x;\n  void bar(optional long y);\n};\n";
    let mut parser = Parser::new();
    parser.parse(src);
    assert_eq!(parser.to_string(), src);
}

#[test]
fn test_idempotent_reparse_of_own_output() {
    let src = "dictionary D {\n  required long n;\n  long? m = null;\n};\n";
    let mut first = Parser::new();
    first.parse(src);
    let rendered = first.to_string();

    let mut second = Parser::new();
    second.parse(&rendered);
    assert_eq!(second.to_string(), rendered);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_enum_with_trailing_comma_round_trips_and_is_ignored() {
    struct Collect(Vec<String>);
    impl Ui for Collect {
        fn message(&mut self, text: &str, _position: Option<widl_parser::Position>) {
            self.0.push(text.to_string());
        }
    }
    let src = "enum E { \"a\", \"b\", };";
    let sink = std::rc::Rc::new(std::cell::RefCell::new(Collect(Vec::new())));
    let mut parser = Parser::with_ui(sink.clone());
    parser.parse(src);

    assert_eq!(parser.to_string(), src);
    let entity = parser.get_type("E").unwrap();
    let values = entity.as_enum().unwrap().values();
    assert_eq!(values, vec!["a", "b"]);
    assert!(sink.borrow().0.iter().any(|m| m.contains("ignored")));
}

#[test]
fn test_typedef_of_parametrized_sequence_resolves() {
    use widl_parser::Production;

    let mut parser = Parser::new();
    parser.parse("typedef sequence<DOMString> StringList;");
    let entity = parser.get_type("StringList").unwrap();
    let typedef = match entity {
        widl_parser::constructs::TopLevel::Typedef(t) => t,
        _ => panic!("expected a typedef"),
    };
    assert_eq!(typedef.type_.text(), "sequence<DOMString>");
}

#[test]
fn test_legacy_constructor_extended_attribute_is_lifted_into_members() {
    let mut parser = Parser::new();
    parser.parse("[Constructor(long x)] interface I { readonly attribute long n; void set(long v); };");
    let iface = parser.get_type("I").unwrap().as_interface().unwrap();

    let names: Vec<&str> = iface.entries().iter().filter_map(|e| e.name()).collect();
    assert_eq!(names, vec!["constructor", "n", "set"]);

    assert!(iface.find_method("set", Some(&["v"])).is_some());
    assert!(iface.find_method("set", Some(&["w"])).is_none());
}

#[test]
fn test_anonymous_getter_gets_synthesized_name() {
    let mut parser = Parser::new();
    parser.parse("interface I { getter long (long index); };");
    let iface = parser.get_type("I").unwrap().as_interface().unwrap();
    let entry = iface.find_member("__getter__").unwrap();
    assert_eq!(entry.method_name().as_deref(), Some("__getter__(index)"));
}

#[test]
fn test_callback_signature_and_required_argument_variants() {
    let mut parser = Parser::new();
    parser.parse("callback C = void (long x, long y);");
    let variants = parser.normalized_method_names("C()", None);
    assert_eq!(variants, vec!["C(x, y)"]);
}

#[test]
fn test_argument_ordering_diagnosed_but_construct_still_produced() {
    struct Collect(Vec<String>);
    impl Ui for Collect {
        fn message(&mut self, text: &str, _position: Option<widl_parser::Position>) {
            self.0.push(text.to_string());
        }
    }
    let sink = std::rc::Rc::new(std::cell::RefCell::new(Collect(Vec::new())));
    let mut parser = Parser::with_ui(sink.clone());
    parser.parse("interface I { void f(optional long a, long b); };");

    assert!(sink.borrow().0.iter().any(|m| m.to_lowercase().contains("required") && m.to_lowercase().contains("optional")));
    let iface = parser.get_type("I").unwrap().as_interface().unwrap();
    assert!(iface.find_method("f", None).is_some());
}

#[test]
fn test_unrecognized_body_member_recovers_as_syntax_error_and_round_trips() {
    let src = "interface X { void a(); garbage; void b(); };";
    let mut parser = Parser::new();
    parser.parse(src);

    let iface = parser.get_type("X").unwrap().as_interface().unwrap();
    let kinds: Vec<&str> = iface.entries().iter().map(|e| e.idl_type()).collect();
    assert_eq!(kinds, vec!["method", "unknown", "method"]);
    assert_eq!(parser.to_string(), src);
}

#[test]
fn test_markup_with_noop_marker_matches_plain_round_trip() {
    struct NoOp;
    impl widl_parser::Marker for NoOp {}

    let src = "interface I { readonly attribute long n; void set(long v); };";
    let mut parser = Parser::new();
    parser.parse(src);
    let mut marker = NoOp;
    assert_eq!(parser.markup(&mut marker), parser.to_string());
}

#[test]
fn test_end_of_input_inside_body_round_trips_without_closing_brace() {
    let src = "interface I { readonly attribute long n;";
    let mut parser = Parser::new();
    parser.parse(src);
    assert_eq!(parser.to_string(), src);
}

#[test]
fn test_shared_symbol_table_sees_dictionary_declared_first() {
    struct Collect(Vec<String>);
    impl Ui for Collect {
        fn message(&mut self, text: &str, _position: Option<widl_parser::Position>) {
            self.0.push(text.to_string());
        }
    }
    let sink = std::rc::Rc::new(std::cell::RefCell::new(Collect(Vec::new())));
    let mut parser = Parser::with_ui(sink.clone());
    parser.parse("dictionary D { long n; }; interface I2 { void g(D d); };");
    assert!(sink.borrow().0.iter().any(|m| m.contains("must be optional")));
}

#[test]
fn test_ui_default_is_null_when_unsupplied() {
    // Parser::new() uses a tracing sink by default; NullUi is available
    // for callers that want to opt out of diagnostics entirely.
    let mut parser = Parser::with_ui(std::rc::Rc::new(std::cell::RefCell::new(NullUi)));
    parser.parse("interface I { void f(optional long a, long b); };");
    assert!(parser.get_type("I").is_some());
}
