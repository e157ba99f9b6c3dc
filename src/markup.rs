//! Decorated serialization: walks the construct tree in the same order
//! [`Parser`](crate::parser::Parser)'s `Display` impl does, but lets a
//! caller-supplied [`Marker`] wrap each construct, member, name, and
//! declared type with head/tail decorations, and routes everything
//! else (keywords, punctuation, braces) through [`Marker::encode`].
//!
//! A marker whose hooks all return `(None, None)` and whose `encode`
//! is the identity reproduces exactly the plain-text round trip —
//! `markup` with such a marker and `to_string()` agree byte for byte.
//!
//! Decoration stops at identifiers and declared types: the pieces a
//! doc-comment renderer or cross-reference linker actually wants to
//! wrap. Finer per-token roles (individual keywords, primitive-type
//! spelling, argument types) are left as encoded plain text.

use std::sync::Once;

use crate::constructs::{DictionaryEntry, IdlNode, Member, SyntaxError, TopLevel};
use crate::production::{Production, Trivia};

/// `(head, tail)` decoration a hook wraps around its text. `None` means
/// no decoration on that side.
pub type Markup = (Option<String>, Option<String>);

/// Caller-supplied visitor over the construct tree. Every hook
/// defaults to "no decoration"; `encode` defaults to the identity.
pub trait Marker {
    fn markup_construct(&mut self, idl_type: &str, text: &str) -> Markup {
        let _ = (idl_type, text);
        (None, None)
    }

    fn markup_type(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markup_primitive_type(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markup_buffer_type(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markup_string_type(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markup_object_type(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markup_type_name(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markup_name(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markup_keyword(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markup_enum_value(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    /// Applied to every run of filler text (punctuation, braces,
    /// keywords, whitespace) that isn't covered by one of the hooks
    /// above. Hooks are responsible for encoding their own leaf text
    /// themselves, if their output format needs it.
    fn encode(&mut self, text: &str) -> String {
        text.to_string()
    }
}

/// Pre-arena-rewrite marker shape, kept for callers ported from the
/// original camelCase API. [`LegacyMarkerAdapter`] bridges one of
/// these to [`Marker`], warning once per hook the first time it's
/// actually invoked.
#[allow(non_snake_case)]
pub trait LegacyMarker {
    fn markupConstruct(&mut self, idl_type: &str, text: &str) -> Markup {
        let _ = (idl_type, text);
        (None, None)
    }

    fn markupType(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markupPrimitiveType(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markupBufferType(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markupStringType(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markupObjectType(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markupTypeName(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markupName(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markupKeyword(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn markupEnumValue(&mut self, text: &str) -> Markup {
        let _ = text;
        (None, None)
    }

    fn encode(&mut self, text: &str) -> String {
        text.to_string()
    }
}

/// Adapts a [`LegacyMarker`] to [`Marker`]. When `warn` is set (the
/// default — matches [`crate::error::ParserOptions::warn_on_legacy_marker_hooks`]),
/// each hook warns exactly once per process the first time it's
/// called, pointing callers at the method to migrate.
pub struct LegacyMarkerAdapter<T> {
    inner: T,
    warn: bool,
}

impl<T: LegacyMarker> LegacyMarkerAdapter<T> {
    pub fn new(inner: T) -> Self {
        LegacyMarkerAdapter { inner, warn: true }
    }

    /// Adapt without ever emitting the deprecation warning.
    pub fn without_warnings(inner: T) -> Self {
        LegacyMarkerAdapter { inner, warn: false }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

macro_rules! legacy_hook {
    ($new:ident, $legacy:ident) => {
        fn $new(&mut self, text: &str) -> Markup {
            if self.warn {
                static WARNED: Once = Once::new();
                WARNED.call_once(|| {
                    tracing::warn!(
                        hook = stringify!($legacy),
                        "legacy marker hook is deprecated; implement `Marker` directly"
                    );
                });
            }
            self.inner.$legacy(text)
        }
    };
}

impl<T: LegacyMarker> Marker for LegacyMarkerAdapter<T> {
    fn markup_construct(&mut self, idl_type: &str, text: &str) -> Markup {
        if self.warn {
            static WARNED: Once = Once::new();
            WARNED.call_once(|| {
                tracing::warn!(hook = "markupConstruct", "legacy marker hook is deprecated; implement `Marker` directly");
            });
        }
        self.inner.markupConstruct(idl_type, text)
    }

    legacy_hook!(markup_type, markupType);
    legacy_hook!(markup_primitive_type, markupPrimitiveType);
    legacy_hook!(markup_buffer_type, markupBufferType);
    legacy_hook!(markup_string_type, markupStringType);
    legacy_hook!(markup_object_type, markupObjectType);
    legacy_hook!(markup_type_name, markupTypeName);
    legacy_hook!(markup_name, markupName);
    legacy_hook!(markup_keyword, markupKeyword);
    legacy_hook!(markup_enum_value, markupEnumValue);

    fn encode(&mut self, text: &str) -> String {
        self.inner.encode(text)
    }
}

fn wrap(decoration: Markup, text: &str) -> String {
    let (head, tail) = decoration;
    format!("{}{}{}", head.unwrap_or_default(), text, tail.unwrap_or_default())
}

fn wrap_trivia(trivia: &Trivia, body: String) -> String {
    format!(
        "{}{}{}{}",
        trivia.leading_space,
        body,
        trivia.tail_and_semicolon_text(),
        trivia.trailing_space.clone().unwrap_or_default()
    )
}

/// Replace each `(original, decorated)` pair's first occurrence at or
/// after the previous replacement's end, routing every byte range in
/// between through `marker.encode`. Replacements must be supplied in
/// left-to-right textual order.
fn splice_with_encode(body: &str, replacements: Vec<(String, String)>, marker: &mut dyn Marker) -> String {
    let mut out = String::new();
    let mut cursor = 0usize;
    for (original, decorated) in replacements {
        if original.is_empty() {
            continue;
        }
        if let Some(pos) = body[cursor..].find(&original) {
            let start = cursor + pos;
            out.push_str(&marker.encode(&body[cursor..start]));
            out.push_str(&decorated);
            cursor = start + original.len();
        }
    }
    out.push_str(&marker.encode(&body[cursor..]));
    out
}

fn leaf_replacements(name: Option<&str>, type_text: Option<String>, marker: &mut dyn Marker) -> Vec<(String, String)> {
    let mut v = Vec::new();
    if let Some(t) = type_text {
        v.push((t.clone(), wrap(marker.markup_type(&t), &t)));
    }
    if let Some(n) = name {
        v.push((n.to_string(), wrap(marker.markup_name(n), n)));
    }
    v
}

fn markup_member(member: &Member, marker: &mut dyn Marker) -> String {
    let raw_body = member.body_text();
    let replacements = match member {
        Member::Attribute(a) => leaf_replacements(a.name(), Some(a.type_.text()), marker),
        Member::Const(c) => leaf_replacements(c.name(), Some(c.const_type.text()), marker),
        _ => leaf_replacements(member.name(), None, marker),
    };
    let decorated_body = splice_with_encode(&raw_body, replacements, marker);
    let (head, tail) = marker.markup_construct(member.idl_type(), &raw_body);
    let wrapped = format!("{}{}{}", head.unwrap_or_default(), decorated_body, tail.unwrap_or_default());
    wrap_trivia(member.trivia(), wrapped)
}

fn markup_dictionary_entry(entry: &DictionaryEntry, marker: &mut dyn Marker) -> String {
    match entry {
        DictionaryEntry::Member(m) => {
            let raw_body = m.body_text();
            let replacements = leaf_replacements(m.name(), Some(m.type_.text()), marker);
            let decorated_body = splice_with_encode(&raw_body, replacements, marker);
            let (head, tail) = marker.markup_construct("dict-member", &raw_body);
            let wrapped = format!("{}{}{}", head.unwrap_or_default(), decorated_body, tail.unwrap_or_default());
            wrap_trivia(m.trivia(), wrapped)
        }
        DictionaryEntry::SyntaxError(s) => markup_syntax_error(s, marker),
    }
}

fn markup_syntax_error(error: &SyntaxError, marker: &mut dyn Marker) -> String {
    let raw_body = error.body_text();
    let decorated_body = marker.encode(&raw_body);
    wrap_trivia(error.trivia(), decorated_body)
}

fn markup_top_level(top: &TopLevel, marker: &mut dyn Marker) -> String {
    let raw_body = top.body_text();
    let type_text = match top {
        TopLevel::Typedef(t) => Some(t.type_.text()),
        TopLevel::Const(c) => Some(c.const_type.text()),
        _ => None,
    };
    let mut replacements = leaf_replacements(top.name(), type_text, marker);
    match top {
        TopLevel::Interface(i) => {
            for m in &i.members {
                replacements.push((m.text(), markup_member(m, marker)));
            }
        }
        TopLevel::Mixin(m0) => {
            for m in &m0.members {
                replacements.push((m.text(), markup_member(m, marker)));
            }
        }
        TopLevel::Namespace(n) => {
            for m in &n.members {
                replacements.push((m.text(), markup_member(m, marker)));
            }
        }
        TopLevel::Dictionary(d) => {
            for m in &d.members {
                replacements.push((m.text(), markup_dictionary_entry(m, marker)));
            }
        }
        TopLevel::Enum(e) => {
            for value in e.values() {
                let quoted = format!("\"{value}\"");
                replacements.push((quoted.clone(), wrap(marker.markup_enum_value(&value), &quoted)));
            }
        }
        TopLevel::Callback(_) | TopLevel::Typedef(_) | TopLevel::Const(_) | TopLevel::Implements(_) | TopLevel::Includes(_) | TopLevel::SyntaxError(_) => {}
    }
    let decorated_body = splice_with_encode(&raw_body, replacements, marker);
    let (head, tail) = marker.markup_construct(top.idl_type(), &raw_body);
    let wrapped = format!("{}{}{}", head.unwrap_or_default(), decorated_body, tail.unwrap_or_default());
    wrap_trivia(top.trivia(), wrapped)
}

/// Decorate every construct in declaration order and concatenate.
/// Called by [`crate::parser::Parser::markup`]; kept as a free
/// function so it only needs a slice, not the whole `Parser`.
pub fn markup(constructs: &[TopLevel], marker: &mut dyn Marker) -> String {
    constructs.iter().map(|c| markup_top_level(c, marker)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::parser::Parser;
    use crate::ui::NullUi;

    struct NoOpMarker;
    impl Marker for NoOpMarker {}

    fn parse(text: &str) -> Parser {
        let mut p = Parser::with_ui(Rc::new(RefCell::new(NullUi)));
        p.parse(text);
        p
    }

    #[test]
    fn test_noop_marker_matches_plain_round_trip() {
        let source = "interface Foo { attribute long bar; void baz(long n); };";
        let parser = parse(source);
        let mut marker = NoOpMarker;
        assert_eq!(parser.markup(&mut marker), source);
        assert_eq!(parser.markup(&mut marker), parser.to_string());
    }

    struct TagNames(Vec<String>);
    impl Marker for TagNames {
        fn markup_name(&mut self, text: &str) -> Markup {
            self.0.push(text.to_string());
            (Some(format!("<<{text}>>")), None)
        }
    }

    #[test]
    fn test_name_hook_wraps_identifiers_and_collects_them() {
        let parser = parse("interface Foo { attribute long bar; };");
        let mut marker = TagNames(Vec::new());
        let out = parser.markup(&mut marker);
        assert!(out.contains("<<Foo>>Foo"));
        assert!(out.contains("<<bar>>bar"));
        assert_eq!(marker.0, vec!["Foo".to_string(), "bar".to_string()]);
    }

    struct UpperEncode;
    impl Marker for UpperEncode {
        fn encode(&mut self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_encode_applies_to_filler_text_only() {
        // No markup_name override, so the identifier is filler too and
        // goes through encode like everything else.
        let parser = parse("interface Foo { };");
        let mut marker = UpperEncode;
        let out = parser.markup(&mut marker);
        assert_eq!(out, "INTERFACE FOO { };");
    }

    struct LegacyCounter {
        calls: Vec<&'static str>,
    }

    impl LegacyMarker for LegacyCounter {
        fn markupName(&mut self, text: &str) -> Markup {
            self.calls.push("markupName");
            (Some("[".to_string()), Some(format!("]{text}")))
        }
    }

    #[test]
    fn test_legacy_marker_adapter_forwards_calls() {
        let parser = parse("interface Foo { };");
        let mut adapter = LegacyMarkerAdapter::new(LegacyCounter { calls: Vec::new() });
        let out = parser.markup(&mut adapter);
        assert!(out.contains("[Foo]Foo"));
        assert_eq!(adapter.into_inner().calls, vec!["markupName"]);
    }

    #[test]
    fn test_dictionary_member_type_and_name_both_decorated() {
        let parser = parse("dictionary D { required long n; };");
        let mut marker = TagNames(Vec::new());
        let out = parser.markup(&mut marker);
        assert!(out.contains("<<D>>D"));
        assert!(out.contains("<<n>>n"));
    }

    #[test]
    fn test_enum_values_decorated() {
        let parser = parse(r#"enum E { "a", "b" };"#);
        struct TagValues(Vec<String>);
        impl Marker for TagValues {
            fn markup_enum_value(&mut self, text: &str) -> Markup {
                self.0.push(text.to_string());
                (Some("*".to_string()), None)
            }
        }
        let mut marker = TagValues(Vec::new());
        let out = parser.markup(&mut marker);
        assert_eq!(marker.0, vec!["a".to_string(), "b".to_string()]);
        assert!(out.contains("*\"a\""));
    }
}
