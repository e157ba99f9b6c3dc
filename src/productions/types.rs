//! The `Type` production network: primitive/string/buffer/object types,
//! identifier references, the parametrized generics, unions, and `any`
//! — each carrying its own nullable/legacy-array-suffix state per the
//! grammar contract in `Type = SingleType | UnionType [TypeSuffix]`.

use crate::production::{Production, Trivia};
use crate::productions::base::{Identifier, Symbol};
use crate::productions::extended_attributes::ExtendedAttributeList;
use crate::tokenizer::Tokenizer;

const PRIMITIVE_KEYWORDS: &[&str] = &["boolean", "byte", "octet", "unsigned", "short", "long", "float", "double", "unrestricted"];
const STRING_KEYWORDS: &[&str] = &["ByteString", "DOMString", "USVString"];
const BUFFER_KEYWORDS: &[&str] = &[
    "ArrayBuffer", "DataView", "Int8Array", "Int16Array", "Int32Array", "Uint8Array",
    "Uint16Array", "Uint32Array", "Uint8ClampedArray", "Float32Array", "Float64Array",
];
const OBJECT_KEYWORDS: &[&str] = &["object", "Error"];

/// Tag + payload for the body of a `Type`, independent of the
/// nullable/array-suffix wrapper `Type` itself carries.
#[derive(Debug, Clone)]
pub enum TypeBody {
    Primitive(Vec<Symbol>),
    StringType(Symbol),
    BufferType(Symbol),
    ObjectType(Symbol),
    Identifier(Identifier),
    Sequence { keyword: Symbol, open: Symbol, element: Box<Type>, close: Symbol },
    FrozenArray { keyword: Symbol, open: Symbol, element: Box<Type>, close: Symbol },
    Promise { keyword: Symbol, open: Symbol, element: Box<Type>, close: Symbol },
    Record { keyword: Symbol, open: Symbol, key: Box<Type>, comma: Symbol, value: Box<Type>, close: Symbol },
    Union { open: Symbol, members: Vec<Type>, ors: Vec<Symbol>, close: Symbol },
    Any(Symbol),
}

impl TypeBody {
    fn text(&self) -> String {
        match self {
            TypeBody::Primitive(parts) => parts.iter().map(|p| p.text()).collect::<Vec<_>>().join(""),
            TypeBody::StringType(s) | TypeBody::BufferType(s) | TypeBody::ObjectType(s) | TypeBody::Any(s) => s.text().to_string(),
            TypeBody::Identifier(i) => i.text(),
            TypeBody::Sequence { keyword, open, element, close }
            | TypeBody::FrozenArray { keyword, open, element, close }
            | TypeBody::Promise { keyword, open, element, close } => {
                format!("{}{}{}{}", keyword.text(), open.text(), element.text(), close.text())
            }
            TypeBody::Record { keyword, open, key, comma, value, close } => {
                format!("{}{}{}{}{}{}", keyword.text(), open.text(), key.text(), comma.text(), value.text(), close.text())
            }
            TypeBody::Union { open, members, ors, close } => {
                let mut out = open.text().to_string();
                for (i, member) in members.iter().enumerate() {
                    out.push_str(&member.text());
                    if let Some(or) = ors.get(i) {
                        out.push_str(&or.text());
                    }
                }
                out.push_str(&close.text());
                out
            }
        }
    }

    /// `name` as used for identifier-shaped simple-type references
    /// (symbol-table lookups go through here).
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            TypeBody::Identifier(i) => Some(i.name()),
            _ => None,
        }
    }
}

/// A full WebIDL type: body, optional nullable marker, optional legacy
/// `[]` suffix (retained, never normalized away).
#[derive(Debug, Clone)]
pub struct Type {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub body: TypeBody,
    pub nullable: Option<Symbol>,
    pub legacy_array_suffix: Option<(Symbol, Symbol)>,
}

impl Type {
    pub fn is_nullable(&self) -> bool {
        self.nullable.is_some()
    }

    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Self::peek_body(tokens);
        tokens.pop_position(ok)
    }

    fn peek_body(tokens: &mut Tokenizer) -> bool {
        if let Some(t) = tokens.peek() {
            let text = t.text.clone();
            if text == "(" {
                return true; // union type
            }
            if text == "any" || Self::peeks_non_any(tokens, &text) {
                return true;
            }
        }
        false
    }

    fn peeks_non_any(_tokens: &Tokenizer, text: &str) -> bool {
        PRIMITIVE_KEYWORDS.contains(&text.as_ref())
            || STRING_KEYWORDS.contains(&text.as_ref())
            || BUFFER_KEYWORDS.contains(&text.as_ref())
            || OBJECT_KEYWORDS.contains(&text.as_ref())
            || text == "sequence"
            || text == "FrozenArray"
            || text == "Promise"
            || text == "record"
            || text.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_')
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let peeked_text = tokens.peek().map(|t| t.text.clone()).unwrap_or_default();

        let body = if peeked_text == "(" {
            Self::parse_union(tokens)
        } else if peeked_text == "any" {
            TypeBody::Any(Symbol::new(tokens, Some("any")))
        } else if PRIMITIVE_KEYWORDS.contains(&peeked_text.as_str()) {
            TypeBody::Primitive(Self::parse_primitive_parts(tokens))
        } else if STRING_KEYWORDS.contains(&peeked_text.as_str()) {
            TypeBody::StringType(Symbol::new(tokens, None))
        } else if BUFFER_KEYWORDS.contains(&peeked_text.as_str()) {
            TypeBody::BufferType(Symbol::new(tokens, None))
        } else if OBJECT_KEYWORDS.contains(&peeked_text.as_str()) {
            TypeBody::ObjectType(Symbol::new(tokens, None))
        } else if peeked_text == "sequence" {
            let keyword = Symbol::new(tokens, Some("sequence"));
            let open = Symbol::new(tokens, Some("<"));
            let element = Box::new(Type::new(tokens));
            let close = Symbol::new(tokens, Some(">"));
            TypeBody::Sequence { keyword, open, element, close }
        } else if peeked_text == "FrozenArray" {
            let keyword = Symbol::new(tokens, Some("FrozenArray"));
            let open = Symbol::new(tokens, Some("<"));
            let element = Box::new(Type::new(tokens));
            let close = Symbol::new(tokens, Some(">"));
            TypeBody::FrozenArray { keyword, open, element, close }
        } else if peeked_text == "Promise" {
            let keyword = Symbol::new(tokens, Some("Promise"));
            let open = Symbol::new(tokens, Some("<"));
            let element = Box::new(Type::new(tokens));
            let close = Symbol::new(tokens, Some(">"));
            TypeBody::Promise { keyword, open, element, close }
        } else if peeked_text == "record" {
            let keyword = Symbol::new(tokens, Some("record"));
            let open = Symbol::new(tokens, Some("<"));
            let key = Box::new(Type::new(tokens));
            let comma = Symbol::new(tokens, Some(","));
            let value = Box::new(Type::new(tokens));
            let close = Symbol::new(tokens, Some(">"));
            TypeBody::Record { keyword, open, key, comma, value, close }
        } else {
            TypeBody::Identifier(Identifier::new(tokens))
        };

        let nullable = if Symbol::peek(tokens, Some("?")) { Some(Symbol::new(tokens, Some("?"))) } else { None };
        let legacy_array_suffix = Self::parse_legacy_array_suffix(tokens);

        Type { trivia: Trivia { leading_space, ..Default::default() }, extended_attributes: None, body, nullable, legacy_array_suffix }
    }

    fn parse_legacy_array_suffix(tokens: &mut Tokenizer) -> Option<(Symbol, Symbol)> {
        tokens.push_position();
        if Symbol::peek(tokens, Some("[")) {
            let open = Symbol::new(tokens, Some("["));
            if Symbol::peek(tokens, Some("]")) {
                let close = Symbol::new(tokens, Some("]"));
                tokens.pop_position(true);
                return Some((open, close));
            }
        }
        tokens.pop_position(false);
        None
    }

    fn parse_primitive_parts(tokens: &mut Tokenizer) -> Vec<Symbol> {
        let mut parts = Vec::new();
        loop {
            let text = match tokens.peek() {
                Some(t) => t.text.clone(),
                None => break,
            };
            if PRIMITIVE_KEYWORDS.contains(&text.as_str()) {
                parts.push(Symbol::new(tokens, None));
            } else {
                break;
            }
        }
        parts
    }

    fn parse_union(tokens: &mut Tokenizer) -> TypeBody {
        let open = Symbol::new(tokens, Some("("));
        let mut members = vec![Type::new(tokens)];
        let mut ors = Vec::new();
        while Symbol::peek(tokens, Some("or")) {
            ors.push(Symbol::new(tokens, Some("or")));
            members.push(Type::new(tokens));
        }
        let close = Symbol::new(tokens, Some(")"));
        TypeBody::Union { open, members, ors, close }
    }

    pub fn symbol_name(&self) -> Option<&str> {
        self.body.simple_name()
    }
}

impl Production for Type {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(attrs) = &self.extended_attributes {
            out.push_str(&attrs.text());
        }
        out.push_str(&self.body.text());
        if let Some(q) = &self.nullable {
            out.push_str(&q.text());
        }
        if let Some((open, close)) = &self.legacy_array_suffix {
            out.push_str(&open.text());
            out.push_str(&close.text());
        }
        out
    }
}

/// `[ExtendedAttributeList] Type`, used for argument and dictionary-member
/// types where per-type extended attributes are legal.
#[derive(Debug, Clone)]
pub struct TypeWithExtendedAttributes {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub type_: Type,
}

impl TypeWithExtendedAttributes {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        let ok = Type::peek(tokens);
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let type_ = Type::new(tokens);
        TypeWithExtendedAttributes { trivia: Trivia { leading_space, ..Default::default() }, extended_attributes, type_ }
    }
}

impl Production for TypeWithExtendedAttributes {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(attrs) = &self.extended_attributes {
            out.push_str(&attrs.text());
        }
        out.push_str(&self.type_.text());
        out
    }
}

/// `ReturnType` is a `Type` that additionally accepts the bare keyword
/// `void`.
#[derive(Debug, Clone)]
pub struct ReturnType {
    trivia: Trivia,
    pub void: Option<Symbol>,
    pub type_: Option<Type>,
}

impl ReturnType {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Symbol::peek(tokens, Some("void")) || Type::peek(tokens);
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        if Symbol::peek(tokens, Some("void")) {
            ReturnType { trivia: Trivia { leading_space, ..Default::default() }, void: Some(Symbol::new(tokens, Some("void"))), type_: None }
        } else {
            ReturnType { trivia: Trivia { leading_space, ..Default::default() }, void: None, type_: Some(Type::new(tokens)) }
        }
    }
}

impl Production for ReturnType {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        if let Some(v) = &self.void {
            v.text().to_string()
        } else {
            self.type_.as_ref().map(|t| t.body_text()).unwrap_or_default()
        }
    }
}
