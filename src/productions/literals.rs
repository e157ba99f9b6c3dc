//! Literal-valued productions: `ConstValue`, `Default`, and the
//! `EnumValueList` a WebIDL `enum` body is built from.

use crate::production::{Production, Trivia};
use crate::productions::base::Symbol;
use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

const CONST_VALUE_KEYWORDS: &[&str] = &["true", "false", "null", "-Infinity", "Infinity", "NaN"];

/// `true` | `false` | `null` | `-Infinity` | `Infinity` | `NaN` | a float
/// literal | an integer literal.
#[derive(Debug, Clone)]
pub enum ConstValue {
    Keyword(Symbol),
    Number(Symbol),
}

impl ConstValue {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = match tokens.peek() {
            Some(t) => {
                CONST_VALUE_KEYWORDS.contains(&t.text.as_str())
                    || t.kind == TokenKind::Float
                    || t.kind == TokenKind::Integer
            }
            None => false,
        };
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let is_keyword = tokens.peek().is_some_and(|t| CONST_VALUE_KEYWORDS.contains(&t.text.as_str()));
        if is_keyword {
            ConstValue::Keyword(Symbol::new(tokens, None))
        } else {
            ConstValue::Number(Symbol::new(tokens, None))
        }
    }

    pub fn text(&self) -> String {
        match self {
            ConstValue::Keyword(s) | ConstValue::Number(s) => s.text(),
        }
    }
}

/// `"=" value`, where value is a `ConstValue`, a string literal, an
/// empty sequence `[]`, or an empty dictionary `{}`.
#[derive(Debug, Clone)]
pub struct DefaultClause {
    trivia: Trivia,
    equals: Symbol,
    value: DefaultValue,
}

#[derive(Debug, Clone)]
enum DefaultValue {
    Const(ConstValue),
    String(Symbol),
    EmptySequence(Symbol, Symbol),
    EmptyDictionary(Symbol, Symbol),
}

impl DefaultClause {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Symbol::peek(tokens, Some("="));
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let equals = Symbol::new(tokens, Some("="));
        let value = if ConstValue::peek(tokens) {
            DefaultValue::Const(ConstValue::new(tokens))
        } else if tokens.peek().is_some_and(|t| t.kind == TokenKind::String) {
            DefaultValue::String(Symbol::new(tokens, None))
        } else if Symbol::peek(tokens, Some("[")) {
            DefaultValue::EmptySequence(Symbol::new(tokens, Some("[")), Symbol::new(tokens, Some("]")))
        } else {
            DefaultValue::EmptyDictionary(Symbol::new(tokens, Some("{")), Symbol::new(tokens, Some("}")))
        };
        DefaultClause { trivia: Trivia { leading_space, ..Trivia::default() }, equals, value }
    }
}

impl Production for DefaultClause {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let value = match &self.value {
            DefaultValue::Const(c) => c.text(),
            DefaultValue::String(s) => s.text(),
            DefaultValue::EmptySequence(o, c) => format!("{}{}", o.text(), c.text()),
            DefaultValue::EmptyDictionary(o, c) => format!("{}{}", o.text(), c.text()),
        };
        format!("{}{}", self.equals.text(), value)
    }
}

/// One or more string literals separated by commas; a trailing comma
/// before the closing `}` is accepted and reported via `did_ignore`
/// (open question in the design notes: the caller cannot tell a
/// reported-but-ignored trailing comma from no comma at all, so this is
/// preserved as-is rather than normalized).
#[derive(Debug, Clone)]
pub struct EnumValueList {
    trivia: Trivia,
    pub values: Vec<Symbol>,
    pub commas: Vec<Symbol>,
}

impl EnumValueList {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = tokens.peek().is_some_and(|t| t.kind == TokenKind::String);
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer, ui_ignore: &mut dyn FnMut(&mut Tokenizer)) -> Self {
        let leading_space = tokens.whitespace();
        let mut values = vec![Symbol::new(tokens, None)];
        let mut commas = Vec::new();
        while Symbol::peek(tokens, Some(",")) {
            commas.push(Symbol::new(tokens, Some(",")));
            if tokens.peek().is_some_and(|t| t.kind == TokenKind::String) {
                values.push(Symbol::new(tokens, None));
            } else {
                // trailing comma before `}`: accepted, reported, preserved.
                ui_ignore(tokens);
                break;
            }
        }
        EnumValueList { trivia: Trivia { leading_space, ..Default::default() }, values, commas }
    }

    pub fn names(&self) -> Vec<String> {
        self.values.iter().map(|v| v.text()).collect()
    }
}

impl Production for EnumValueList {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        for (i, value) in self.values.iter().enumerate() {
            out.push_str(&value.text());
            if let Some(comma) = self.commas.get(i) {
                out.push_str(&comma.text());
            }
        }
        out
    }
}
