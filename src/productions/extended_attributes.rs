//! `ExtendedAttributeList` and the six `ExtendedAttribute` shapes, tried
//! in the most-specific-first order the grammar requires: `NamedArgList`
//! before plain `ArgList`, `TypePair` before a bare `IdentList`, and so
//! on down to `Unknown`, which absorbs whatever is left up to the next
//! `,` or `]` and is reported, never rejected.

use crate::production::{Production, Trivia};
use crate::productions::arguments::ArgumentList;
use crate::productions::base::{Identifier, Symbol};
use crate::tokenizer::Tokenizer;
use crate::ui::Ui;
use std::cell::RefCell;
use std::rc::Rc;

/// `"[" ExtendedAttribute ("," ExtendedAttribute)* "]"`
#[derive(Debug, Clone)]
pub struct ExtendedAttributeList {
    trivia: Trivia,
    open: Symbol,
    pub attributes: Vec<ExtendedAttribute>,
    commas: Vec<Symbol>,
    close: Symbol,
}

impl ExtendedAttributeList {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        Symbol::peek(tokens, Some("["))
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let open = Symbol::new(tokens, Some("["));
        let mut attributes = vec![ExtendedAttribute::new(tokens)];
        let mut commas = Vec::new();
        while Symbol::peek(tokens, Some(",")) {
            commas.push(Symbol::new(tokens, Some(",")));
            attributes.push(ExtendedAttribute::new(tokens));
        }
        let close = Symbol::new(tokens, Some("]"));
        ExtendedAttributeList { trivia: Trivia { leading_space, ..Default::default() }, open, attributes, commas, close }
    }

    pub fn has(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&ExtendedAttribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }
}

impl Production for ExtendedAttributeList {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = self.open.text();
        for (i, attr) in self.attributes.iter().enumerate() {
            out.push_str(&attr.text());
            if let Some(comma) = self.commas.get(i) {
                out.push_str(&comma.text());
            }
        }
        out.push_str(&self.close.text());
        out
    }
}

/// The six recognized shapes an `ExtendedAttribute` can take, plus
/// `Unknown` for anything that doesn't parse as one of them. Dispatch
/// order matches the grammar's own disambiguation: `NamedArgList` is
/// tried before plain `ArgList` (both start with an identifier followed
/// by `(`, disambiguated by whether a second identifier and `=` precede
/// the parenthesized list), `TypePair` before `IdentList` (both can
/// start `(Foo, Bar)`-shaped, disambiguated by whether the members look
/// like types or plain identifiers).
#[derive(Debug, Clone)]
pub enum ExtendedAttribute {
    /// `Identifier "=" Identifier "(" ArgumentList ")"`, e.g.
    /// `[NamedConstructor=Audio(DOMString src)]`.
    NamedArgList { name: Identifier, equals: Symbol, rhs_name: Identifier, open: Symbol, arguments: ArgumentList, close: Symbol },
    /// `Identifier "(" ArgumentList ")"`, e.g. `[Constructor(long x)]`.
    ArgList { name: Identifier, open: Symbol, arguments: ArgumentList, close: Symbol },
    /// `Identifier "=" Identifier`, e.g. `[PutForwards=value]`.
    Ident { name: Identifier, equals: Symbol, rhs: Identifier },
    /// `Identifier "=" "(" Identifier ("," Identifier)* ")"`, e.g.
    /// `[Exposed=(Window,Worker)]`.
    IdentList { name: Identifier, equals: Symbol, open: Symbol, idents: Vec<Identifier>, commas: Vec<Symbol>, close: Symbol },
    /// `Identifier "(" Identifier "," Identifier ")"`, the two-type-name
    /// shape used by `[LegacyTreatAsPartial]`-style pairs.
    TypePair { name: Identifier, open: Symbol, lhs: Identifier, comma: Symbol, rhs: Identifier, close: Symbol },
    /// A bare `Identifier`, e.g. `[Unforgeable]`.
    NoArgs { name: Identifier },
    /// Anything that doesn't fit one of the above: the raw token run up
    /// to the next `,` or `]`, preserved verbatim and reported.
    Unknown { tokens: Vec<crate::token::Token>, name: String },
}

impl ExtendedAttribute {
    pub fn name(&self) -> &str {
        match self {
            ExtendedAttribute::NamedArgList { name, .. }
            | ExtendedAttribute::ArgList { name, .. }
            | ExtendedAttribute::Ident { name, .. }
            | ExtendedAttribute::IdentList { name, .. }
            | ExtendedAttribute::TypePair { name, .. }
            | ExtendedAttribute::NoArgs { name } => name.name(),
            ExtendedAttribute::Unknown { name, .. } => name,
        }
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let ui: Rc<RefCell<dyn Ui>> = Rc::new(RefCell::new(crate::ui::NullUi));
        if Self::peek_named_arg_list(tokens) {
            let name = Identifier::new(tokens);
            let equals = Symbol::new(tokens, Some("="));
            let rhs_name = Identifier::new(tokens);
            let open = Symbol::new(tokens, Some("("));
            let arguments = ArgumentList::new(tokens, None, &ui);
            let close = Symbol::new(tokens, Some(")"));
            return ExtendedAttribute::NamedArgList { name, equals, rhs_name, open, arguments, close };
        }
        if Self::peek_arg_list(tokens) {
            let name = Identifier::new(tokens);
            let open = Symbol::new(tokens, Some("("));
            let arguments = ArgumentList::new(tokens, None, &ui);
            let close = Symbol::new(tokens, Some(")"));
            return ExtendedAttribute::ArgList { name, open, arguments, close };
        }
        if Self::peek_type_pair(tokens) {
            let name = Identifier::new(tokens);
            let open = Symbol::new(tokens, Some("("));
            let lhs = Identifier::new(tokens);
            let comma = Symbol::new(tokens, Some(","));
            let rhs = Identifier::new(tokens);
            let close = Symbol::new(tokens, Some(")"));
            return ExtendedAttribute::TypePair { name, open, lhs, comma, rhs, close };
        }
        if Self::peek_ident_list(tokens) {
            let name = Identifier::new(tokens);
            let equals = Symbol::new(tokens, Some("="));
            let open = Symbol::new(tokens, Some("("));
            let mut idents = vec![Identifier::new(tokens)];
            let mut commas = Vec::new();
            while Symbol::peek(tokens, Some(",")) {
                commas.push(Symbol::new(tokens, Some(",")));
                idents.push(Identifier::new(tokens));
            }
            let close = Symbol::new(tokens, Some(")"));
            return ExtendedAttribute::IdentList { name, equals, open, idents, commas, close };
        }
        if Self::peek_ident(tokens) {
            let name = Identifier::new(tokens);
            let equals = Symbol::new(tokens, Some("="));
            let rhs = Identifier::new(tokens);
            return ExtendedAttribute::Ident { name, equals, rhs };
        }
        if Identifier::peek(tokens) {
            tokens.push_position();
            let name = Identifier::new(tokens);
            let followed_by_terminator = tokens.peek_is_symbol(",") || tokens.peek_is_symbol("]");
            tokens.pop_position(followed_by_terminator);
            if followed_by_terminator {
                return ExtendedAttribute::NoArgs { name };
            }
        }
        let name = tokens.peek().map(|t| t.text.clone()).unwrap_or_default();
        let collected = tokens.syntax_error(&[",", "]"], false);
        ExtendedAttribute::Unknown { tokens: collected, name }
    }

    fn peek_named_arg_list(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Identifier::peek(tokens) && {
            let _ = Identifier::new(tokens);
            Symbol::peek(tokens, Some("=")) && {
                let _ = Symbol::new(tokens, Some("="));
                Identifier::peek(tokens) && {
                    let _ = Identifier::new(tokens);
                    Symbol::peek(tokens, Some("("))
                }
            }
        };
        tokens.pop_position(ok)
    }

    fn peek_arg_list(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Identifier::peek(tokens) && {
            let _ = Identifier::new(tokens);
            Symbol::peek(tokens, Some("("))
        };
        tokens.pop_position(ok)
    }

    fn peek_type_pair(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Identifier::peek(tokens) && {
            let _ = Identifier::new(tokens);
            Symbol::peek(tokens, Some("(")) && {
                let _ = Symbol::new(tokens, Some("("));
                Identifier::peek(tokens) && {
                    let _ = Identifier::new(tokens);
                    Symbol::peek(tokens, Some(","))
                }
            }
        };
        tokens.pop_position(ok)
    }

    fn peek_ident_list(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Identifier::peek(tokens) && {
            let _ = Identifier::new(tokens);
            Symbol::peek(tokens, Some("=")) && {
                let _ = Symbol::new(tokens, Some("="));
                Symbol::peek(tokens, Some("("))
            }
        };
        tokens.pop_position(ok)
    }

    fn peek_ident(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Identifier::peek(tokens) && {
            let _ = Identifier::new(tokens);
            Symbol::peek(tokens, Some("="))
        };
        tokens.pop_position(ok)
    }
}

impl Production for ExtendedAttribute {
    fn trivia(&self) -> &Trivia {
        // Extended attributes never carry their own leading trivia; the
        // enclosing `ExtendedAttributeList` captures it between
        // separators instead. Intentionally distinct from the other
        // productions' per-node trivia.
        const EMPTY: Trivia =
            Trivia { leading_space: String::new(), trailing_space: None, tail: Vec::new(), semicolon: None };
        &EMPTY
    }

    fn body_text(&self) -> String {
        match self {
            ExtendedAttribute::NamedArgList { name, equals, rhs_name, open, arguments, close } => {
                format!("{}{}{}{}{}{}", name.text(), equals.text(), rhs_name.text(), open.text(), arguments.text(), close.text())
            }
            ExtendedAttribute::ArgList { name, open, arguments, close } => {
                format!("{}{}{}{}", name.text(), open.text(), arguments.text(), close.text())
            }
            ExtendedAttribute::Ident { name, equals, rhs } => {
                format!("{}{}{}", name.text(), equals.text(), rhs.text())
            }
            ExtendedAttribute::IdentList { name, equals, open, idents, commas, close } => {
                let mut out = format!("{}{}{}", name.text(), equals.text(), open.text());
                for (i, ident) in idents.iter().enumerate() {
                    out.push_str(&ident.text());
                    if let Some(comma) = commas.get(i) {
                        out.push_str(&comma.text());
                    }
                }
                out.push_str(&close.text());
                out
            }
            ExtendedAttribute::TypePair { name, open, lhs, comma, rhs, close } => {
                format!("{}{}{}{}{}{}", name.text(), open.text(), lhs.text(), comma.text(), rhs.text(), close.text())
            }
            ExtendedAttribute::NoArgs { name } => name.text(),
            ExtendedAttribute::Unknown { tokens, .. } => tokens.iter().map(|t| t.text.as_str()).collect(),
        }
    }
}
