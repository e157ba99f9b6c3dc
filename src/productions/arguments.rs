//! `Argument` and `ArgumentList`, including the three ArgumentList
//! semantic rules that are enforced during construction rather than by
//! the grammar shape alone.

use std::cell::RefCell;
use std::rc::Rc;

use crate::production::{Production, Trivia};
use crate::productions::base::{Identifier, Symbol};
use crate::productions::extended_attributes::ExtendedAttributeList;
use crate::productions::literals::DefaultClause;
use crate::productions::types::TypeWithExtendedAttributes;
use crate::tokenizer::Tokenizer;
use crate::ui::Ui;

/// `IgnoreInOut`: a stray `in`/`out` between `optional` and the type,
/// left over from pre-standardization WebIDL dialects. Absorbed and
/// reported via `did_ignore`, never semantically meaningful.
#[derive(Debug, Clone)]
pub struct IgnoreInOut {
    trivia: Trivia,
    keyword: Symbol,
}

impl IgnoreInOut {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Symbol::peek(tokens, Some("in")) || Symbol::peek(tokens, Some("out"));
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let keyword = Symbol::new(tokens, None);
        tokens.did_ignore(&keyword.text());
        IgnoreInOut { trivia: Trivia { leading_space, ..Default::default() }, keyword }
    }
}

impl Production for IgnoreInOut {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        self.keyword.text()
    }
}

/// A single formal argument: `[ExtendedAttributeList] ["optional"]
/// [IgnoreInOut] TypeWithExtendedAttributes ["..."] Identifier [Default]`.
#[derive(Debug, Clone)]
pub struct Argument {
    trivia: Trivia,
    pub extended_attributes: Option<ExtendedAttributeList>,
    pub optional: Option<Symbol>,
    ignore_in_out: Option<IgnoreInOut>,
    pub type_: TypeWithExtendedAttributes,
    pub variadic: Option<Symbol>,
    pub identifier: Identifier,
    pub default: Option<DefaultClause>,
}

impl Argument {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let _ = ExtendedAttributeList::peek(tokens);
        Symbol::peek(tokens, Some("optional"));
        let _ = IgnoreInOut::peek(tokens);
        let ok = TypeWithExtendedAttributes::peek(tokens) && Identifier::peek_after_ellipsis(tokens);
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let extended_attributes = if ExtendedAttributeList::peek(tokens) {
            Some(ExtendedAttributeList::new(tokens))
        } else {
            None
        };
        let optional = if Symbol::peek(tokens, Some("optional")) {
            Some(Symbol::new(tokens, Some("optional")))
        } else {
            None
        };
        let ignore_in_out = if IgnoreInOut::peek(tokens) { Some(IgnoreInOut::new(tokens)) } else { None };
        let type_ = TypeWithExtendedAttributes::new(tokens);
        let variadic = if Symbol::peek(tokens, Some("...")) { Some(Symbol::new(tokens, Some("..."))) } else { None };
        let identifier = Identifier::new(tokens);
        let default = if optional.is_some() && DefaultClause::peek(tokens) {
            Some(DefaultClause::new(tokens))
        } else {
            None
        };
        Argument {
            trivia: Trivia { leading_space, ..Default::default() },
            extended_attributes,
            optional,
            ignore_in_out,
            type_,
            variadic,
            identifier,
            default,
        }
    }

    pub fn name(&self) -> &str {
        self.identifier.name()
    }

    pub fn is_required(&self) -> bool {
        self.optional.is_none() && self.variadic.is_none()
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic.is_some()
    }
}

impl Production for Argument {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        if let Some(a) = &self.extended_attributes {
            out.push_str(&a.text());
        }
        if let Some(o) = &self.optional {
            out.push_str(&o.text());
        }
        if let Some(i) = &self.ignore_in_out {
            out.push_str(&i.text());
        }
        out.push_str(&self.type_.text());
        if let Some(v) = &self.variadic {
            out.push_str(&v.text());
        }
        out.push_str(&self.identifier.text());
        if let Some(d) = &self.default {
            out.push_str(&d.text());
        }
        out
    }
}

/// An ordered list of `Argument`s, with the three ordering rules from
/// the grammar contract enforced as each argument is appended: no
/// argument after a variadic one, no required argument after an
/// optional one (reported, not rejected), and a required argument whose
/// type resolves to a dictionary without required members must itself
/// be optional unless a later required argument follows.
#[derive(Debug, Clone)]
pub struct ArgumentList {
    trivia: Trivia,
    pub arguments: Vec<Argument>,
    pub commas: Vec<Symbol>,
}

impl ArgumentList {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Argument::peek(tokens);
        tokens.pop_position(ok)
    }

    /// `dictionary_has_no_required_members` lets the caller plug in a
    /// symbol-table lookup without this module depending on the
    /// construct/engine layer; the parser passes a closure over its own
    /// symbol table once that layer exists.
    pub fn new(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        let leading_space = tokens.whitespace();
        let mut arguments = vec![Argument::new(tokens)];
        let mut commas = Vec::new();
        while Symbol::peek(tokens, Some(",")) {
            commas.push(Symbol::new(tokens, Some(",")));
            arguments.push(Argument::new(tokens));
        }
        Self::check_ordering(&arguments, dictionary_has_no_required_members, ui);
        ArgumentList { trivia: Trivia { leading_space, ..Default::default() }, arguments, commas }
    }

    fn check_ordering(
        arguments: &[Argument],
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) {
        let mut seen_variadic = false;
        let mut seen_optional = false;
        for (i, arg) in arguments.iter().enumerate() {
            if seen_variadic {
                ui.borrow_mut().error(&["argument '", arg.name(), "' follows a variadic argument"], None);
            }
            if arg.is_required() && seen_optional {
                ui.borrow_mut().error(&["required argument '", arg.name(), "' follows an optional argument"], None);
            }
            if arg.is_required() {
                if let Some(check) = dictionary_has_no_required_members {
                    if let Some(name) = arg.type_.type_.symbol_name() {
                        if check(name) {
                            let later_required = arguments[i + 1..].iter().any(|a| a.is_required());
                            if !later_required {
                                ui.borrow_mut().error(&[
                                    "argument '",
                                    arg.name(),
                                    "' must be optional: its dictionary type has no required members",
                                ], None);
                            }
                        }
                    }
                }
            }
            seen_variadic |= arg.is_variadic();
            seen_optional |= arg.optional.is_some();
        }
    }

    /// The canonical argument-name signature, plus every shorter
    /// variant produced by repeatedly dropping a trailing optional
    /// argument. Variadic arguments are prefixed with `...`.
    pub fn argument_name_variants(&self) -> Vec<String> {
        let names: Vec<(String, bool, bool)> = self
            .arguments
            .iter()
            .filter(|a| a.name() != "")
            .map(|a| (a.name().to_string(), a.optional.is_some(), a.is_variadic()))
            .collect();

        let mut variants = Vec::new();
        let mut upto = names.len();
        loop {
            let rendered: Vec<String> = names[..upto]
                .iter()
                .map(|(name, _, variadic)| if *variadic { format!("...{name}") } else { name.clone() })
                .collect();
            variants.push(rendered.join(", "));
            if upto == 0 {
                break;
            }
            if names[upto - 1].1 {
                upto -= 1;
            } else {
                break;
            }
        }
        variants
    }

    pub fn first_variant(&self) -> String {
        self.argument_name_variants().into_iter().next().unwrap_or_default()
    }
}

impl Production for ArgumentList {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = String::new();
        for (i, arg) in self.arguments.iter().enumerate() {
            out.push_str(&arg.text());
            if let Some(comma) = self.commas.get(i) {
                out.push_str(&comma.text());
            }
        }
        out
    }
}

impl Identifier {
    /// `Argument::peek` needs to accept the `"..."` ellipsis before the
    /// name is checked; this wraps that lookahead so `Argument::peek`
    /// reads as a flat conjunction.
    pub fn peek_after_ellipsis(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        Symbol::peek(tokens, Some("..."));
        let ok = Identifier::peek(tokens);
        tokens.pop_position(ok)
    }
}
