//! `Inheritance` and the two legacy tails absorbed alongside it:
//! deprecated multi-inheritance (`: A, B, C`, where only `A` is kept)
//! and the deprecated `inherits getter` / `get raises(...)` / `set
//! raises(...)` forms some pre-standardization IDL dialects carried.

use crate::production::{Production, Trivia};
use crate::productions::base::{Symbol, TypeIdentifier};
use crate::tokenizer::Tokenizer;

/// `": TypeIdentifier"`, with any further `, TypeIdentifier` tail
/// absorbed as `extra` and reported via `did_ignore` rather than kept
/// as semantic parents — WebIDL interfaces have single inheritance, and
/// the multi-parent form only ever appeared in pre-standard drafts.
#[derive(Debug, Clone)]
pub struct Inheritance {
    trivia: Trivia,
    colon: Symbol,
    pub parent: TypeIdentifier,
    extra: Vec<(Symbol, TypeIdentifier)>,
}

impl Inheritance {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        Symbol::peek(tokens, Some(":"))
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let colon = Symbol::new(tokens, Some(":"));
        let parent = TypeIdentifier::new(tokens);
        let mut extra = Vec::new();
        while Symbol::peek(tokens, Some(",")) {
            let comma = Symbol::new(tokens, Some(","));
            let ignored_parent = TypeIdentifier::new(tokens);
            tokens.did_ignore(&format!("additional inherited interface '{}'", ignored_parent.name()));
            extra.push((comma, ignored_parent));
        }
        Inheritance { trivia: Trivia { leading_space, ..Default::default() }, colon, parent, extra }
    }

    pub fn parent_name(&self) -> &str {
        self.parent.name()
    }
}

impl Production for Inheritance {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = format!("{}{}", self.colon.text(), self.parent.text());
        for (comma, parent) in &self.extra {
            out.push_str(&comma.text());
            out.push_str(&parent.text());
        }
        out
    }
}

/// `"inherits" "getter"`, absorbed and reported; never affects the
/// construct tree.
#[derive(Debug, Clone)]
pub struct IgnoreInheritsGetter {
    trivia: Trivia,
    inherits: Symbol,
    getter: Symbol,
}

impl IgnoreInheritsGetter {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = Symbol::peek(tokens, Some("inherits"));
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let inherits = Symbol::new(tokens, Some("inherits"));
        let getter = Symbol::new(tokens, Some("getter"));
        tokens.did_ignore("inherits getter");
        IgnoreInheritsGetter { trivia: Trivia { leading_space, ..Default::default() }, inherits, getter }
    }
}

impl Production for IgnoreInheritsGetter {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        format!("{}{}", self.inherits.text(), self.getter.text())
    }
}

/// `("getraises" | "setraises" | "raises") "(" Identifier ("," Identifier)* ")"`,
/// another deprecated tail absorbed and reported.
#[derive(Debug, Clone)]
pub struct IgnoreRaises {
    trivia: Trivia,
    keyword: Symbol,
    open: Symbol,
    idents: Vec<Symbol>,
    commas: Vec<Symbol>,
    close: Symbol,
}

const RAISES_KEYWORDS: &[&str] = &["getraises", "setraises", "raises"];

impl IgnoreRaises {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        tokens.push_position();
        let ok = tokens.peek().is_some_and(|t| RAISES_KEYWORDS.contains(&t.text.as_str()));
        tokens.pop_position(ok)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        let leading_space = tokens.whitespace();
        let keyword = Symbol::new(tokens, None);
        let open = Symbol::new(tokens, Some("("));
        let mut idents = vec![Symbol::new(tokens, None)];
        let mut commas = Vec::new();
        while Symbol::peek(tokens, Some(",")) {
            commas.push(Symbol::new(tokens, Some(",")));
            idents.push(Symbol::new(tokens, None));
        }
        let close = Symbol::new(tokens, Some(")"));
        tokens.did_ignore(&format!("{}(...)", keyword.raw_text()));
        IgnoreRaises { trivia: Trivia { leading_space, ..Default::default() }, keyword, open, idents, commas, close }
    }
}

impl Production for IgnoreRaises {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = format!("{}{}", self.keyword.text(), self.open.text());
        for (i, ident) in self.idents.iter().enumerate() {
            out.push_str(&ident.text());
            if let Some(comma) = self.commas.get(i) {
                out.push_str(&comma.text());
            }
        }
        out.push_str(&self.close.text());
        out
    }
}

/// The trailing legacy form consumed after an `AttributeRest` or
/// `OperationRest`, before the closing `;`: `inherits getter`, or
/// `getraises`/`setraises`/`raises` followed by a parenthesized
/// identifier list. Neither spelling carries any semantic weight —
/// both are pre-standardization Java-binding leftovers absorbed for
/// round-trip fidelity and reported via `did_ignore`.
#[derive(Debug, Clone)]
pub enum Ignore {
    InheritsGetter(IgnoreInheritsGetter),
    Raises(IgnoreRaises),
}

impl Ignore {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        IgnoreInheritsGetter::peek(tokens) || IgnoreRaises::peek(tokens)
    }

    pub fn new(tokens: &mut Tokenizer) -> Self {
        if IgnoreInheritsGetter::peek(tokens) {
            Ignore::InheritsGetter(IgnoreInheritsGetter::new(tokens))
        } else {
            Ignore::Raises(IgnoreRaises::new(tokens))
        }
    }
}

impl Production for Ignore {
    fn trivia(&self) -> &Trivia {
        match self {
            Ignore::InheritsGetter(i) => i.trivia(),
            Ignore::Raises(i) => i.trivia(),
        }
    }

    fn body_text(&self) -> String {
        match self {
            Ignore::InheritsGetter(i) => i.body_text(),
            Ignore::Raises(i) => i.body_text(),
        }
    }
}

#[cfg(test)]
mod ignore_tests {
    use super::*;
    use crate::ui::NullUi;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tokenizer(text: &str) -> Tokenizer {
        Tokenizer::new(text, Rc::new(RefCell::new(NullUi)))
    }

    #[test]
    fn test_ignore_inherits_getter() {
        let mut t = tokenizer("inherits getter;");
        assert!(Ignore::peek(&mut t));
        let ig = Ignore::new(&mut t);
        assert!(matches!(ig, Ignore::InheritsGetter(_)));
        assert_eq!(ig.text(), "inherits getter");
    }

    #[test]
    fn test_ignore_raises() {
        let mut t = tokenizer("raises(DOMException);");
        assert!(Ignore::peek(&mut t));
        let ig = Ignore::new(&mut t);
        assert!(matches!(ig, Ignore::Raises(_)));
        assert_eq!(ig.text(), "raises(DOMException)");
    }
}
