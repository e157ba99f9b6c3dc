//! `Callback`: either a named function signature (`callback Identifier =
//! ReturnType "(" ArgumentList? ")" ";"`) or an embedded interface
//! definition (`callback Interface`, the `callback interface Foo { ...
//! };` form used for legacy callback interfaces like `NodeFilter`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::constructs::container::Interface;
use crate::constructs::IdlNode;
use crate::production::{Production, Trivia};
use crate::productions::arguments::ArgumentList;
use crate::productions::base::{Identifier, Symbol};
use crate::productions::types::ReturnType;
use crate::tokenizer::Tokenizer;
use crate::ui::Ui;

#[derive(Debug, Clone)]
enum CallbackBody {
    Signature { equals: Symbol, return_type: ReturnType, open: Symbol, arguments: Option<ArgumentList>, close: Symbol },
    Interface(Box<Interface>),
}

#[derive(Debug, Clone)]
pub struct Callback {
    trivia: Trivia,
    keyword: Symbol,
    pub identifier: Option<Identifier>,
    body: CallbackBody,
}

impl Callback {
    pub fn peek(tokens: &mut Tokenizer) -> bool {
        Symbol::peek(tokens, Some("callback"))
    }

    pub fn new(
        tokens: &mut Tokenizer,
        dictionary_has_no_required_members: Option<&dyn Fn(&str) -> bool>,
        ui: &Rc<RefCell<dyn Ui>>,
    ) -> Self {
        let leading_space = tokens.whitespace();
        let keyword = Symbol::new(tokens, Some("callback"));
        if Symbol::peek(tokens, Some("interface")) {
            let iface = Interface::new(tokens, dictionary_has_no_required_members, ui);
            return Callback {
                trivia: Trivia { leading_space, ..Default::default() },
                keyword,
                identifier: None,
                body: CallbackBody::Interface(Box::new(iface)),
            };
        }
        let identifier = Identifier::new(tokens);
        let equals = Symbol::new(tokens, Some("="));
        let return_type = ReturnType::new(tokens);
        let open = Symbol::new(tokens, Some("("));
        let arguments = if ArgumentList::peek(tokens) { Some(ArgumentList::new(tokens, None, ui)) } else { None };
        let close = Symbol::new(tokens, Some(")"));
        let mut trivia = Trivia { leading_space, ..Default::default() };
        if Symbol::peek(tokens, Some(";")) {
            trivia.semicolon = Some(Symbol::new(tokens, Some(";")).text());
        } else {
            trivia.tail = tokens.syntax_error(&[";"], true);
        }
        Callback {
            trivia,
            keyword,
            identifier: Some(identifier),
            body: CallbackBody::Signature { equals, return_type, open, arguments, close },
        }
    }

    pub fn is_interface_form(&self) -> bool {
        matches!(self.body, CallbackBody::Interface(_))
    }

    pub fn as_interface(&self) -> Option<&Interface> {
        match &self.body {
            CallbackBody::Interface(iface) => Some(iface),
            _ => None,
        }
    }

    /// The argument-name-qualified name of the signature form (`"C(x,
    /// y)"`); `None` for the interface form, which exposes its own
    /// operations through `as_interface` instead.
    pub fn method_name(&self) -> Option<String> {
        match &self.body {
            CallbackBody::Interface(_) => None,
            CallbackBody::Signature { arguments, .. } => {
                let name = self.name().unwrap_or_default();
                Some(format!("{name}({})", arguments.as_ref().map(|a| a.first_variant()).unwrap_or_default()))
            }
        }
    }

    /// Every argument-name-qualified variant, from the full argument
    /// list down through each dropped trailing optional, same ordering
    /// as `Operation::method_name_variants`.
    pub fn method_name_variants(&self) -> Vec<String> {
        match &self.body {
            CallbackBody::Interface(_) => Vec::new(),
            CallbackBody::Signature { arguments, .. } => {
                let name = self.name().unwrap_or_default();
                arguments
                    .as_ref()
                    .map(|a| a.argument_name_variants())
                    .unwrap_or_else(|| vec![String::new()])
                    .into_iter()
                    .map(|v| format!("{name}({v})"))
                    .collect()
            }
        }
    }

    pub(crate) fn trivia_mut(&mut self) -> &mut Trivia {
        &mut self.trivia
    }
}

impl Production for Callback {
    fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn body_text(&self) -> String {
        let mut out = self.keyword.text();
        match &self.body {
            CallbackBody::Interface(iface) => out.push_str(&iface.text()),
            CallbackBody::Signature { equals, return_type, open, arguments, close } => {
                if let Some(i) = &self.identifier {
                    out.push_str(&i.text());
                }
                out.push_str(&equals.text());
                out.push_str(&return_type.text());
                out.push_str(&open.text());
                if let Some(a) = arguments {
                    out.push_str(&a.text());
                }
                out.push_str(&close.text());
            }
        }
        out
    }
}

impl IdlNode for Callback {
    fn idl_type(&self) -> &'static str {
        "callback"
    }

    fn name(&self) -> Option<&str> {
        match &self.body {
            CallbackBody::Interface(iface) => iface.name(),
            CallbackBody::Signature { .. } => self.identifier.as_ref().map(|i| i.name()),
        }
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
    fn test_callback_signature_round_trips() {
        let mut t = tokenizer("callback AsyncOperationCallback = void (DOMException? error);");
        assert!(Callback::peek(&mut t));
        let cb = Callback::new(&mut t, None, &ui());
        assert_eq!(cb.name(), Some("AsyncOperationCallback"));
        assert!(!cb.is_interface_form());
        assert_eq!(cb.method_name(), Some("AsyncOperationCallback(error)".to_string()));
    }

    #[test]
    fn test_callback_interface_form() {
        let mut t = tokenizer("callback interface NodeFilter { short acceptNode(Node n); };");
        let cb = Callback::new(&mut t, None, &ui());
        assert!(cb.is_interface_form());
        assert_eq!(cb.name(), Some("NodeFilter"));
        assert!(cb.as_interface().unwrap().find_method("acceptNode").is_some());
    }
}
