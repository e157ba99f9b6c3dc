//! The construct tree: named top-level and member-level entities built on
//! top of [`crate::productions`]. Mirrors the grammar's own layering —
//! containers (Interface, Mixin, Namespace, Dictionary) hold ordered
//! member lists; members are themselves small productions (Operation,
//! Attribute, Const, the declarative iterable/maplike/setlike forms)
//! dispatched by peek precedence.
//!
//! The tree is arena-indexed rather than built from `Rc`/`RefCell`:
//! [`Parser`](crate::parser::Parser) owns a flat `Vec<TopLevel>`, and a
//! [`ConstructId`] is just an index into it. Parent links are never
//! stored on a node — `find`/`find_all` walk top-down from the arena, so
//! there is nothing to point back up to.

pub mod attribute;
pub mod callback;
pub mod const_member;
pub mod container;
pub mod declarative_member;
pub mod dictionary_member;
pub mod enum_construct;
pub mod implements_includes;
pub mod member;
pub mod operation;
pub mod stringifier;
pub mod syntax_error;
pub mod top_level;
pub mod typedef;

pub use attribute::*;
pub use callback::*;
pub use const_member::*;
pub use container::*;
pub use declarative_member::*;
pub use dictionary_member::*;
pub use enum_construct::*;
pub use implements_includes::*;
pub use member::*;
pub use operation::*;
pub use stringifier::*;
pub use syntax_error::*;
pub use top_level::*;
pub use typedef::*;

/// Index of a top-level construct in [`Parser::constructs`](crate::parser::Parser).
/// Symbol-table entries and `find` results carry this rather than a
/// reference, so a construct can be looked up without borrowing the
/// table and the tree at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstructId(pub u32);

impl ConstructId {
    pub fn new(index: usize) -> Self {
        ConstructId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Common surface every construct and member exposes: the string tag
/// from §3 (`idl_type`) and, where applicable, a declared name. Members
/// synthesized for anonymous declarative forms (`__getter__`,
/// `__iterable__`, ...) report a name here but are never entered into
/// the symbol table — that only happens for the named-entity variants
/// in [`TopLevel`].
pub trait IdlNode: crate::production::Production {
    fn idl_type(&self) -> &'static str;

    fn name(&self) -> Option<&str> {
        None
    }
}

impl IdlNode for crate::productions::arguments::Argument {
    fn idl_type(&self) -> &'static str {
        "argument"
    }

    fn name(&self) -> Option<&str> {
        Some(crate::productions::arguments::Argument::name(self))
    }
}

impl IdlNode for crate::productions::extended_attributes::ExtendedAttribute {
    fn idl_type(&self) -> &'static str {
        "extended-attribute"
    }

    fn name(&self) -> Option<&str> {
        Some(crate::productions::extended_attributes::ExtendedAttribute::name(self))
    }
}

/// Join special-operation keyword spellings (`getter`, `setter`, ...)
/// into the synthesized member name the grammar contract demands:
/// `__getter__`, `__getter_setter__`, ....
pub fn synthesize_name(keywords: &[&str]) -> String {
    format!("__{}__", keywords.join("_"))
}
