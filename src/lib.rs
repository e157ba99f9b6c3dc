//! # widl_parser
//!
//! Lossless recursive-descent parser for the Web IDL interface
//! definition language.
//!
//! ## Module structure (dependency order)
//!
//! ```text
//! parser      → the driver: arena of constructs + symbol table + queries
//!   ↓
//! markup      → decorated serialization over the construct tree
//!   ↓
//! constructs  → named declarations built from productions (Interface, ...)
//!   ↓
//! productions → grammar building blocks (types, arguments, literals, ...)
//!   ↓
//! production  → the `Production` trait every node implements
//!   ↓
//! tokenizer   → checkpointed lexer built on `token`/`logos`
//! ```
//!
//! Parsing never fails outright: unrecognized input becomes a
//! `SyntaxError` construct and diagnostics flow through a caller-supplied
//! [`Ui`](ui::Ui), so a whole fragment always round-trips through
//! [`Production::text`] even when it contains garbage.

pub mod constructs;
pub mod error;
pub mod markup;
pub mod parser;
pub mod production;
pub mod productions;
pub mod token;
pub mod tokenizer;
pub mod ui;

pub use error::{ParserError, ParserOptions};
pub use markup::{LegacyMarker, LegacyMarkerAdapter, Marker};
pub use parser::{Found, Parser, SymbolTable};
pub use production::{Production, Trivia};
pub use token::{Position, Token, TokenKind};
pub use ui::{NullUi, TracingUi, Ui};
