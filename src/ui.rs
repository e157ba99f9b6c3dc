//! The host diagnostics sink.
//!
//! A `Ui` is the single collaborator the packaging manifest and CLI
//! driver (both out of scope for this crate) are expected to supply:
//! one method that receives a formatted message, optionally associated
//! with a token position. Nothing here is fatal — parsing never stops
//! because of a `Ui` call.

use crate::token::Position;
use tracing::warn;

/// Host-supplied diagnostics sink.
pub trait Ui {
    /// Report a message, optionally tied to a source position.
    fn message(&mut self, text: &str, position: Option<Position>);

    /// Concatenate `parts` and report as a single message.
    fn error(&mut self, parts: &[&str], position: Option<Position>) {
        self.message(&parts.concat(), position);
    }

    /// Report that `thing` was parsed but ignored (legacy syntax, a
    /// trailing enum comma, a stray `in`/`out`).
    fn did_ignore(&mut self, thing: &str, position: Option<Position>) {
        self.message(&format!("ignored: {thing}"), position);
    }
}

/// A `Ui` that discards everything. Useful for callers that only want
/// the construct tree and don't care about diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullUi;

impl Ui for NullUi {
    fn message(&mut self, _text: &str, _position: Option<Position>) {}
}

/// A `Ui` that forwards every message to `tracing`, so a caller who
/// doesn't supply a sink still gets diagnostics on the log if they have
/// a subscriber installed. This is the default sink used by `Parser`
/// when none is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingUi;

impl Ui for TracingUi {
    fn message(&mut self, text: &str, position: Option<Position>) {
        match position {
            Some(pos) => warn!(target: "widl_parser::ui", %pos, "{text}"),
            None => warn!(target: "widl_parser::ui", "{text}"),
        }
    }
}
