//! Unit - The no-value response sentinel.
//!
//! Handlers for void commands still answer the dispatcher with exactly one
//! response value. `Unit` is that value: zero-sized, copyable and always
//! equal to itself, so the response channel stays uniform.

use std::fmt;

/// Stand-in response for requests that produce no meaningful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unit;

impl Unit {
    /// The single logical instance.
    pub const VALUE: Unit = Unit;
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "()")
    }
}
