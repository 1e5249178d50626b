//! Foundation module - Shared vocabulary of the handler layer.
//!
//! Contains the request taxonomy, the no-value sentinel, the cancellation
//! signal, and the error types every handler speaks.

mod cancellation;
mod errors;
pub mod macros;
mod request;
mod unit;

pub use cancellation::CancellationSignal;
pub use errors::{DomainError, ErrorCode, HandlerError};
pub use request::{
    Command, CommandKind, PlainKind, Query, QueryKind, Request, RequestKind, VoidCommand,
};
pub use unit::Unit;
