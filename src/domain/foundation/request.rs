//! Request taxonomy - Commands, queries and plain requests.
//!
//! Every request declares its response type and exactly one kind tag.
//! Because the kind is a single associated type, a request can never be
//! both a [`Command`] and a [`Query`].
//!
//! ```
//! use cqs_handlers::domain::foundation::{Command, Query, Request, Unit};
//! use cqs_handlers::{command, query};
//!
//! struct Greet { name: String }
//! command!(Greet => String);
//!
//! struct Notify;
//! command!(Notify);
//!
//! struct CountUsers;
//! query!(CountUsers => u64);
//!
//! fn accepts_any_command<C: Command>() {}
//! fn accepts_any_query<Q: Query>() {}
//!
//! accepts_any_command::<Greet>();
//! accepts_any_command::<Notify>();
//! accepts_any_query::<CountUsers>();
//!
//! fn response_of<R: Request>() -> &'static str { std::any::type_name::<R::Response>() }
//! assert_eq!(response_of::<Notify>(), std::any::type_name::<Unit>());
//! ```
//!
//! A query is not a command:
//!
//! ```compile_fail
//! use cqs_handlers::domain::foundation::Command;
//! use cqs_handlers::query;
//!
//! struct CountUsers;
//! query!(CountUsers => u64);
//!
//! fn accepts_any_command<C: Command>() {}
//! accepts_any_command::<CountUsers>();
//! ```

use super::Unit;

mod sealed {
    pub trait Sealed {}
}

/// Kind tag carried by every [`Request`].
///
/// Sealed: the only kinds are [`CommandKind`], [`QueryKind`] and [`PlainKind`].
pub trait RequestKind: sealed::Sealed + Send + Sync + 'static {
    /// Human readable kind name, used in trace output.
    const NAME: &'static str;
}

/// Tag for requests that intend to change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {}

/// Tag for requests that only read state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {}

/// Tag for requests outside the command/query split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainKind {}

impl sealed::Sealed for CommandKind {}
impl sealed::Sealed for QueryKind {}
impl sealed::Sealed for PlainKind {}

impl RequestKind for CommandKind {
    const NAME: &'static str = "command";
}

impl RequestKind for QueryKind {
    const NAME: &'static str = "query";
}

impl RequestKind for PlainKind {
    const NAME: &'static str = "request";
}

/// An intent to be handled, producing exactly one `Response`.
///
/// Requests are built by the caller per invocation and moved into the
/// handler. Use [`Unit`] as the response when there is nothing to return.
pub trait Request: Send + 'static {
    /// Value produced by the handler.
    type Response: Send + 'static;

    /// Command, query or plain request.
    type Kind: RequestKind;
}

/// Any request with command intent, whatever its response type.
pub trait Command: Request<Kind = CommandKind> {}

impl<T: Request<Kind = CommandKind>> Command for T {}

/// Any request with query intent, whatever its response type.
pub trait Query: Request<Kind = QueryKind> {}

impl<T: Request<Kind = QueryKind>> Query for T {}

/// A command whose response is exactly [`Unit`].
pub trait VoidCommand: Command<Response = Unit> {}

impl<T: Command<Response = Unit>> VoidCommand for T {}
