//! Ports - Handler contracts.
//!
//! `RequestHandler` is the only contract a dispatcher depends on. The other
//! traits are narrower author-facing shapes; adapters turn any of them into
//! a `RequestHandler`.
//!
//! ## Canonical Port
//!
//! - `RequestHandler` - Request plus cancellation in, one response out
//!
//! ## Command Shapes
//!
//! - `CancellableCommandHandler` / `CancellableVoidCommandHandler`
//! - `CommandHandler` / `VoidCommandHandler`
//! - `SynchronousCommandHandler` / `SynchronousVoidCommandHandler`
//!
//! ## Query Shapes
//!
//! - `CancellableQueryHandler`
//! - `QueryHandler`
//! - `SynchronousQueryHandler`

mod command_handler;
mod query_handler;
mod request_handler;

pub use command_handler::{
    CancellableCommandHandler, CancellableVoidCommandHandler, CommandHandler,
    SynchronousCommandHandler, SynchronousVoidCommandHandler, VoidCommandHandler,
};
pub use query_handler::{CancellableQueryHandler, QueryHandler, SynchronousQueryHandler};
pub use request_handler::{RequestHandler, RequestHandlerExt};
