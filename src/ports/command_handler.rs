//! Command handler shapes.
//!
//! Authors implement whichever of these fits the command best and hand the
//! value to the matching constructor in [`crate::adapters`] to obtain a
//! [`RequestHandler`](super::RequestHandler).
//!
//! | Trait | Cancellation | Async | Response |
//! |---|---|---|---|
//! | `CancellableCommandHandler` | yes | yes | `C::Response` |
//! | `CancellableVoidCommandHandler` | yes | yes | none |
//! | `CommandHandler` | no | yes | `C::Response` |
//! | `VoidCommandHandler` | no | yes | none |
//! | `SynchronousCommandHandler` | no | no | `C::Response` |
//! | `SynchronousVoidCommandHandler` | no | no | none |
//!
//! The asynchronous shapes accept any [`Request`], so plain requests declared
//! with `request!` can use them too. The synchronous shapes are for commands
//! only.
//!
//! Void shapes only accept requests whose response is `Unit`:
//!
//! ```compile_fail
//! use cqs_handlers::async_trait;
//! use cqs_handlers::command;
//! use cqs_handlers::domain::foundation::HandlerError;
//! use cqs_handlers::ports::VoidCommandHandler;
//!
//! struct Greet;
//! command!(Greet => String);
//!
//! struct GreetHandler;
//!
//! #[async_trait]
//! impl VoidCommandHandler<Greet> for GreetHandler {
//!     async fn handle(&self, _: Greet) -> Result<(), HandlerError> {
//!         Ok(())
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{
    CancellationSignal, Command, HandlerError, Request, Unit, VoidCommand,
};

/// Long-running command handler that honors the caller's cancellation.
///
/// Forwarding to the canonical contract is identity; the name documents that
/// the body is expected to observe `cancellation`.
#[async_trait]
pub trait CancellableCommandHandler<C: Request>: Send + Sync {
    /// Handle a command, aborting when `cancellation` fires.
    async fn handle(
        &self,
        command: C,
        cancellation: CancellationSignal,
    ) -> Result<C::Response, HandlerError>;
}

/// Long-running command handler with no response.
#[async_trait]
pub trait CancellableVoidCommandHandler<C: Request<Response = Unit>>: Send + Sync {
    /// Handle a command, aborting when `cancellation` fires.
    async fn handle(
        &self,
        command: C,
        cancellation: CancellationSignal,
    ) -> Result<(), HandlerError>;
}

/// Command handler that does not observe cancellation.
///
/// Intended for short bodies. Once started, the call runs to completion
/// regardless of what the caller does with its token.
#[async_trait]
pub trait CommandHandler<C: Request>: Send + Sync {
    /// Handle a command.
    async fn handle(&self, command: C) -> Result<C::Response, HandlerError>;
}

/// Command handler with neither cancellation nor response.
#[async_trait]
pub trait VoidCommandHandler<C: Request<Response = Unit>>: Send + Sync {
    /// Handle a command.
    async fn handle(&self, command: C) -> Result<(), HandlerError>;
}

/// Command handler whose body is plain synchronous code.
pub trait SynchronousCommandHandler<C: Command>: Send + Sync {
    /// Handle a command synchronously.
    fn handle(&self, command: C) -> Result<C::Response, HandlerError>;
}

/// Synchronous command handler with no response.
pub trait SynchronousVoidCommandHandler<C: VoidCommand>: Send + Sync {
    /// Handle a command synchronously.
    fn handle(&self, command: C) -> Result<(), HandlerError>;
}
