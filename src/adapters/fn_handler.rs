//! Closure-backed base handlers.
//!
//! The second route to a `RequestHandler`: instead of implementing a shape
//! trait on a struct, the author supplies only the body as a closure and the
//! base handler implements the canonical contract around it.
//!
//! | Constructor | Closure shape |
//! |---|---|
//! | `cancellable_fn` | `Fn(R, CancellationSignal) -> impl Future<Output = Result<R::Response, _>>` |
//! | `cancellable_void_fn` | `Fn(R, CancellationSignal) -> impl Future<Output = Result<(), _>>` |
//! | `async_fn` | `Fn(R) -> impl Future<Output = Result<R::Response, _>>` |
//! | `async_void_fn` | `Fn(R) -> impl Future<Output = Result<(), _>>` |
//! | `sync_fn` | `Fn(R) -> Result<R::Response, _>` |
//! | `sync_void_fn` | `Fn(R) -> Result<(), _>` |
//!
//! ```
//! use std::sync::Arc;
//!
//! use cqs_handlers::adapters::sync_fn;
//! use cqs_handlers::domain::foundation::HandlerError;
//! use cqs_handlers::ports::{RequestHandler, RequestHandlerExt};
//! use cqs_handlers::query;
//!
//! #[derive(Debug, PartialEq)]
//! struct Output;
//!
//! struct GetOutput;
//! query!(GetOutput => Output);
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handler: Arc<dyn RequestHandler<GetOutput>> =
//!     Arc::new(sync_fn(|_: GetOutput| Ok::<_, HandlerError>(Output)));
//!
//! assert_eq!(handler.handle_uncancellable(GetOutput).await.unwrap(), Output);
//! # }
//! ```
//!
//! Void closures are only accepted for requests answering `Unit`:
//!
//! ```compile_fail
//! use cqs_handlers::adapters::sync_void_fn;
//! use cqs_handlers::command;
//! use cqs_handlers::domain::foundation::HandlerError;
//! use cqs_handlers::ports::RequestHandler;
//!
//! struct Greet;
//! command!(Greet => String);
//!
//! let handler = sync_void_fn(|_: Greet| Ok::<_, HandlerError>(()));
//! let _: &dyn RequestHandler<Greet> = &handler;
//! ```

use std::fmt;
use std::future::Future;

use async_trait::async_trait;

use super::forwarding::{respond_with_unit, trace_forward, unit_response};
use crate::domain::foundation::{CancellationSignal, HandlerError, Request, Unit};
use crate::ports::RequestHandler;

macro_rules! fn_handler {
    ($(#[$meta:meta])* $name:ident, $constructor:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name<F> {
            body: F,
        }

        impl<F> $name<F> {
            /// Wraps `body` as a handler.
            pub const fn new(body: F) -> Self {
                Self { body }
            }
        }

        impl<F> fmt::Debug for $name<F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }

        #[doc = concat!("Builds a [`", stringify!($name), "`] from a closure.")]
        pub const fn $constructor<F>(body: F) -> $name<F> {
            $name::new(body)
        }
    };
}

fn_handler!(
    /// Base handler for cancellation-aware async closures with a response.
    CancellableFnHandler,
    cancellable_fn
);
fn_handler!(
    /// Base handler for cancellation-aware async closures without a response.
    CancellableVoidFnHandler,
    cancellable_void_fn
);
fn_handler!(
    /// Base handler for async closures that do not observe cancellation.
    AsyncFnHandler,
    async_fn
);
fn_handler!(
    /// Base handler for async closures with neither cancellation nor response.
    AsyncVoidFnHandler,
    async_void_fn
);
fn_handler!(
    /// Base handler for synchronous closures.
    SyncFnHandler,
    sync_fn
);
fn_handler!(
    /// Base handler for synchronous closures without a response.
    SyncVoidFnHandler,
    sync_void_fn
);

#[async_trait]
impl<R, F, Fut> RequestHandler<R> for CancellableFnHandler<F>
where
    R: Request,
    F: Fn(R, CancellationSignal) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R::Response, HandlerError>> + Send + 'static,
{
    async fn handle(
        &self,
        request: R,
        cancellation: CancellationSignal,
    ) -> Result<R::Response, HandlerError> {
        trace_forward::<R>("cancellable_fn");
        (self.body)(request, cancellation).await
    }
}

#[async_trait]
impl<R, F, Fut> RequestHandler<R> for CancellableVoidFnHandler<F>
where
    R: Request<Response = Unit>,
    F: Fn(R, CancellationSignal) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
{
    async fn handle(
        &self,
        request: R,
        cancellation: CancellationSignal,
    ) -> Result<Unit, HandlerError> {
        trace_forward::<R>("cancellable_void_fn");
        respond_with_unit((self.body)(request, cancellation)).await
    }
}

#[async_trait]
impl<R, F, Fut> RequestHandler<R> for AsyncFnHandler<F>
where
    R: Request,
    F: Fn(R) -> Fut + Send + Sync,
    Fut: Future<Output = Result<R::Response, HandlerError>> + Send + 'static,
{
    async fn handle(
        &self,
        request: R,
        _cancellation: CancellationSignal,
    ) -> Result<R::Response, HandlerError> {
        trace_forward::<R>("async_fn");
        (self.body)(request).await
    }
}

#[async_trait]
impl<R, F, Fut> RequestHandler<R> for AsyncVoidFnHandler<F>
where
    R: Request<Response = Unit>,
    F: Fn(R) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
{
    async fn handle(
        &self,
        request: R,
        _cancellation: CancellationSignal,
    ) -> Result<Unit, HandlerError> {
        trace_forward::<R>("async_void_fn");
        respond_with_unit((self.body)(request)).await
    }
}

#[async_trait]
impl<R, F> RequestHandler<R> for SyncFnHandler<F>
where
    R: Request,
    F: Fn(R) -> Result<R::Response, HandlerError> + Send + Sync,
{
    async fn handle(
        &self,
        request: R,
        _cancellation: CancellationSignal,
    ) -> Result<R::Response, HandlerError> {
        trace_forward::<R>("sync_fn");
        (self.body)(request)
    }
}

#[async_trait]
impl<R, F> RequestHandler<R> for SyncVoidFnHandler<F>
where
    R: Request<Response = Unit>,
    F: Fn(R) -> Result<(), HandlerError> + Send + Sync,
{
    async fn handle(
        &self,
        request: R,
        _cancellation: CancellationSignal,
    ) -> Result<Unit, HandlerError> {
        trace_forward::<R>("sync_void_fn");
        unit_response((self.body)(request))
    }
}
