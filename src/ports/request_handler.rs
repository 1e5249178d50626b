//! RequestHandler port - The canonical contract the dispatcher invokes.
//!
//! Dispatchers know only this trait. Every author-facing shape in this crate
//! ends up here, either through `HandlerAdapter` or a base handler.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{CancellationSignal, HandlerError, Request};

/// Canonical handler shape: request plus cancellation in, one response out.
///
/// Implementations must:
/// - Produce exactly one response per successful call (`Unit` for void requests)
/// - Propagate author faults unchanged
/// - Report caller withdrawal as `HandlerError::Cancelled`
///
/// # Example
///
/// ```
/// use cqs_handlers::async_trait;
/// use cqs_handlers::domain::foundation::{CancellationSignal, HandlerError};
/// use cqs_handlers::ports::RequestHandler;
/// use cqs_handlers::request;
///
/// struct Ping(String);
/// request!(Ping => String);
///
/// struct PingHandler;
///
/// #[async_trait]
/// impl RequestHandler<Ping> for PingHandler {
///     async fn handle(&self, request: Ping, _: CancellationSignal) -> Result<String, HandlerError> {
///         Ok(format!("{} Pong", request.0))
///     }
/// }
/// ```
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    /// Handle a request, observing `cancellation` where the body supports it.
    async fn handle(
        &self,
        request: R,
        cancellation: CancellationSignal,
    ) -> Result<R::Response, HandlerError>;
}

#[async_trait]
impl<R, H> RequestHandler<R> for Arc<H>
where
    R: Request,
    H: RequestHandler<R> + ?Sized,
{
    async fn handle(
        &self,
        request: R,
        cancellation: CancellationSignal,
    ) -> Result<R::Response, HandlerError> {
        (**self).handle(request, cancellation).await
    }
}

#[async_trait]
impl<R, H> RequestHandler<R> for Box<H>
where
    R: Request,
    H: RequestHandler<R> + ?Sized,
{
    async fn handle(
        &self,
        request: R,
        cancellation: CancellationSignal,
    ) -> Result<R::Response, HandlerError> {
        (**self).handle(request, cancellation).await
    }
}

/// Convenience calls on top of the canonical contract.
#[async_trait]
pub trait RequestHandlerExt<R: Request>: RequestHandler<R> {
    /// Invokes the handler with a signal that is never cancelled.
    async fn handle_uncancellable(&self, request: R) -> Result<R::Response, HandlerError> {
        self.handle(request, CancellationSignal::none()).await
    }
}

impl<R: Request, H: RequestHandler<R> + ?Sized> RequestHandlerExt<R> for H {}
