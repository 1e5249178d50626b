//! Query handler shapes.
//!
//! Queries always declare a response, so there are no void query shapes.
//! A query answering `Unit` can still use any of these.

use async_trait::async_trait;

use crate::domain::foundation::{CancellationSignal, HandlerError, Query};

/// Long-running query handler that honors the caller's cancellation.
#[async_trait]
pub trait CancellableQueryHandler<Q: Query>: Send + Sync {
    /// Handle a query, aborting when `cancellation` fires.
    async fn handle(
        &self,
        query: Q,
        cancellation: CancellationSignal,
    ) -> Result<Q::Response, HandlerError>;
}

/// Query handler that does not observe cancellation.
#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    /// Handle a query.
    async fn handle(&self, query: Q) -> Result<Q::Response, HandlerError>;
}

/// Query handler whose body is plain synchronous code.
pub trait SynchronousQueryHandler<Q: Query>: Send + Sync {
    /// Handle a query synchronously.
    fn handle(&self, query: Q) -> Result<Q::Response, HandlerError>;
}
