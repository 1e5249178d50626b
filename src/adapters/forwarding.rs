//! Forwarding steps shared by every adapter and base handler.
//!
//! Keeping these in one place is what makes the trait route and the base
//! handler route indistinguishable to a dispatcher.

use std::any::type_name;
use std::future::Future;

use tracing::trace;

use crate::domain::foundation::{HandlerError, Request, RequestKind, Unit};

/// Emits the trace event for one canonical invocation.
pub(crate) fn trace_forward<R: Request>(shape: &'static str) {
    trace!(
        shape,
        kind = <R::Kind as RequestKind>::NAME,
        request = type_name::<R>(),
        "forwarding to handler"
    );
}

/// Awaits a void body once and answers with the sentinel.
///
/// Errors pass through untouched.
pub(crate) async fn respond_with_unit<F>(body: F) -> Result<Unit, HandlerError>
where
    F: Future<Output = Result<(), HandlerError>>,
{
    body.await.map(|()| Unit::VALUE)
}

/// Maps a synchronous void result onto the sentinel.
pub(crate) fn unit_response(result: Result<(), HandlerError>) -> Result<Unit, HandlerError> {
    result.map(|()| Unit::VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;

    #[tokio::test]
    async fn void_body_yields_sentinel() {
        let response = respond_with_unit(async { Ok(()) }).await;
        assert_eq!(response.unwrap(), Unit::VALUE);
    }

    #[tokio::test]
    async fn void_body_error_is_not_replaced() {
        let body = async { Err(HandlerError::from(DomainError::not_found("gone"))) };
        let response = respond_with_unit(body).await;

        let err = response.unwrap_err();
        assert_eq!(err.as_domain().unwrap().message, "gone");
    }

    #[tokio::test]
    async fn cancellation_is_not_replaced() {
        let response = respond_with_unit(async { Err(HandlerError::Cancelled) }).await;
        assert!(response.unwrap_err().is_cancelled());
    }

    #[test]
    fn synchronous_void_result_maps_to_sentinel() {
        assert_eq!(unit_response(Ok(())).unwrap(), Unit::VALUE);
        let err = unit_response(Err(HandlerError::Cancelled)).unwrap_err();
        assert!(err.is_cancelled());
    }
}
