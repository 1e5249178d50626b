//! Integration tests for query handler shapes.

mod common;

use cqs_handlers::adapters;
use cqs_handlers::async_trait;
use cqs_handlers::domain::foundation::{CancellationSignal, HandlerError, Unit};
use cqs_handlers::ports::{CancellableQueryHandler, QueryHandler, SynchronousQueryHandler};
use cqs_handlers::query;

use common::{Pong, TestMediator};

// =============================================================================
// Queries
// =============================================================================

struct PingQuery {
    message: String,
}
query!(PingQuery => Pong);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct UserDetails {
    name: String,
}

struct GetUserDetails;
query!(GetUserDetails => UserDetails);

/// A query answered only by side effects observable elsewhere.
struct Probe;
query!(Probe);

fn ping(message: &str) -> PingQuery {
    PingQuery {
        message: message.to_string(),
    }
}

// =============================================================================
// Handlers
// =============================================================================

struct PingQueryHandler;

#[async_trait]
impl QueryHandler<PingQuery> for PingQueryHandler {
    async fn handle(&self, query: PingQuery) -> Result<Pong, HandlerError> {
        Ok(Pong::reply_to(&query.message))
    }
}

#[async_trait]
impl CancellableQueryHandler<PingQuery> for PingQueryHandler {
    async fn handle(
        &self,
        query: PingQuery,
        cancellation: CancellationSignal,
    ) -> Result<Pong, HandlerError> {
        cancellation.check()?;
        Ok(Pong::reply_to(&query.message))
    }
}

struct GetUserDetailsHandler;

impl SynchronousQueryHandler<GetUserDetails> for GetUserDetailsHandler {
    fn handle(&self, _: GetUserDetails) -> Result<UserDetails, HandlerError> {
        Ok(UserDetails::default())
    }
}

struct ProbeHandler;

#[async_trait]
impl QueryHandler<Probe> for ProbeHandler {
    async fn handle(&self, _: Probe) -> Result<Unit, HandlerError> {
        Ok(Unit::VALUE)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn query_with_result_is_connected_to_query_handler() {
    let mediator = TestMediator::new();
    mediator.register::<PingQuery, _>(adapters::query(PingQueryHandler));

    let result = mediator.send(ping("Ping")).await.unwrap();

    assert_eq!(result.message, "Ping Pong");
}

#[tokio::test]
async fn cancellable_query_is_connected_to_query_handler() {
    let mediator = TestMediator::new();
    mediator.register::<PingQuery, _>(adapters::cancellable_query(PingQueryHandler));

    let result = mediator.send(ping("Ping")).await.unwrap();

    assert_eq!(result, Pong::reply_to("Ping"));
}

#[tokio::test]
async fn synchronous_query_handler_is_called_by_dispatcher() {
    let mediator = TestMediator::new();
    mediator.register::<GetUserDetails, _>(adapters::synchronous_query(GetUserDetailsHandler));

    let result = mediator.send(GetUserDetails).await.unwrap();

    assert_eq!(result, UserDetails::default());
    assert!(result.name.is_empty());
}

#[tokio::test]
async fn closure_query_matches_trait_query() {
    let mediator = TestMediator::new();
    mediator.register::<PingQuery, _>(adapters::sync_fn(|q: PingQuery| {
        Ok::<_, HandlerError>(Pong::reply_to(&q.message))
    }));
    let from_closure = mediator.send(ping("Ping")).await.unwrap();

    mediator.register::<PingQuery, _>(adapters::query(PingQueryHandler));
    let from_trait = mediator.send(ping("Ping")).await.unwrap();

    assert_eq!(from_closure, from_trait);
}

#[tokio::test]
async fn unit_query_answers_with_sentinel() {
    let mediator = TestMediator::new();
    mediator.register::<Probe, _>(adapters::query(ProbeHandler));

    let first = mediator.send(Probe).await.unwrap();
    let second = mediator.send(Probe).await.unwrap();

    assert_eq!(first, Unit::VALUE);
    assert_eq!(first, second);
}
