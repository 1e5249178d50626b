//! Shared test infrastructure: a minimal in-memory dispatcher.
//!
//! Holds one `Arc<dyn RequestHandler<R>>` per request type, exactly like a
//! real dispatcher would. It never sees which shape a handler was written in.

#![allow(dead_code)]

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use cqs_handlers::domain::foundation::{CancellationSignal, HandlerError, Request};
use cqs_handlers::ports::RequestHandler;
use tokio_util::sync::CancellationToken;

/// In-memory dispatcher for tests.
///
/// # Panics
///
/// Methods panic if the registry lock is poisoned or no handler is
/// registered for the request type. Acceptable for test code only.
#[derive(Default)]
pub struct TestMediator {
    handlers: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl TestMediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for `R`, replacing any previous one.
    pub fn register<R, H>(&self, handler: H) -> &Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let handler: Arc<dyn RequestHandler<R>> = Arc::new(handler);
        self.handlers
            .write()
            .expect("TestMediator: handlers lock poisoned")
            .insert(TypeId::of::<R>(), Box::new(handler));
        self
    }

    /// Looks up the handler registered for `R`.
    pub fn handler_for<R: Request>(&self) -> Arc<dyn RequestHandler<R>> {
        let name = std::any::type_name::<R>();
        self.handlers
            .read()
            .expect("TestMediator: handlers lock poisoned")
            .get(&TypeId::of::<R>())
            .and_then(|h| h.downcast_ref::<Arc<dyn RequestHandler<R>>>())
            .cloned()
            .unwrap_or_else(|| panic!("no handler registered for {name}"))
    }

    /// Sends a request with a signal that is never cancelled.
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, HandlerError> {
        self.send_with(request, CancellationSignal::none()).await
    }

    /// Sends a request with the given cancellation signal.
    pub async fn send_with<R: Request>(
        &self,
        request: R,
        cancellation: CancellationSignal,
    ) -> Result<R::Response, HandlerError> {
        let handler = self.handler_for::<R>();
        handler.handle(request, cancellation).await
    }

    /// Spawns a request and returns the token that cancels it.
    pub fn spawn<R: Request>(
        &self,
        request: R,
    ) -> (
        CancellationToken,
        tokio::task::JoinHandle<Result<R::Response, HandlerError>>,
    ) {
        let handler = self.handler_for::<R>();
        let token = CancellationToken::new();
        let signal = CancellationSignal::from(&token);
        let task = tokio::spawn(async move { handler.handle(request, signal).await });
        (token, task)
    }
}

/// Response shared by the ping-style fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pong {
    pub message: String,
}

impl Pong {
    pub fn reply_to(message: &str) -> Self {
        Self {
            message: format!("{} Pong", message),
        }
    }
}
