//! HandlerAdapter - Turns a narrow handler shape into a `RequestHandler`.
//!
//! A handler written against one of the shape traits in [`crate::ports`] is
//! wrapped once, at registration time, and from then on is just a
//! `RequestHandler` to the dispatcher.
//!
//! ```
//! use std::sync::Arc;
//!
//! use cqs_handlers::adapters;
//! use cqs_handlers::async_trait;
//! use cqs_handlers::command;
//! use cqs_handlers::domain::foundation::{HandlerError, Unit};
//! use cqs_handlers::ports::{RequestHandler, RequestHandlerExt, VoidCommandHandler};
//!
//! struct Notify;
//! command!(Notify);
//!
//! struct NotifyHandler;
//!
//! #[async_trait]
//! impl VoidCommandHandler<Notify> for NotifyHandler {
//!     async fn handle(&self, _: Notify) -> Result<(), HandlerError> {
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handler: Arc<dyn RequestHandler<Notify>> = Arc::new(adapters::void_command(NotifyHandler));
//! assert_eq!(handler.handle_uncancellable(Notify).await.unwrap(), Unit::VALUE);
//! # }
//! ```
//!
//! Pairing a void shape with a command that declares a real response does
//! not type-check:
//!
//! ```compile_fail
//! use cqs_handlers::adapters;
//! use cqs_handlers::command;
//! use cqs_handlers::domain::foundation::Unit;
//! use cqs_handlers::ports::{RequestHandler, SynchronousVoidCommandHandler};
//! use cqs_handlers::domain::foundation::HandlerError;
//!
//! struct Greet;
//! command!(Greet => String);
//!
//! struct Notify;
//! command!(Notify);
//!
//! struct NotifyHandler;
//!
//! impl SynchronousVoidCommandHandler<Notify> for NotifyHandler {
//!     fn handle(&self, _: Notify) -> Result<(), HandlerError> {
//!         Ok(())
//!     }
//! }
//!
//! fn register<R: cqs_handlers::domain::foundation::Request>(_: &dyn RequestHandler<R>) {}
//! register::<Greet>(&adapters::synchronous_void_command(NotifyHandler));
//! ```

use std::marker::PhantomData;

use async_trait::async_trait;

use super::forwarding::{respond_with_unit, trace_forward, unit_response};
use crate::domain::foundation::{
    CancellationSignal, Command, HandlerError, Query, Request, Unit, VoidCommand,
};
use crate::ports::{
    CancellableCommandHandler, CancellableQueryHandler, CancellableVoidCommandHandler,
    CommandHandler, QueryHandler, RequestHandler, SynchronousCommandHandler,
    SynchronousQueryHandler, SynchronousVoidCommandHandler, VoidCommandHandler,
};

mod sealed {
    pub trait Sealed {}
}

/// Marker naming the shape a [`HandlerAdapter`] forwards from.
pub trait HandlerShape: sealed::Sealed + Send + Sync + 'static {
    /// Shape name, used in trace output.
    const NAME: &'static str;
}

/// Shape markers, one per author-facing trait.
pub mod shape {
    /// [`CancellableCommandHandler`](crate::ports::CancellableCommandHandler)
    #[derive(Debug)]
    pub enum CancellableCommand {}
    /// [`CancellableVoidCommandHandler`](crate::ports::CancellableVoidCommandHandler)
    #[derive(Debug)]
    pub enum CancellableVoidCommand {}
    /// [`CommandHandler`](crate::ports::CommandHandler)
    #[derive(Debug)]
    pub enum Command {}
    /// [`VoidCommandHandler`](crate::ports::VoidCommandHandler)
    #[derive(Debug)]
    pub enum VoidCommand {}
    /// [`SynchronousCommandHandler`](crate::ports::SynchronousCommandHandler)
    #[derive(Debug)]
    pub enum SynchronousCommand {}
    /// [`SynchronousVoidCommandHandler`](crate::ports::SynchronousVoidCommandHandler)
    #[derive(Debug)]
    pub enum SynchronousVoidCommand {}
    /// [`CancellableQueryHandler`](crate::ports::CancellableQueryHandler)
    #[derive(Debug)]
    pub enum CancellableQuery {}
    /// [`QueryHandler`](crate::ports::QueryHandler)
    #[derive(Debug)]
    pub enum Query {}
    /// [`SynchronousQueryHandler`](crate::ports::SynchronousQueryHandler)
    #[derive(Debug)]
    pub enum SynchronousQuery {}
}

macro_rules! handler_shapes {
    ($($marker:ident => $name:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for shape::$marker {}
            impl HandlerShape for shape::$marker {
                const NAME: &'static str = $name;
            }
        )*
    };
}

handler_shapes! {
    CancellableCommand => "cancellable_command",
    CancellableVoidCommand => "cancellable_void_command",
    Command => "command",
    VoidCommand => "void_command",
    SynchronousCommand => "synchronous_command",
    SynchronousVoidCommand => "synchronous_void_command",
    CancellableQuery => "cancellable_query",
    Query => "query",
    SynchronousQuery => "synchronous_query",
}

/// Wraps a handler written in shape `S` so it satisfies [`RequestHandler`].
///
/// The adapter is stateless: it holds the author's handler and nothing else,
/// awaits it exactly once per call, and returns its outcome unchanged.
pub struct HandlerAdapter<H, S: HandlerShape> {
    inner: H,
    shape: PhantomData<fn() -> S>,
}

impl<H, S: HandlerShape> HandlerAdapter<H, S> {
    /// Wraps `inner` as shape `S`.
    pub const fn new(inner: H) -> Self {
        Self {
            inner,
            shape: PhantomData,
        }
    }

    /// Returns the wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwraps the adapter.
    pub fn into_inner(self) -> H {
        self.inner
    }

    /// Name of the shape being adapted.
    pub fn shape_name(&self) -> &'static str {
        S::NAME
    }
}

impl<H: Clone, S: HandlerShape> Clone for HandlerAdapter<H, S> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<H: std::fmt::Debug, S: HandlerShape> std::fmt::Debug for HandlerAdapter<H, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerAdapter")
            .field("shape", &S::NAME)
            .field("inner", &self.inner)
            .finish()
    }
}

// === Constructors ===

/// Adapts a [`CancellableCommandHandler`].
pub const fn cancellable_command<H>(handler: H) -> HandlerAdapter<H, shape::CancellableCommand> {
    HandlerAdapter::new(handler)
}

/// Adapts a [`CancellableVoidCommandHandler`].
pub const fn cancellable_void_command<H>(
    handler: H,
) -> HandlerAdapter<H, shape::CancellableVoidCommand> {
    HandlerAdapter::new(handler)
}

/// Adapts a [`CommandHandler`].
pub const fn command<H>(handler: H) -> HandlerAdapter<H, shape::Command> {
    HandlerAdapter::new(handler)
}

/// Adapts a [`VoidCommandHandler`].
pub const fn void_command<H>(handler: H) -> HandlerAdapter<H, shape::VoidCommand> {
    HandlerAdapter::new(handler)
}

/// Adapts a [`SynchronousCommandHandler`].
pub const fn synchronous_command<H>(handler: H) -> HandlerAdapter<H, shape::SynchronousCommand> {
    HandlerAdapter::new(handler)
}

/// Adapts a [`SynchronousVoidCommandHandler`].
pub const fn synchronous_void_command<H>(
    handler: H,
) -> HandlerAdapter<H, shape::SynchronousVoidCommand> {
    HandlerAdapter::new(handler)
}

/// Adapts a [`CancellableQueryHandler`].
pub const fn cancellable_query<H>(handler: H) -> HandlerAdapter<H, shape::CancellableQuery> {
    HandlerAdapter::new(handler)
}

/// Adapts a [`QueryHandler`].
pub const fn query<H>(handler: H) -> HandlerAdapter<H, shape::Query> {
    HandlerAdapter::new(handler)
}

/// Adapts a [`SynchronousQueryHandler`].
pub const fn synchronous_query<H>(handler: H) -> HandlerAdapter<H, shape::SynchronousQuery> {
    HandlerAdapter::new(handler)
}

// === Forwarding ===

#[async_trait]
impl<C, H> RequestHandler<C> for HandlerAdapter<H, shape::CancellableCommand>
where
    C: Request,
    H: CancellableCommandHandler<C>,
{
    async fn handle(
        &self,
        command: C,
        cancellation: CancellationSignal,
    ) -> Result<C::Response, HandlerError> {
        trace_forward::<C>(self.shape_name());
        self.inner.handle(command, cancellation).await
    }
}

#[async_trait]
impl<C, H> RequestHandler<C> for HandlerAdapter<H, shape::CancellableVoidCommand>
where
    C: Request<Response = Unit>,
    H: CancellableVoidCommandHandler<C>,
{
    async fn handle(
        &self,
        command: C,
        cancellation: CancellationSignal,
    ) -> Result<Unit, HandlerError> {
        trace_forward::<C>(self.shape_name());
        respond_with_unit(self.inner.handle(command, cancellation)).await
    }
}

#[async_trait]
impl<C, H> RequestHandler<C> for HandlerAdapter<H, shape::Command>
where
    C: Request,
    H: CommandHandler<C>,
{
    async fn handle(
        &self,
        command: C,
        _cancellation: CancellationSignal,
    ) -> Result<C::Response, HandlerError> {
        trace_forward::<C>(self.shape_name());
        self.inner.handle(command).await
    }
}

#[async_trait]
impl<C, H> RequestHandler<C> for HandlerAdapter<H, shape::VoidCommand>
where
    C: Request<Response = Unit>,
    H: VoidCommandHandler<C>,
{
    async fn handle(
        &self,
        command: C,
        _cancellation: CancellationSignal,
    ) -> Result<Unit, HandlerError> {
        trace_forward::<C>(self.shape_name());
        respond_with_unit(self.inner.handle(command)).await
    }
}

#[async_trait]
impl<C, H> RequestHandler<C> for HandlerAdapter<H, shape::SynchronousCommand>
where
    C: Command,
    H: SynchronousCommandHandler<C>,
{
    async fn handle(
        &self,
        command: C,
        _cancellation: CancellationSignal,
    ) -> Result<C::Response, HandlerError> {
        trace_forward::<C>(self.shape_name());
        self.inner.handle(command)
    }
}

#[async_trait]
impl<C, H> RequestHandler<C> for HandlerAdapter<H, shape::SynchronousVoidCommand>
where
    C: VoidCommand,
    H: SynchronousVoidCommandHandler<C>,
{
    async fn handle(
        &self,
        command: C,
        _cancellation: CancellationSignal,
    ) -> Result<Unit, HandlerError> {
        trace_forward::<C>(self.shape_name());
        unit_response(self.inner.handle(command))
    }
}

#[async_trait]
impl<Q, H> RequestHandler<Q> for HandlerAdapter<H, shape::CancellableQuery>
where
    Q: Query,
    H: CancellableQueryHandler<Q>,
{
    async fn handle(
        &self,
        query: Q,
        cancellation: CancellationSignal,
    ) -> Result<Q::Response, HandlerError> {
        trace_forward::<Q>(self.shape_name());
        self.inner.handle(query, cancellation).await
    }
}

#[async_trait]
impl<Q, H> RequestHandler<Q> for HandlerAdapter<H, shape::Query>
where
    Q: Query,
    H: QueryHandler<Q>,
{
    async fn handle(
        &self,
        query: Q,
        _cancellation: CancellationSignal,
    ) -> Result<Q::Response, HandlerError> {
        trace_forward::<Q>(self.shape_name());
        self.inner.handle(query).await
    }
}

#[async_trait]
impl<Q, H> RequestHandler<Q> for HandlerAdapter<H, shape::SynchronousQuery>
where
    Q: Query,
    H: SynchronousQueryHandler<Q>,
{
    async fn handle(
        &self,
        query: Q,
        _cancellation: CancellationSignal,
    ) -> Result<Q::Response, HandlerError> {
        trace_forward::<Q>(self.shape_name());
        self.inner.handle(query)
    }
}
