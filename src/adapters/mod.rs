//! Adapters - Everything that turns an author's handler into a `RequestHandler`.
//!
//! Two routes lead to the same canonical contract:
//!
//! - `shape_adapter` - Wrap a struct implementing one of the shape traits
//!   from [`crate::ports`] (`command`, `void_command`, `query`, ...)
//! - `fn_handler` - Supply only the body as a closure and let a base handler
//!   implement the contract (`async_fn`, `sync_fn`, ...)
//!
//! A dispatcher holding `Arc<dyn RequestHandler<R>>` cannot tell the routes
//! apart.

mod fn_handler;
mod forwarding;
mod shape_adapter;

pub use fn_handler::{
    async_fn, async_void_fn, cancellable_fn, cancellable_void_fn, sync_fn, sync_void_fn,
    AsyncFnHandler, AsyncVoidFnHandler, CancellableFnHandler, CancellableVoidFnHandler,
    SyncFnHandler, SyncVoidFnHandler,
};
pub use shape_adapter::{
    cancellable_command, cancellable_query, cancellable_void_command, command, query, shape,
    synchronous_command, synchronous_query, synchronous_void_command, void_command, HandlerAdapter,
    HandlerShape,
};
