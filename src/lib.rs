//! CQS Handlers - Command/query taxonomy and handler-shape adapters
//!
//! Dispatchers invoke exactly one contract, [`ports::RequestHandler`].
//! This crate lets authors write handlers in whatever shape suits them
//! (async or synchronous, cancellable or not, with or without a response)
//! and turns each of them into that contract without the dispatcher
//! knowing which shape was used.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

pub use async_trait::async_trait;
