//! Domain layer containing the request taxonomy and handler vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Request kinds, the `Unit` sentinel, cancellation, errors

pub mod foundation;
