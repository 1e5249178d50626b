//! Declaration macros for requests.
//!
//! - **`command!`** - Declares a type as a command
//! - **`query!`** - Declares a type as a query
//! - **`request!`** - Declares a plain request outside the command/query split
//!
//! Omitting the response type declares a void request answered with
//! [`Unit`](crate::domain::foundation::Unit).
//!
//! # Usage
//!
//! ```
//! use cqs_handlers::{command, query, request};
//!
//! pub struct CreateSession { pub title: String }
//! pub struct ArchiveSession { pub id: u64 }
//! pub struct GetSession { pub id: u64 }
//! pub struct Ping;
//!
//! command!(CreateSession => u64);
//! command!(ArchiveSession);
//! query!(GetSession => Option<String>);
//! request!(Ping => String);
//! ```

/// Implements `Request` with `Kind = CommandKind` for a type.
#[macro_export]
macro_rules! command {
    ($name:ty => $response:ty) => {
        impl $crate::domain::foundation::Request for $name {
            type Response = $response;
            type Kind = $crate::domain::foundation::CommandKind;
        }
    };
    ($name:ty) => {
        $crate::command!($name => $crate::domain::foundation::Unit);
    };
}

/// Implements `Request` with `Kind = QueryKind` for a type.
#[macro_export]
macro_rules! query {
    ($name:ty => $response:ty) => {
        impl $crate::domain::foundation::Request for $name {
            type Response = $response;
            type Kind = $crate::domain::foundation::QueryKind;
        }
    };
    ($name:ty) => {
        $crate::query!($name => $crate::domain::foundation::Unit);
    };
}

/// Implements `Request` with `Kind = PlainKind` for a type.
#[macro_export]
macro_rules! request {
    ($name:ty => $response:ty) => {
        impl $crate::domain::foundation::Request for $name {
            type Response = $response;
            type Kind = $crate::domain::foundation::PlainKind;
        }
    };
    ($name:ty) => {
        $crate::request!($name => $crate::domain::foundation::Unit);
    };
}
