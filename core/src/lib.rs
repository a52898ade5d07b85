//! Synchronous client core for the todo service.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `TodoApp` layers the
//! client-side view state on top: a mirror of the server's list, the new-item
//! draft, edit scratch state and the active filter. It performs I/O only
//! through the `Transport` trait the host supplies.
//!
//! # Design
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.
//! - The mirror is only updated from server responses, never optimistically.

pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use app::{Draft, Editing, TodoApp, Transport};
pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Filter, Priority, Todo, UpdateTodo};
