//! API layer: HTTP handlers and middleware.

pub mod handlers;
pub mod middleware;
