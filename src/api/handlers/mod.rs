//! HTTP request handlers.

mod health;
mod redirect;

pub use health::health_handler;
pub use redirect::{default_redirect_handler, redirect_handler};
