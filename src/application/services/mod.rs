//! Application services composing domain logic.

mod preview_service;
mod redirect_service;

pub use preview_service::PreviewService;
pub use redirect_service::{RedirectOutcome, RedirectService};
