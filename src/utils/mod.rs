//! Pure helper functions shared across layers.

pub mod crawler;
pub mod request_url;
