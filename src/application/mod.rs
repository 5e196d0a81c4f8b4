//! Application layer: business logic and request orchestration.

pub mod services;
