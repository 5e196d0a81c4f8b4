//! Infrastructure layer: database and filesystem integrations.

pub mod assets;
pub mod persistence;
