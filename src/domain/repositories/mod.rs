//! Repository traits defining the storage boundary.

mod link_repository;
mod stats_repository;

pub use link_repository::LinkRepository;
pub use stats_repository::StatsRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
