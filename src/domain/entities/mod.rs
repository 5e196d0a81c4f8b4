//! Core business entities.

mod click_stat;
mod open_graph;
mod short_link;

pub use click_stat::ClickStat;
pub use open_graph::{OpenGraphImage, OpenGraphInfo, OpenGraphVideo};
pub use short_link::{Schedule, ShortLink};
