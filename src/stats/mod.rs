//! Statistics document produced by the chat export analyzer

mod loader;
mod types;

pub(crate) use loader::{load_stats, resolve_source_dir};
pub(crate) use types::{MessageSnapshot, MessagesStats, MostUsedSticker, StatisticsDocument};

#[cfg(test)]
pub(crate) use loader::parse_stats;
