//! Inline media for sticker panels

mod resolver;

pub(crate) use resolver::{MediaResolver, ResolvedMedia};
