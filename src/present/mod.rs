//! Presentation mapping: formatting rules and display fields

mod fields;
mod format;

pub(crate) use fields::{DisplayFields, StickerPanel, build_fields};
pub(crate) use format::{Formatter, NumberFormat};
