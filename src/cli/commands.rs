//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Render the recap page as HTML (default)
    #[default]
    Render,
    /// Show the formatted display fields
    Fields,
}
