//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::DEFAULT_STATS_PATH;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "tgrecap")]
#[command(about = "Render a year-in-review page from Telegram chat statistics", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Statistics JSON produced by the export analyzer [default: ../output.json]
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) stats: Option<PathBuf>,

    /// Root of the Telegram export holding stickers and photos
    /// (overrides TGRECAP_SOURCE_DIR and the document's source_dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) source_dir: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,

    /// Print display fields as JSON (fields command)
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub(crate) color: ColorMode,

    /// Show debug information on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Timezone for message times (e.g., "Europe/Moscow", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Locale for number formatting (e.g., "ru", "en", "de")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.stats.is_none() {
            self.stats = config.stats_path.clone();
        }
        if self.source_dir.is_none() {
            self.source_dir = config.source_dir.clone();
        }
        if self.output.is_none() {
            self.output = config.output.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn command(&self) -> Commands {
        self.command.unwrap_or_default()
    }

    pub(crate) fn stats_path(&self) -> PathBuf {
        self.stats
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_PATH))
    }

    pub(crate) fn use_color(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tgrecap").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_render_and_default_path() {
        let cli = parse(&[]);
        assert_eq!(cli.command(), Commands::Render);
        assert_eq!(cli.stats_path(), PathBuf::from("../output.json"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["fields", "--json", "--stats", "/tmp/s.json"]);
        assert_eq!(cli.command(), Commands::Fields);
        assert!(cli.json);
        assert_eq!(cli.stats_path(), PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn config_fills_unset_values_only() {
        let config: Config = toml::from_str(
            r#"
            stats_path = "/cfg/output.json"
            source_dir = "/cfg/export"
            locale = "en"
            debug = true
            color = "never"
            "#,
        )
        .unwrap();

        let cli = parse(&["--locale", "de"]).with_config(&config);
        assert_eq!(cli.stats_path(), PathBuf::from("/cfg/output.json"));
        assert_eq!(cli.source_dir, Some(PathBuf::from("/cfg/export")));
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert!(cli.debug);
        assert!(!cli.use_color());
    }
}
