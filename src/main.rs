mod app;
mod cli;
mod config;
mod consts;
mod error;
mod media;
mod output;
mod present;
mod stats;
mod utils;

use clap::Parser;

use app::{RenderContext, handle_command};
use cli::Cli;
use config::Config;
use error::AppError;
use present::{Formatter, NumberFormat};
use utils::{Timezone, set_debug};

fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;

    let ctx = RenderContext {
        cli,
        formatter: Formatter::new(number_format, timezone),
    };
    handle_command(&ctx)
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load(!cli.debug);
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
