use std::fs;
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::media::MediaResolver;
use crate::output::{output_fields_json, render_fields_table, render_page};
use crate::present::{DisplayFields, Formatter, build_fields};
use crate::stats::{load_stats, resolve_source_dir};
use crate::utils::debug_enabled;

pub(crate) struct RenderContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) formatter: Formatter,
}

/// Write to the requested file, or stdout when none was given
fn emit(content: &str, output: Option<&Path>) -> Result<(), AppError> {
    match output {
        Some(path) => fs::write(path, content).map_err(|source| AppError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

/// One render pass: fresh document load, field mapping, media lookup
fn load_fields(ctx: &RenderContext<'_>) -> Result<DisplayFields, AppError> {
    let document = load_stats(&ctx.cli.stats_path())?;

    let resolver = MediaResolver::new(resolve_source_dir(ctx.cli.source_dir.as_deref(), &document));
    if debug_enabled() {
        match resolver.root() {
            Some(root) => eprintln!("[DEBUG] Media root: {}", root.display()),
            None => eprintln!("[DEBUG] No media root, stickers will show as missing"),
        }
    }

    Ok(build_fields(&document, &ctx.formatter, &resolver))
}

pub(crate) fn handle_command(ctx: &RenderContext<'_>) -> Result<(), AppError> {
    let fields = load_fields(ctx)?;
    let output = ctx.cli.output.as_deref();

    match ctx.cli.command() {
        Commands::Render => emit(&render_page(&fields), output),
        Commands::Fields if ctx.cli.json => {
            emit(&format!("{}\n", output_fields_json(&fields)), output)
        }
        Commands::Fields => {
            // no escape codes in files
            let use_color = output.is_none() && ctx.cli.use_color();
            emit(&render_fields_table(&fields, use_color), output)
        }
    }
}
