//! Penlight CLI - drive the virtual glow stick from the terminal
//!
//! Loads the persisted display state, applies edits and shared URLs, and
//! re-persists after every change.

mod cli;
mod commands;
mod error;
mod fonts;
#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::apply::run_apply;
use crate::commands::common::open_store;
use crate::commands::completions::run_completions;
use crate::commands::fonts::run_fonts;
use crate::commands::palette::run_palette;
use crate::commands::preset::run_preset;
use crate::commands::set::{run_set, SetArgs};
use crate::commands::share::run_share;
use crate::commands::show::run_show;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("penlight=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let fonts = fonts::font_catalog();
    let store = open_store(cli.data_dir);

    match cli.command {
        Commands::Show { json } => run_show(json, &store, &fonts)?,
        Commands::Set {
            color,
            text,
            font,
            size,
            vertical,
            horizontal,
        } => run_set(
            SetArgs {
                color,
                text,
                font,
                size,
                vertical,
                horizontal,
            },
            &store,
            &fonts,
        )?,
        Commands::Share { base_url } => run_share(&base_url, &store, &fonts)?,
        Commands::Apply { url } => run_apply(&url, &store, &fonts)?,
        Commands::Preset { command } => run_preset(command, &store, &fonts)?,
        Commands::Fonts => run_fonts(&fonts),
        Commands::Palette => run_palette(),
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref())?,
    }

    Ok(())
}
