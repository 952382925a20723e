//! archer - animated terminal loading panel

mod cli;
mod config;
mod logging;
mod tui;

use anyhow::Context;
use archer_core::{Panel, PanelConfig};
use clap::Parser;

use crate::cli::Args;
use crate::config::AppConfig;
use crate::tui::themes::THEME_REGISTRY;
use crate::tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.list_themes {
        for theme in THEME_REGISTRY.iter() {
            println!("{:<10} {}", theme.name, theme.display_name);
        }
        return Ok(());
    }

    let mut config = AppConfig::load(args.config.as_deref())?;
    config.apply_args(&args);
    config.validate()?;
    logging::init(config.log_file.as_deref(), config.log_level())?;

    let theme = THEME_REGISTRY.get_or_default(config.theme()).clone();
    tracing::info!(theme = %theme.name, fps = config.fps(), "Starting archer");

    let panel = Panel::mount(PanelConfig::default())?;
    let mut app = App::new(panel, theme, config.fps());

    // Restores the terminal on every exit path, including panics
    let _restore = scopeguard::guard((), |()| {
        if let Err(e) = tui::terminal::restore() {
            tracing::error!(error = %e, "Failed to restore terminal");
        }
    });
    let mut terminal = tui::terminal::init().context("failed to set up terminal")?;

    app.run(&mut terminal).await
}
