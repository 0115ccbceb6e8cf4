//! Main entry point for turminal.
//!
//! Initializes logging and configuration, takes over the terminal, runs the
//! event loop, and restores the terminal on the way out.

use turminal::utils;
use turminal::{App, Config};

use anyhow::{Context, Result};

/// Restores the terminal when dropped, including on early `?` returns.
struct RestoreTerminal;

impl Drop for RestoreTerminal {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before anything else; the guard flushes on exit
    let _log_guard = utils::logger::init_logging();

    let config = Config::load().context("Failed to load configuration")?;

    let mut terminal = ratatui::init();
    let _restore = RestoreTerminal;

    let mut app = App::new(config);
    // draw 1st frame
    app.draw(&mut terminal)?;
    app.run(&mut terminal).await
}
