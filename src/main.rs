use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use water_tests::config::AppConfig;
use water_tests::error::Result;
use water_tests::tui::AppState;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging (file only; the terminal is ours)
    let _log_guard = water_tests::core::logging::init_tui();
    log::info!("{} v{} starting", water_tests::NAME, water_tests::VERSION);

    let config = AppConfig::load();
    run(&config).await?;
    Ok(())
}

async fn run(config: &AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let mut app = AppState::new(config);
    let result = app.run(&mut terminal, config.tick_rate()).await;

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Event loop failed: {e}");
    }
    Ok(result?)
}
