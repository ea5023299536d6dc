pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod logging;
pub mod report;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use app::events::{AppEvent, spawn_input_task};
use app::state::{AppMode, AppState};
use cli::Cli;
use config::AppConfig;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use data::lookup::WeatherService;
use futures::StreamExt;
use logging::LogTarget;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let config = AppConfig::from_cli(&cli);

    if cli.one_shot {
        logging::init(LogTarget::Stderr)?;
        return run_one_shot(&config).await;
    }

    match config.log_path() {
        Some(path) => logging::init(LogTarget::File(&path))?,
        None => logging::init(LogTarget::Discard)?,
    }

    let mut session = TerminalSession::enter()?;
    event_loop(&mut session.terminal, config).await
}

async fn run_one_shot(config: &AppConfig) -> Result<()> {
    let city = config
        .initial_city
        .as_deref()
        .context("--one-shot needs a city to look up")?;
    let view = WeatherService::new(&config.endpoints).lookup(city).await?;
    print!("{}", report::render_report(&view, config.icon_mode));
    Ok(())
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode and the alternate screen for the lifetime of the value.
struct TerminalSession {
    terminal: Tui,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic| {
            leave_screen(&mut io::stdout());
            previous_hook(panic);
        }));

        enable_raw_mode().context("enabling raw mode failed")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            leave_screen(&mut stdout);
            return Err(err).context("entering the alternate screen failed");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        leave_screen(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

fn leave_screen(out: &mut impl io::Write) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen);
}

/// Handles one event at a time and redraws after each, until quit.
async fn event_loop(terminal: &mut Tui, config: AppConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::from_config(config);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        let event = tokio::select! {
            Some(input) = input_stream.next() => AppEvent::Input(input),
            Some(event) = rx.recv() => event,
            else => break,
        };
        app.handle_event(event, &tx).await?;

        if app.mode == AppMode::Quit {
            app.running = false;
        } else {
            terminal.draw(|frame| ui::render(frame, &app))?;
        }
    }

    Ok(())
}
