mod app;
mod input;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use todue::config::{config_file, write_default_config, AppConfig};
use todue::domain::{CalendarDate, ClockStyle, DeadlineFilter, TaskRepository, WeekRule};
use todue::logging::{init_logging, log_dir};

#[derive(Parser)]
#[command(name = "todue")]
#[command(about = "A terminal to-do list with deadline filters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path. Defaults to <config dir>/todue/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Filter to start with: all, today, this-week or completed
    #[arg(short, long, value_parser = parse_filter)]
    filter: Option<DeadlineFilter>,

    /// Week numbering for the "this week" filter: legacy or iso8601
    #[arg(long, value_parser = parse_week_rule)]
    week_rule: Option<WeekRule>,

    /// 12-hour display convention: standard or legacy
    #[arg(long, value_parser = parse_clock)]
    clock: Option<ClockStyle>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file with default settings
    Init,
}

fn parse_filter(value: &str) -> Result<DeadlineFilter, String> {
    DeadlineFilter::from_name(value)
        .ok_or_else(|| format!("unknown filter `{value}` (expected all, today, this-week, completed)"))
}

fn parse_week_rule(value: &str) -> Result<WeekRule, String> {
    WeekRule::from_name(value)
        .ok_or_else(|| format!("unknown week rule `{value}` (expected legacy, iso8601)"))
}

fn parse_clock(value: &str) -> Result<ClockStyle, String> {
    ClockStyle::from_name(value)
        .ok_or_else(|| format!("unknown clock style `{value}` (expected standard, legacy)"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let path = match cli.config {
                Some(path) => path,
                None => config_file()?,
            };
            let written = write_default_config(&path)?;
            println!("Wrote default config: {}", written.display());
            Ok(())
        }
        None => {
            let mut config = AppConfig::load(cli.config.as_deref())?;
            if let Some(filter) = cli.filter {
                config.default_filter = filter;
            }
            if let Some(rule) = cli.week_rule {
                config.week_rule = rule;
            }
            if let Some(clock) = cli.clock {
                config.clock = clock;
            }
            run_tui(config)
        }
    }
}

fn run_tui(config: AppConfig) -> Result<()> {
    let _log_guard = init_logging(&config.log_level, &log_dir()?)?;
    tracing::info!(
        filter = config.default_filter.label(),
        week_rule = config.week_rule.name(),
        clock = config.clock.name(),
        "starting todue"
    );

    let mut app = AppState::new(
        TaskRepository::new(),
        config.default_filter,
        config.week_rule,
        config.clock,
        CalendarDate::today(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ticker::tick_duration(config.tick_ms));
    let restored = restore_terminal(&mut terminal);
    tracing::info!(tasks = app.repo.len(), "exiting todue");

    shutdown_result(result, restored)
}

/// Log both outcomes, then report the event loop error ahead of a restore error
fn shutdown_result(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &result {
        tracing::error!("event loop failed: {err:#}");
    }
    if let Err(err) = &restored {
        tracing::error!("failed to restore terminal: {err:#}");
    }
    result.and(restored)
}

/// Leave raw mode and the alternate screen. Every step runs even if an
/// earlier one fails; the first error is returned.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Pick up a date change at midnight
        app.tick();
    }
}
