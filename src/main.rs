use std::{
    env,
    io::{self, Stdout},
    path::PathBuf,
    time::Duration,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use ratatui::{prelude::CrosstermBackend, Terminal};
use task_tui::{ui, App};

const LOG_FILE_BASENAME: &str = "task-tui";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "task-tui", version, about = "Single-screen task list for the terminal")]
struct Cli {
    /// Directory for log files, defaults to ~/.task-tui/logs
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Input poll interval in milliseconds
    #[arg(long, default_value_t = 250)]
    tick_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // The handle must stay alive for the process, dropping it stops the logger.
    let _logger = init_logging(&cli)?;
    info!("event=app_start version={}", env!("CARGO_PKG_VERSION"));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, App::new(), Duration::from_millis(cli.tick_ms));
    restore_terminal(&mut terminal)?;

    info!("event=app_exit");
    result
}

fn init_logging(cli: &Cli) -> Result<LoggerHandle> {
    let log_dir = match &cli.log_dir {
        Some(dir) => dir.clone(),
        None => default_log_dir()?,
    };
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let logger = Logger::try_with_str(&cli.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()?;
    Ok(logger)
}

fn default_log_dir() -> Result<PathBuf> {
    let home_dir: PathBuf = match env::var_os("HOME") {
        Some(home) => home.into(),
        None => bail!("could not determine home directory"),
    };
    Ok(home_dir.join(".task-tui/logs"))
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(terminal.show_cursor()?)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
