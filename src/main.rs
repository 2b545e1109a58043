use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use qnachat::app::App;
use qnachat::config::{load_config, resolve_settings};
use qnachat::error::AppError;
use qnachat::qna::QnaClient;
use qnachat::worker::spawn_worker;

/// Event poll interval while an answer is loading or being revealed
const BUSY_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);

#[cfg(debug_assertions)]
const DEBUG_LOG_FILE: &str = "qnachat-debug.log";

/// Chat with a hosted QnA knowledge base from the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file to use instead of ~/.config/qnachat/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show answers at once instead of revealing them character by character
    #[arg(long)]
    no_reveal: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_debug_logger();

    // Configuration errors abort before the terminal is touched
    let mut app = bootstrap(&args)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    let result = match execute!(stdout(), EnableMouseCapture, EnableBracketedPaste) {
        Ok(()) => run(&mut terminal, &mut app),
        Err(e) => Err(e.into()),
    };

    let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();

    result
}

/// Load configuration, build the client and start the worker thread
fn bootstrap(args: &Args) -> Result<App, AppError> {
    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(&config)?;
    log::debug!("Using knowledge base settings: {:?}", settings);

    let client = QnaClient::new(settings)?;

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(client, request_rx, response_tx)?;

    let mut app = App::new(&config, !args.no_reveal);
    app.set_channels(request_tx, response_rx);
    Ok(app)
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.poll_responses(now);
        app.tick(now);

        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit() {
            break;
        }

        let timeout = if app.needs_frequent_redraw() {
            BUSY_POLL
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Send log output to a file in the temp directory
///
/// The terminal belongs to the chat screen, so logs cannot go to stderr.
#[cfg(debug_assertions)]
fn init_debug_logger() {
    use std::io::Write;

    let path = std::env::temp_dir().join(DEBUG_LOG_FILE);
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
