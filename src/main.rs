use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::style::Print;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use wsalert::config::{self, Config, ConfigResult};
use wsalert::{App, websocket};

/// Display WebSocket alerts one at a time
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Display alerts from a WebSocket stream one at a time in the terminal"
)]
struct Args {
    /// WebSocket endpoint to subscribe to (default: ws://127.0.0.1:9000)
    #[arg(long)]
    url: Option<String>,

    /// How long each alert stays on screen, in milliseconds
    #[arg(long)]
    dwell_ms: Option<u64>,

    /// UI tick interval in milliseconds (clamped to 100-1000)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Text sent back to the server after every received alert
    #[arg(long)]
    ack: Option<String>,

    /// Config file to use instead of ~/.config/wsalert/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Command-line values win over the config file
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.connection.url = url.clone();
        }
        if let Some(dwell_ms) = self.dwell_ms {
            config.display.dwell_ms = dwell_ms;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.display.tick_ms = tick_ms;
        }
        if let Some(ack) = &self.ack {
            config.connection.ack_message = Some(ack.clone());
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/wsalert-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    args.apply_overrides(&mut config);

    // Reject bad endpoints before touching the terminal
    config.connection.parsed_url()?;

    let connection = websocket::spawn_connection(&config.connection)?;

    let mut app = App::new(&config);
    app.attach_connection(connection);
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }

    let terminal = init_terminal()?;
    let result = run(terminal, &mut app);
    restore_terminal()?;

    app.shutdown();
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== WSALERT DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/wsalert-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== WSALERT DEBUG SESSION STARTED ===");
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        if app.take_bell() {
            execute!(stdout(), Print('\u{7}'))?;
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
