use wellspring::app::App;
use wellspring::config::{AppConfig, ENV_BREATHS, ENV_CONFIG_PATH, ENV_TICK_MS};
use wellspring::error::{UiError, WellspringError};
use wellspring::logging::{self, ENV_LOG_FILTER};
use wellspring::terminal::{setup_panic_hook, TerminalManager};
use wellspring::ui;

use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!("wellspring {}", VERSION);
    println!("A terminal wellness dashboard with a guided breathing exercise.");
    println!();
    println!("USAGE:");
    println!("    wellspring [--help | --version]");
    println!();
    println!("ENVIRONMENT:");
    println!("    {:<20} Config file path (JSON)", ENV_CONFIG_PATH);
    println!("    {:<20} Milliseconds per inhale/exhale", ENV_TICK_MS);
    println!("    {:<20} Breaths per exercise", ENV_BREATHS);
    println!("    {:<20} Log filter, e.g. wellspring=debug", ENV_LOG_FILTER);
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("wellspring {}", VERSION);
        return Ok(());
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }
    if let Some(unknown) = args.first() {
        eprintln!("wellspring: unknown argument '{}'", unknown);
        eprintln!("Run 'wellspring --help' for usage.");
        std::process::exit(2);
    }

    color_eyre::install()?;

    // Restore the terminal before any panic report is printed
    setup_panic_hook();

    if let Err(err) = logging::init_logging() {
        eprintln!("Warning: logging disabled: {}", err.user_message());
    }

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(code = err.error_code(), %err, "Invalid configuration");
            eprintln!("{}", err.user_message());
            return Err(err).wrap_err("Failed to load configuration");
        }
    };
    tracing::info!(?config, "Configuration loaded");

    let runtime = tokio::runtime::Runtime::new().wrap_err("Failed to start tokio runtime")?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let mut app = App::new(config);

    let mut manager = TerminalManager::new().wrap_err("Failed to set up the terminal")?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    tracing::info!("Wellspring exiting");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    // The loop owns the receiver; the app keeps the sender for timers.
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    let frame_tick = app.config.frame_tick();

    loop {
        if app.needs_redraw {
            terminal
                .draw(|f| ui::render(f, &*app))
                .map_err(|e| UiError::RenderFailed {
                    component: "frame".to_string(),
                    message: e.to_string(),
                })
                .map_err(WellspringError::from)?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(frame_tick) => {
                app.tick();
            }

            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                Some(Ok(Event::Resize(..))) => app.mark_dirty(),
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    return Err(err).wrap_err("Failed to read terminal event");
                }
                None => {
                    tracing::info!("Terminal event stream ended");
                    return Ok(());
                }
            },

            message = message_rx.recv() => match message {
                Some(message) => app.handle_message(message),
                None => return Err(WellspringError::from(UiError::ChannelClosed).into()),
            },
        }
    }
}
