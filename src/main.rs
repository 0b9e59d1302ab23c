//! Invite TUI - a terminal invitation for Matteo Adam's christening
//!
//! A Ratatui-based TUI showing the event details, godparent lists and photo
//! gallery, with an RSVP form, background music and a shareable link.

mod app;
mod audio;
mod config;
mod error;
mod platform;
mod rsvp;
mod share;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::InviteConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rsvp::SubmissionStatus;
use state::Invitation;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

/// Terminal invitation to Matteo Adam's christening
#[derive(Parser, Debug)]
#[command(name = "invite-tui", version, about)]
struct Args {
    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file replacing the built-in invitation content
    #[arg(short, long)]
    invitation: Option<PathBuf>,

    /// Skip the intro animation
    #[arg(long)]
    no_intro: bool,

    /// Write the current configuration to disk and exit
    #[arg(long)]
    init_config: bool,
}

/// Send logs to a file in the data dir; the alternate screen owns stdout/stderr
fn init_logging() {
    let writer = InviteConfig::log_dir()
        .and_then(|dir| {
            fs::create_dir_all(&dir).ok()?;
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("invite-tui.log"))
                .ok()
        })
        .map(|file| BoxMakeWriter::new(Mutex::new(file)))
        .unwrap_or_else(|| BoxMakeWriter::new(io::stderr));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invite_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
}

fn load_config(args: &Args) -> Result<InviteConfig> {
    let mut config = match &args.config {
        Some(path) => InviteConfig::load_from(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => InviteConfig::load().context("reading config")?,
    };
    if args.no_intro {
        config.show_intro = Some(false);
    }
    if args.invitation.is_some() {
        config.invitation_path = args.invitation.clone();
    }
    Ok(config)
}

fn load_invitation(config: &InviteConfig) -> Result<Invitation> {
    match &config.invitation_path {
        Some(path) => Invitation::load(path)
            .with_context(|| format!("loading invitation {}", path.display())),
        None => Ok(Invitation::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let config = load_config(&args)?;

    if args.init_config {
        let written = match &args.config {
            Some(path) => {
                config.save_to(path)?;
                Some(path.clone())
            }
            None => config.save()?,
        };
        match written {
            Some(path) => println!("Wrote {}", path.display()),
            None => println!("No config directory available"),
        }
        return Ok(());
    }

    let invitation = load_invitation(&config)?;
    tracing::info!(honoree = %invitation.honoree, "starting invitation");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config, invitation);
    let result = run_app(&mut terminal, &mut app).await;

    // Stop music and any other child processes before leaving
    drop(app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("exiting with error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Fast polling (16ms = ~60fps) while animating or waiting on a submission
        let busy = app.in_intro() || app.rsvp.status() == SubmissionStatus::Pending;
        let poll_duration = if busy {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        // Let the submission task make progress between frames
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
