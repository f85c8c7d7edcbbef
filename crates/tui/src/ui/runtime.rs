//! Runtime: event loop and input routing for the shell.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop over terminal input, a ticker and Ctrl+C.
//! - Route input to `MainView` and execute the returned `Effect`s.
//! - Draw only when `App` marks itself dirty.
//!
//! Smart ticking: a fast interval (250 ms) while toasts are on screen so they
//! expire on time, a long interval (5 s) otherwise.
//!
//! Entry Point
//! - `run_app(config)` is called from `lib::run` and performs setup, event
//!   processing and teardown. The terminal is restored on every exit path.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use horizon_types::{Effect, Msg};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, Interval, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::ShellConfig;
use crate::app::{App, SharedCtx, initial_route, restore_identity};
use crate::cmd;
use crate::router::Router;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme::{self, LoadedTheme, catalog};

const FAST_TICK: Duration = Duration::from_millis(250);
const IDLE_TICK: Duration = Duration::from_millis(5000);

type ShellTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Spawn a blocking input task that reads terminal events and forwards them
/// over a Tokio channel.
///
/// Keeping `poll()` and `read()` on the same OS thread avoids lost or delayed
/// events in some terminals.
fn spawn_input_task() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    tokio::task::spawn_blocking(move || {
        let poll_interval = Duration::from_millis(50);
        loop {
            match event::poll(poll_interval) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                }
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if sender.blocking_send(event).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!("Failed to read event: {}", error);
                        break;
                    }
                },
                Err(error) => {
                    warn!("Failed to poll events: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<ShellTerminal> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut ShellTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Rebuilds focus and draws a frame.
fn render(terminal: &mut ShellTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    app.refresh_focus();
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            app.mark_dirty();
            main_view.handle_key_events(app, key_event)
        }
        Event::Mouse(mouse_event) => {
            if mouse_event.kind != MouseEventKind::Moved {
                app.mark_dirty();
            }
            main_view.handle_mouse_events(app, mouse_event)
        }
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

fn new_ticker(period: Duration) -> Interval {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Resolves theme, identity and initial route into a ready `App`.
fn build_app(config: &ShellConfig, area: Rect) -> App {
    let requested_theme = config.theme.as_deref().and_then(catalog::resolve);
    let loaded = match requested_theme {
        Some(definition) => {
            if let Err(error) = config.preferences.set_preferred_theme(Some(definition.id.to_string())) {
                warn!(error = %error, "Failed to persist theme preference");
            }
            LoadedTheme::from_definition(definition)
        }
        None => theme::load(config.preferences.preferred_theme().as_deref()),
    };

    let identity = restore_identity(config.session_store.as_ref());
    let start_route = config.preferences.start_route();
    let route = initial_route(config.route.as_deref(), start_route.as_deref(), identity.is_some());
    info!(
        route = %route,
        theme = loaded.definition.id,
        backend = config.session_store.backend().as_str(),
        signed_in = identity.is_some(),
        "Starting shell"
    );

    let ctx = SharedCtx {
        theme: loaded.theme,
        theme_id: loaded.definition.id,
        session_store: config.session_store.clone(),
        identity,
    };
    App::new(ctx, &route, area)
}

async fn event_loop(terminal: &mut ShellTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_task();
    let mut current_interval = IDLE_TICK;
    let mut ticker = new_ticker(current_interval);

    loop {
        if app.take_dirty() {
            render(terminal, app, main_view)?;
        }
        if app.should_quit {
            break;
        }

        let target_interval = if app.toasts.is_empty() { IDLE_TICK } else { FAST_TICK };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = new_ticker(current_interval);
        }

        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = &event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let effects = handle_input_event(app, main_view, event);
                cmd::run_from_effects(app, effects);
            }
            _ = ticker.tick() => {
                let effects = main_view.handle_message(app, &Msg::Tick);
                cmd::run_from_effects(app, effects);
            }
            _ = signal::ctrl_c() => break,
        }
    }
    Ok(())
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event loop
/// and performs cleanup on exit.
pub async fn run_app(config: ShellConfig) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let size = match terminal.size() {
        Ok(size) => size,
        Err(error) => {
            cleanup_terminal(&mut terminal)?;
            return Err(error).context("read terminal size");
        }
    };

    let mut app = build_app(&config, Rect::new(0, 0, size.width, size.height));
    let mut main_view = MainView::default();

    let result = event_loop(&mut terminal, &mut app, &mut main_view).await;
    let cleanup = cleanup_terminal(&mut terminal);

    if let Err(error) = config.preferences.set_start_route(Some(app.router.current_route().to_string())) {
        warn!(error = %error, "Failed to persist start route");
    }
    info!(route = app.router.current_route(), "Shell exited");

    result.and(cleanup)
}
