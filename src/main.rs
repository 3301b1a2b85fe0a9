//! Terminal Snake runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). The event poll timeout is the distance to the
//! nearest session timer, so the loop sleeps between ticks.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_snake::engine::{Session, StartKind};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::logging;
use tui_snake::store::{FileStore, MemoryStore, Store};
use tui_snake::term::{GameView, TerminalBell, TerminalRenderer, Viewport};
use tui_snake::Config;

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(config.log_path.as_deref(), &config.log_filter)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match config.save_dir.clone() {
        Some(dir) => run(&mut term, &config, FileStore::new(dir)),
        None => run(&mut term, &config, MemoryStore::new()),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<P: Store>(term: &mut TerminalRenderer, config: &Config, store: P) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let session_config = config.session_config();
    let (w, h) = crossterm::terminal::size().context("query terminal size")?;
    let view = GameView::new(session_config.tile_count, Viewport::new(w, h));

    let mut session = Session::start(session_config, view, TerminalBell::new(), store, now_ms());
    if session.start_kind() == StartKind::Resumed {
        info!(score = session.state().score(), "continuing saved game");
    }

    loop {
        if session.surface_mut().take_dirty() {
            term.draw(session.surface().frame())?;
        }

        let timeout = Duration::from_millis(session.next_deadline_ms(now_ms()));
        if event::poll(timeout).context("poll terminal events")? {
            match event::read().context("read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.handle_action(action, now_ms());
                    }
                }
                Event::Resize(w, h) => {
                    session.surface_mut().resize(Viewport::new(w, h));
                    term.invalidate();
                    session.redraw();
                }
                _ => {}
            }
        }

        session.update(now_ms());
    }

    session.flush();
    info!(score = session.state().score(), "quit");
    Ok(())
}
