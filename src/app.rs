//! Interactive terminal loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_linkup::core::{GameSession, GameSnapshot, MonotonicClock, SessionConfig};
use tui_linkup::input::{handle_key_event, handle_mouse_event, should_quit, Cursor};
use tui_linkup::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_linkup::types::{GameAction, Phase, TICK_MS};

pub fn run(config: SessionConfig) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run_loop(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run_loop(term: &mut TerminalRenderer, config: SessionConfig) -> Result<()> {
    let mut session = GameSession::try_new(config, MonotonicClock::new())?;
    info!(seed = config.seed, size = config.board_size, "session created");

    let view = GameView::default();
    let mut cursor = Cursor::new(session.board().size());
    let mut snap = GameSnapshot::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        let cursor_pos = (snap.phase == Phase::Playing).then(|| cursor.pos());
        view.render_into_with_cursor(&snap, cursor_pos, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = session.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_key_action(&mut session, &mut cursor, action);
                    }
                }
                Event::Mouse(mouse) => {
                    let size = session.board().size();
                    let layout = view.layout(size, viewport);
                    if let Some(pos) = handle_mouse_event(mouse, layout, size) {
                        cursor.set(pos);
                        let outcome = session.handle_click(pos);
                        debug!(?pos, ?outcome, "mouse select");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }
}

fn apply_key_action(session: &mut GameSession, cursor: &mut Cursor, action: GameAction) {
    if cursor.apply(action) {
        return;
    }

    match (action, session.phase()) {
        (GameAction::Select, Phase::Menu) => {
            session.apply_action(GameAction::Start);
            cursor.resize(session.board().size());
        }
        (GameAction::Select, Phase::Playing) => {
            let outcome = session.handle_click(cursor.pos());
            debug!(pos = ?cursor.pos(), ?outcome, "key select");
        }
        _ => {
            session.apply_action(action);
        }
    }
}
