//! Terminal stacker runner (default binary).
//!
//! One fixed-rate loop drives the whole game: render, sample input until
//! the tick deadline, then advance the session. Input takes effect in the
//! tick that observed it; the initials prompt is just another phase of the
//! same loop, not a nested one.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_stacker::core::{GameContext, GameSession};
use tui_stacker::input::{handle_key_event, handle_text_entry_key, should_quit};
use tui_stacker::term::{GameView, TerminalRenderer, Viewport};
use tui_stacker::types::{Phase, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // High score and leaderboard live for the whole process; sessions
    // come and go across restarts.
    let mut ctx = GameContext::new();
    let mut session = GameSession::new();

    let view = GameView::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, &ctx, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    let action = match session.phase() {
                        Phase::TextEntry => handle_text_entry_key(key),
                        _ => handle_key_event(key),
                    };
                    if let Some(action) = action {
                        session.apply_action(action, &mut ctx);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let dt = last_tick.elapsed().as_secs_f32();
            last_tick = Instant::now();
            session.tick(dt, &ctx);
        }
    }
}
