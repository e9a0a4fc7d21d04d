//! Terminal driver (default binary).
//!
//! Owns the clock: it issues one `tick()` per configured interval and forwards
//! key presses to the board as discrete commands. The board itself never sees
//! the terminal.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use falltris::config::{config_path, GameConfig};
use falltris::core::{Board, UniformShapes};
use falltris::input::{command_for_key, should_quit};
use falltris::term::{FrameBuffer, GameView, StatusBar, TerminalRenderer, Viewport};
use falltris::types::Command;

type Game = Board<UniformShapes, StatusBar>;

fn main() -> Result<()> {
    let config = GameConfig::load()?;
    eprintln!(
        "[Config] {} (tick {}ms, seed {}, scoring {})",
        config_path().display(),
        config.tick.as_millis(),
        config.seed,
        config.scoring.as_str()
    );

    let mut board: Game = Board::new(UniformShapes::new(config.seed), StatusBar::new())
        .with_scoring(config.scoring);
    board.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut board, config.tick);
    // Always try to restore terminal state.
    let _ = term.exit();

    eprintln!(
        "[Driver] exited with score {} after {} lines",
        board.current_score(),
        board.lines_cleared()
    );
    result
}

fn run(term: &mut TerminalRenderer, board: &mut Game, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut next_tick = Instant::now() + tick;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = board.snapshot();
        view.render_into(&snap, board.sink().text(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = command_for_key(key) {
                        if command == Command::Start {
                            board.sink_mut().reset();
                        }
                        board.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_tick {
            // Ticks are not issued while paused; the board would ignore them anyway.
            if board.is_running() {
                board.tick();
            }
            next_tick = now + tick;
        }
    }
}
