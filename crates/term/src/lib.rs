//! Terminal presentation for the falling-block engine.
//!
//! Rendering happens in two steps so the interesting part stays testable:
//! [`GameView`] draws a [`BoardSnapshot`](crate::core::BoardSnapshot) into an
//! in-memory [`FrameBuffer`], and [`TerminalRenderer`] flushes that buffer to
//! the real terminal with `crossterm`. [`StatusBar`] is the status observer the
//! driver plugs into the board.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod status_bar;

pub use falltris_core as core;
pub use falltris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{kind_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use status_bar::StatusBar;
