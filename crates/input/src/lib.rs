//! Terminal input mapping (driver-facing).
//!
//! Translates `crossterm` key events into board [`Command`](crate::types::Command)s.
//! The rules engine never sees key codes; only this crate does.

pub mod map;

pub use falltris_types as types;

pub use map::{command_for_key, should_quit};
