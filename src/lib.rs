//! Falltris (workspace facade crate).
//!
//! The rules engine and its outer layers live in dedicated crates under
//! `crates/`; this package re-exports them as `falltris::{core,input,term,types}`
//! and adds the driver's [`config`].

pub mod config;

pub use falltris_core as core;
pub use falltris_input as input;
pub use falltris_term as term;
pub use falltris_types as types;
