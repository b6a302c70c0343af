//! Frame sinks.
//!
//! Sinks consume rendered frames in order and are used by `TrashState::render_range`.

/// Generic frame sink trait and built-in sinks.
pub mod sink;
