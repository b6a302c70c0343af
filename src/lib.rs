//! tguy renders the "trash guy" text animation.
//!
//! A line of items is cleared one frame at a time: on frame `f` the figure carries item `f`
//! toward the trash can at the right end of the line, and every item before it has already
//! been thrown away.
//!
//! ```text
//! a(> ^_^)> b c 🗑
//!   b(> ^_^)> c 🗑
//!     c<(^_^ <) 🗑
//! ```
//!
//! # Pipeline overview
//!
//! 1. **Input**: a string (one item per code point) or explicit tokens, as [`TrashInput`]
//! 2. **Construct**: [`TrashState::new`] validates, copies the items and sizes the frame buffer
//! 3. **Render**: [`TrashState::render`] / [`TrashState::current_str`] for single frames, or
//!    [`TrashState::render_range`] to stream frames into a [`FrameSink`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure rendering**: a frame is a function of the items, the sprites and the index.
//! - **Sized up front**: no render ever needs more than [`TrashState::max_frame_len`] bytes.
//!
//! See [`crate::guide`] for a longer walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod binding;
mod config;
mod encode;
mod foundation;
mod input;
mod sprites;
mod state;

/// Standalone documentation for tguy's concepts.
pub mod guide;

pub use binding::handles::{Handle, HandleTable, RawSprites};
pub use config::model::{DEFAULT_SPACING, InputDef, TrashConfig};
pub use encode::sink::{FrameLayout, FrameSink, InMemorySink, SinkConfig, WriterSink};
pub use foundation::core::{FrameIndex, FrameRange};
pub use foundation::error::{TrashError, TrashResult};
pub use input::items::{TrashInput, split_code_points};
pub use sprites::set::{
    DEFAULT_CAN, DEFAULT_LEFT, DEFAULT_RIGHT, DEFAULT_SPACE, MAX_SPACING, SpriteOverrides,
    SpriteSet,
};
pub use state::field::{Field, Mover, Slot};
pub use state::range::{RenderOpts, RenderStats};
pub use state::trash_state::TrashState;
