//! Sprite bundle used to draw every slot of a frame.

pub(crate) mod set;
