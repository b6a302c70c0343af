//! The frame engine.

pub(crate) mod field;
pub(crate) mod range;
pub(crate) mod trash_state;
