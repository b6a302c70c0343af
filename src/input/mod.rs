//! Input shapes accepted by the engine and their resolution into items.

pub(crate) mod items;
