//! Handle-based surface for foreign bindings.

pub(crate) mod handles;
