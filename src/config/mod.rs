//! JSON configuration documents.

pub(crate) mod model;
