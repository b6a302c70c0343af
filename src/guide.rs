//! # tguy guide
//!
//! ## Items
//!
//! Items are the things thrown away, left to right. A [`TrashInput::Text`](crate::TrashInput)
//! is split into one item per Unicode scalar value, so `"añ"` is two items and a base letter
//! followed by a combining accent is also two items. Grapheme clusters are not joined; pass
//! explicit tokens ([`TrashInput::Items`](crate::TrashInput)) when several code points must
//! travel together.
//!
//! ## Field and frames
//!
//! The field has one slot per item plus the trash can, which is always last. There is one
//! frame per item. On frame `f`:
//!
//! | slots      | drawn as                          |
//! |------------|-----------------------------------|
//! | `0 .. f`   | the space sprite (collected)      |
//! | `f`        | the item, then the mover sprite   |
//! | `f+1 .. N` | the items, untouched              |
//! | can        | the can sprite                    |
//!
//! Consecutive slots are joined by `spacing` copies of the space sprite; `spacing` is at most
//! [`MAX_SPACING`](crate::MAX_SPACING). An empty explicit item still takes a slot and a frame,
//! it just draws nothing.
//!
//! The mover is the right-facing sprite while the item is on its way to the can. On the last
//! frame the item has reached the slot next to the can and the figure is drawn with the
//! left-facing sprite, turned back after the drop.
//!
//! ## Sprites
//!
//! | sprite  | default        |
//! |---------|----------------|
//! | `space` | `" "`          |
//! | `can`   | `"🗑"`          |
//! | `right` | `"(> ^_^)>"`   |
//! | `left`  | `"<(^_^ <)"`   |
//!
//! Overrides must be non-empty. They are resolved once in
//! [`SpriteSet::new`](crate::SpriteSet::new).
//!
//! ## Buffer sizing
//!
//! Construction computes an upper bound for every frame:
//!
//! ```text
//! Σ item bytes + can + space × (N − 1) + max(right, left) + spacing × space × N
//! ```
//!
//! and reserves it once. [`TrashState::current_str`](crate::TrashState::current_str) renders
//! into that buffer without reallocating.
//!
//! ## Streaming
//!
//! [`TrashState::render_range`](crate::TrashState::render_range) pushes a frame range into a
//! [`FrameSink`](crate::FrameSink). [`WriterSink`](crate::WriterSink) prints frames one per line
//! or redraws them in place; [`InMemorySink`](crate::InMemorySink) keeps them for inspection.
//!
//! ## Hosts
//!
//! [`HandleTable`](crate::HandleTable) exposes the create / set-frame / get-string /
//! frames-count / free contract with generational handles, so a double free is reported
//! instead of touching another engine.
