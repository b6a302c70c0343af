use std::io::Write;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TrashError, TrashResult};
use crate::input::items::TrashInput;
use crate::sprites::set::{SpriteOverrides, SpriteSet};
use crate::state::field::{Field, Mover, Slot};

/// The frame engine: items, sprites and the current frame.
///
/// Construction validates and pre-scans everything; afterwards `frame` is the only state that
/// changes. Rendering is a pure function of the field, the sprites and the requested index, so
/// `&self` renders may run concurrently.
#[derive(Debug)]
pub struct TrashState {
    field: Field,
    sprites: SpriteSet,
    frame: FrameIndex,
    max_frame_len: usize,
    buf: String,
}

impl TrashState {
    /// Build an engine from input items, spacing and sprite overrides.
    ///
    /// Fails with [`TrashError::InvalidInput`] on empty or malformed input and with
    /// [`TrashError::OutOfMemory`] when the frame buffer cannot be sized up front.
    #[tracing::instrument(skip(input, overrides))]
    pub fn new<'a>(
        input: impl Into<TrashInput<'a>>,
        spacing: u32,
        overrides: SpriteOverrides,
    ) -> TrashResult<Self> {
        let sprites = SpriteSet::new(overrides, spacing)?;
        let items = input.into().into_items()?;
        Self::from_parts(items, sprites)
    }

    /// Build an engine with the default sprites.
    pub fn with_defaults<'a>(input: impl Into<TrashInput<'a>>, spacing: u32) -> TrashResult<Self> {
        Self::new(input, spacing, SpriteOverrides::default())
    }

    pub(crate) fn from_parts(items: Vec<Box<str>>, sprites: SpriteSet) -> TrashResult<Self> {
        if items.is_empty() {
            return Err(TrashError::invalid_input("nothing to animate: no items"));
        }
        let field = Field::new(items);
        let max_frame_len = field.max_frame_len(&sprites)?;

        let mut buf = String::new();
        buf.try_reserve_exact(max_frame_len)?;

        tracing::debug!(
            items = field.item_count(),
            slots = field.slot_count(),
            spacing = sprites.spacing(),
            max_frame_len,
            "trash state ready"
        );

        Ok(Self {
            field,
            sprites,
            frame: FrameIndex(0),
            max_frame_len,
            buf,
        })
    }

    /// Select the frame used by [`Self::current_str`] and index-less renders.
    pub fn set_frame(&mut self, frame: FrameIndex) -> TrashResult<()> {
        self.frame = frame.check(self.frame_count())?;
        Ok(())
    }

    /// Select the current frame from a signed host index.
    ///
    /// Negative and past-the-end indices both fail with [`TrashError::IndexOutOfRange`] against
    /// this engine's frame count.
    pub fn set_frame_i64(&mut self, frame: i64) -> TrashResult<()> {
        let frames = self.frame_count();
        let idx = FrameIndex::try_from(frame)
            .map_err(|_| TrashError::index_out_of_range(frame, frames))?;
        self.set_frame(idx)
    }

    /// Currently selected frame.
    pub fn current_frame(&self) -> FrameIndex {
        self.frame
    }

    /// Number of frames: one per item.
    pub fn frame_count(&self) -> u64 {
        self.field.item_count() as u64
    }

    /// Largest byte length any frame of this engine can render to.
    pub fn max_frame_len(&self) -> usize {
        self.max_frame_len
    }

    /// Buffer size a C-style host needs for one frame, nul terminator included.
    pub fn buffer_size(&self) -> usize {
        self.max_frame_len + 1
    }

    /// Items in input order.
    pub fn items(&self) -> &[Box<str>] {
        self.field.items()
    }

    /// Resolved sprites.
    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    /// Field layout backing this engine.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Render `frame`, or the current frame when `None`, into a new string.
    ///
    /// Never touches the stored frame.
    pub fn render(&self, frame: Option<FrameIndex>) -> TrashResult<String> {
        let f = self.resolve(frame)?;
        self.render_owned(f)
    }

    /// Render the current frame into the engine's own buffer.
    ///
    /// The buffer was reserved at construction, so this never reallocates.
    pub fn current_str(&mut self) -> &str {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        self.render_into(self.frame.0 as usize, &mut buf);
        self.buf = buf;
        &self.buf
    }

    /// Rendered pieces of a frame in output order, separators included.
    pub fn slots(&self, frame: Option<FrameIndex>) -> TrashResult<Vec<&str>> {
        let f = self.resolve(frame)?;
        let mut out = Vec::new();
        out.try_reserve_exact(self.field.slot_count() * 3)?;
        self.for_each_piece(f, |piece| out.push(piece));
        Ok(out)
    }

    /// Write a frame without a trailing newline; returns bytes written.
    pub fn write_frame<W: Write>(&self, frame: Option<FrameIndex>, w: &mut W) -> TrashResult<usize> {
        let f = self.resolve(frame)?;
        let mut written = 0usize;
        let mut res = Ok(());
        self.for_each_piece(f, |piece| {
            if res.is_ok() {
                res = w.write_all(piece.as_bytes());
                written += piece.len();
            }
        });
        res?;
        Ok(written)
    }

    /// Every frame in order.
    pub fn frames(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.field.item_count()).map(move |f| {
            let mut s = String::with_capacity(self.max_frame_len);
            self.render_into(f, &mut s);
            s
        })
    }

    /// Release the engine and everything it owns.
    pub fn release(self) {
        tracing::trace!(frames = self.frame_count(), "trash state released");
    }

    pub(crate) fn render_owned(&self, frame: usize) -> TrashResult<String> {
        let mut out = String::new();
        out.try_reserve_exact(self.max_frame_len)?;
        self.render_into(frame, &mut out);
        Ok(out)
    }

    fn resolve(&self, frame: Option<FrameIndex>) -> TrashResult<usize> {
        let f = frame.unwrap_or(self.frame).check(self.frame_count())?;
        Ok(f.0 as usize)
    }

    pub(crate) fn render_into(&self, frame: usize, out: &mut String) {
        self.for_each_piece(frame, |piece| out.push_str(piece));
        debug_assert!(out.len() <= self.max_frame_len);
        tracing::trace!(frame, len = out.len(), "rendered frame");
    }

    fn for_each_piece<'s>(&'s self, frame: usize, mut f: impl FnMut(&'s str)) {
        let separator = self.sprites.separator();
        for (i, slot) in self.field.slots_at(frame).enumerate() {
            if i > 0 && !separator.is_empty() {
                f(separator);
            }
            match slot {
                Slot::Empty => f(self.sprites.space()),
                Slot::Item(n) => f(&self.field.items()[n]),
                Slot::Carried(n, mover) => {
                    f(&self.field.items()[n]);
                    f(match mover {
                        Mover::Right => self.sprites.right(),
                        Mover::Left => self.sprites.left(),
                    });
                }
                Slot::Receptacle => f(self.sprites.can()),
            }
        }
    }
}

impl std::fmt::Display for TrashState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut res = Ok(());
        self.for_each_piece(self.frame.0 as usize, |piece| {
            if res.is_ok() {
                res = f.write_str(piece);
            }
        });
        res
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/trash_state.rs"]
mod tests;
