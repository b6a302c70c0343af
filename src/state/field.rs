use crate::foundation::error::{TrashError, TrashResult};
use crate::sprites::set::SpriteSet;

/// Which mover sprite accompanies the carried item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mover {
    /// Carrying toward the receptacle.
    Right,
    /// Turned back after the last drop.
    Left,
}

/// Semantic content of one slot in a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Already collected; drawn with the space sprite.
    Empty,
    /// Item `n`, not yet visited.
    Item(usize),
    /// Item `n` together with the mover sprite.
    Carried(usize, Mover),
    /// The trash can. Always the last slot.
    Receptacle,
}

/// Ordered items plus the trailing receptacle slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    items: Vec<Box<str>>,
}

impl Field {
    pub(crate) fn new(items: Vec<Box<str>>) -> Self {
        debug_assert!(!items.is_empty());
        Self { items }
    }

    /// Items in input order.
    pub fn items(&self) -> &[Box<str>] {
        &self.items
    }

    /// Item count; also the number of frames.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items plus the receptacle.
    pub fn slot_count(&self) -> usize {
        self.items.len() + 1
    }

    /// Content of slot `index` at `frame`. `frame` must be below [`Self::item_count`].
    ///
    /// Slots before `frame` are collected, slot `frame` is carried, the rest are untouched.
    /// The carried item pairs with [`Mover::Right`] except on the terminal frame, where it sits
    /// next to the receptacle and the figure has turned back ([`Mover::Left`]).
    pub fn slot(&self, frame: usize, index: usize) -> Slot {
        let n = self.items.len();
        if index >= n {
            return Slot::Receptacle;
        }
        match index.cmp(&frame) {
            std::cmp::Ordering::Less => Slot::Empty,
            std::cmp::Ordering::Equal => {
                let mover = if frame + 1 == n {
                    Mover::Left
                } else {
                    Mover::Right
                };
                Slot::Carried(index, mover)
            }
            std::cmp::Ordering::Greater => Slot::Item(index),
        }
    }

    /// All slots at `frame`, receptacle last.
    pub fn slots_at(&self, frame: usize) -> impl Iterator<Item = Slot> + '_ {
        (0..self.slot_count()).map(move |i| self.slot(frame, i))
    }

    /// Upper bound on the byte length of any rendered frame.
    ///
    /// `Σ items + can + space × (N − 1) + max(right, left) + separator × N`.
    pub fn max_frame_len(&self, sprites: &SpriteSet) -> TrashResult<usize> {
        let overflow = || TrashError::out_of_memory("frame buffer size overflows usize");

        let n = self.items.len();
        let items = self
            .items
            .iter()
            .try_fold(0usize, |acc, s| acc.checked_add(s.len()))
            .ok_or_else(overflow)?;
        let collected = sprites
            .space()
            .len()
            .checked_mul(n.saturating_sub(1))
            .ok_or_else(overflow)?;
        let separators = sprites
            .separator()
            .len()
            .checked_mul(n)
            .ok_or_else(overflow)?;

        [collected, sprites.can().len(), sprites.mover_len(), separators]
            .into_iter()
            .try_fold(items, usize::checked_add)
            .ok_or_else(overflow)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/field.rs"]
mod tests;
