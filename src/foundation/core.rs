use crate::foundation::error::{TrashError, TrashResult};

/// 0-based frame index into an animation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Validate this index against a frame count.
    pub fn check(self, frames: u64) -> TrashResult<Self> {
        if self.0 >= frames {
            return Err(TrashError::index_out_of_range(self.0, frames));
        }
        Ok(self)
    }
}

/// Host languages hand frame indices over as signed integers.
///
/// The conversion knows no frame count, so a negative index reports `frames: 0`; use
/// [`crate::TrashState::set_frame_i64`] to get the engine's real count in the error.
impl TryFrom<i64> for FrameIndex {
    type Error = TrashError;

    fn try_from(v: i64) -> TrashResult<Self> {
        u64::try_from(v)
            .map(FrameIndex)
            .map_err(|_| TrashError::IndexOutOfRange {
                index: i128::from(v),
                frames: 0,
            })
    }
}

impl From<u64> for FrameIndex {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> TrashResult<Self> {
        if start.0 > end.0 {
            return Err(TrashError::invalid_input("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// The full range `[0, frames)`.
    pub fn all(frames: u64) -> Self {
        Self {
            start: FrameIndex(0),
            end: FrameIndex(frames),
        }
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Iterate the indices of the range in increasing order.
    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
