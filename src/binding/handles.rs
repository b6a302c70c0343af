use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TrashError, TrashResult};
use crate::input::items::TrashInput;
use crate::sprites::set::SpriteOverrides;
use crate::state::trash_state::TrashState;

/// Opaque reference to an engine owned by a [`HandleTable`].
///
/// Handles are generational: once freed, a handle never resolves again, even if its slot is
/// reused by a later engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

/// Sprite buffers as a host hands them over. `None` selects the default sprite.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawSprites<'a> {
    /// Empty-slot sprite bytes.
    pub space: Option<&'a [u8]>,
    /// Receptacle sprite bytes.
    pub can: Option<&'a [u8]>,
    /// Right mover sprite bytes.
    pub right: Option<&'a [u8]>,
    /// Left mover sprite bytes.
    pub left: Option<&'a [u8]>,
}

impl RawSprites<'_> {
    fn decode(self) -> TrashResult<SpriteOverrides> {
        SpriteOverrides::from_utf8(self.space, self.can, self.right, self.left)
    }
}

#[derive(Debug)]
enum Entry {
    Live { generation: u32, state: TrashState },
    Free { generation: u32 },
}

/// Host-facing engine registry.
///
/// Mirrors the create / set-frame / get-string / frames-count / free contract a foreign
/// binding exposes, while keeping ownership inside Rust. Staging buffers passed to the
/// constructors are only borrowed.
#[derive(Debug, Default)]
pub struct HandleTable {
    entries: Vec<Entry>,
    free: Vec<u32>,
}

impl HandleTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from one UTF-8 string; each code point becomes an item.
    pub fn create_from_utf8(
        &mut self,
        text: &[u8],
        spacing: u32,
        sprites: RawSprites<'_>,
    ) -> TrashResult<Handle> {
        let state = TrashState::new(TrashInput::Text(text), spacing, sprites.decode()?)?;
        self.insert(state)
    }

    /// Create an engine from explicit string tokens.
    pub fn create_from_items(
        &mut self,
        items: &[&[u8]],
        spacing: u32,
        sprites: RawSprites<'_>,
    ) -> TrashResult<Handle> {
        let state = TrashState::new(TrashInput::Items(items.to_vec()), spacing, sprites.decode()?)?;
        self.insert(state)
    }

    /// Select the current frame of a live engine.
    pub fn set_frame(&mut self, h: Handle, frame: FrameIndex) -> TrashResult<()> {
        self.get_mut(h)?.set_frame(frame)
    }

    /// Select the current frame of a live engine from a signed host index.
    pub fn set_frame_i64(&mut self, h: Handle, frame: i64) -> TrashResult<()> {
        self.get_mut(h)?.set_frame_i64(frame)
    }

    /// Render the current frame of a live engine into its own buffer.
    pub fn get_string(&mut self, h: Handle) -> TrashResult<&str> {
        Ok(self.get_mut(h)?.current_str())
    }

    /// Frame count of a live engine.
    pub fn frames_count(&self, h: Handle) -> TrashResult<u64> {
        Ok(self.get(h)?.frame_count())
    }

    /// Borrow a live engine.
    pub fn get(&self, h: Handle) -> TrashResult<&TrashState> {
        match self.entries.get(h.index as usize) {
            Some(Entry::Live { generation, state }) if *generation == h.generation => Ok(state),
            _ => Err(stale(h)),
        }
    }

    /// Release an engine. Returns `false` when the handle was already freed or never issued;
    /// no other engine is affected.
    pub fn free(&mut self, h: Handle) -> bool {
        let Some(entry) = self.entries.get_mut(h.index as usize) else {
            return false;
        };
        match entry {
            Entry::Live { generation, .. } if *generation == h.generation => {
                let next = Entry::Free {
                    generation: generation.wrapping_add(1),
                };
                if let Entry::Live { state, .. } = std::mem::replace(entry, next) {
                    state.release();
                }
                self.free.push(h.index);
                tracing::debug!(index = h.index, "engine freed");
                true
            }
            _ => {
                tracing::debug!(index = h.index, generation = h.generation, "stale free ignored");
                false
            }
        }
    }

    /// Number of live engines.
    pub fn live(&self) -> usize {
        self.entries.len() - self.free.len()
    }

    fn get_mut(&mut self, h: Handle) -> TrashResult<&mut TrashState> {
        match self.entries.get_mut(h.index as usize) {
            Some(Entry::Live { generation, state }) if *generation == h.generation => Ok(state),
            _ => Err(stale(h)),
        }
    }

    fn insert(&mut self, state: TrashState) -> TrashResult<Handle> {
        let handle = match self.free.pop() {
            Some(index) => {
                let Some(slot) = self.entries.get_mut(index as usize) else {
                    return Err(TrashError::Other(anyhow::anyhow!(
                        "free list points past the table at {index}"
                    )));
                };
                let Entry::Free { generation } = *slot else {
                    return Err(TrashError::Other(anyhow::anyhow!(
                        "free list points at live entry {index}"
                    )));
                };
                *slot = Entry::Live { generation, state };
                Handle { index, generation }
            }
            None => {
                let index = u32::try_from(self.entries.len())
                    .map_err(|_| TrashError::out_of_memory("handle table is full"))?;
                self.entries.push(Entry::Live {
                    generation: 0,
                    state,
                });
                Handle {
                    index,
                    generation: 0,
                }
            }
        };
        tracing::debug!(index = handle.index, generation = handle.generation, "engine created");
        Ok(handle)
    }
}

fn stale(h: Handle) -> TrashError {
    TrashError::invalid_input(format!(
        "handle {}:{} does not refer to a live engine",
        h.index, h.generation
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/binding/handles.rs"]
mod tests;
