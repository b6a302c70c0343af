use crate::foundation::error::{TrashError, TrashResult};

/// Default empty-slot sprite.
pub const DEFAULT_SPACE: &str = " ";
/// Default receptacle sprite (U+1F5D1 WASTEBASKET).
pub const DEFAULT_CAN: &str = "\u{1F5D1}";
/// Default mover sprite while carrying an item toward the receptacle.
pub const DEFAULT_RIGHT: &str = "(> ^_^)>";
/// Default mover sprite after the last drop.
pub const DEFAULT_LEFT: &str = "<(^_^ <)";
/// Largest accepted `spacing`. The separator is materialized once per sprite set and appears
/// in every frame, so its size is bounded up front.
pub const MAX_SPACING: u32 = 1024;

/// Optional sprite replacements. Every `None` falls back to the built-in default.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteOverrides {
    /// Empty-slot sprite.
    #[serde(default)]
    pub space: Option<String>,
    /// Receptacle sprite.
    #[serde(default)]
    pub can: Option<String>,
    /// Mover sprite facing the receptacle.
    #[serde(default)]
    pub right: Option<String>,
    /// Mover sprite facing away from the receptacle.
    #[serde(default)]
    pub left: Option<String>,
}

impl SpriteOverrides {
    /// Build overrides from raw byte buffers, validating each one as UTF-8.
    pub fn from_utf8(
        space: Option<&[u8]>,
        can: Option<&[u8]>,
        right: Option<&[u8]>,
        left: Option<&[u8]>,
    ) -> TrashResult<Self> {
        fn decode(name: &str, raw: Option<&[u8]>) -> TrashResult<Option<String>> {
            raw.map(|b| {
                std::str::from_utf8(b).map(str::to_owned).map_err(|e| {
                    TrashError::invalid_input(format!(
                        "sprite '{name}' is not valid UTF-8 (valid up to byte {})",
                        e.valid_up_to()
                    ))
                })
            })
            .transpose()
        }

        Ok(Self {
            space: decode("space", space)?,
            can: decode("can", can)?,
            right: decode("right", right)?,
            left: decode("left", left)?,
        })
    }

    /// Replace the space sprite.
    pub fn space(mut self, s: impl Into<String>) -> Self {
        self.space = Some(s.into());
        self
    }

    /// Replace the receptacle sprite.
    pub fn can(mut self, s: impl Into<String>) -> Self {
        self.can = Some(s.into());
        self
    }

    /// Replace the right-facing mover sprite.
    pub fn right(mut self, s: impl Into<String>) -> Self {
        self.right = Some(s.into());
        self
    }

    /// Replace the left-facing mover sprite.
    pub fn left(mut self, s: impl Into<String>) -> Self {
        self.left = Some(s.into());
        self
    }

    /// Fill every unset sprite from `other`.
    pub fn or(self, other: SpriteOverrides) -> Self {
        Self {
            space: self.space.or(other.space),
            can: self.can.or(other.can),
            right: self.right.or(other.right),
            left: self.left.or(other.left),
        }
    }
}

/// Resolved, immutable sprite bundle plus the slot spacing.
///
/// Defaults are resolved here, once; rendering never consults [`SpriteOverrides`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSet {
    space: Box<str>,
    can: Box<str>,
    right: Box<str>,
    left: Box<str>,
    spacing: u32,
    separator: Box<str>,
}

impl SpriteSet {
    /// Resolve overrides against the defaults.
    ///
    /// Fails with [`TrashError::InvalidInput`] when a supplied sprite is empty or `spacing`
    /// exceeds [`MAX_SPACING`].
    pub fn new(overrides: SpriteOverrides, spacing: u32) -> TrashResult<Self> {
        if spacing > MAX_SPACING {
            return Err(TrashError::invalid_input(format!(
                "spacing {spacing} exceeds the maximum of {MAX_SPACING}"
            )));
        }
        let space = resolve("space", overrides.space, DEFAULT_SPACE)?;
        let can = resolve("can", overrides.can, DEFAULT_CAN)?;
        let right = resolve("right", overrides.right, DEFAULT_RIGHT)?;
        let left = resolve("left", overrides.left, DEFAULT_LEFT)?;

        let sep_len = space
            .len()
            .checked_mul(spacing as usize)
            .ok_or_else(|| TrashError::out_of_memory("separator length overflows usize"))?;
        let mut separator = String::new();
        separator.try_reserve_exact(sep_len)?;
        for _ in 0..spacing {
            separator.push_str(&space);
        }

        Ok(Self {
            space,
            can,
            right,
            left,
            spacing,
            separator: separator.into_boxed_str(),
        })
    }

    /// Default sprites with the given spacing.
    pub fn with_spacing(spacing: u32) -> TrashResult<Self> {
        Self::new(SpriteOverrides::default(), spacing)
    }

    /// Empty-slot sprite.
    pub fn space(&self) -> &str {
        &self.space
    }

    /// Receptacle sprite.
    pub fn can(&self) -> &str {
        &self.can
    }

    /// Mover facing the receptacle.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Mover facing away from the receptacle.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Number of space sprites between consecutive slots.
    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// `spacing` copies of the space sprite.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Byte length of the wider mover sprite.
    pub fn mover_len(&self) -> usize {
        self.right.len().max(self.left.len())
    }
}

fn resolve(name: &str, sprite: Option<String>, default: &str) -> TrashResult<Box<str>> {
    match sprite {
        Some(s) if s.is_empty() => Err(TrashError::invalid_input(format!(
            "sprite '{name}' must not be empty"
        ))),
        Some(s) => Ok(s.into_boxed_str()),
        None => Ok(default.into()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprites/set.rs"]
mod tests;
