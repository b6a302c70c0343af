use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{TrashError, TrashResult};
use crate::input::items::TrashInput;
use crate::sprites::set::{MAX_SPACING, SpriteOverrides, SpriteSet};
use crate::state::trash_state::TrashState;

/// Spacing used when a config or the CLI does not name one.
pub const DEFAULT_SPACING: u32 = 1;

fn default_spacing() -> u32 {
    DEFAULT_SPACING
}

/// What to animate: a string split into code points, or explicit tokens.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum InputDef {
    /// Split into one item per code point.
    Text(String),
    /// Used verbatim.
    Items(Vec<String>),
}

impl InputDef {
    /// Borrow as engine input.
    pub fn as_input(&self) -> TrashInput<'_> {
        match self {
            InputDef::Text(s) => TrashInput::from(s.as_str()),
            InputDef::Items(items) => TrashInput::from(items.as_slice()),
        }
    }
}

/// JSON-facing description of one animation.
///
/// ```json
/// { "text": "hello", "spacing": 2, "sprites": { "can": "[C]" } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrashConfig {
    /// Items to animate.
    pub text: InputDef,
    /// Space sprites between consecutive slots.
    #[serde(default = "default_spacing")]
    pub spacing: u32,
    /// Sprite overrides; absent sprites use the defaults.
    #[serde(default)]
    pub sprites: SpriteOverrides,
}

impl TrashConfig {
    /// Config with default spacing and sprites.
    pub fn new(text: InputDef) -> Self {
        Self {
            text,
            spacing: DEFAULT_SPACING,
            sprites: SpriteOverrides::default(),
        }
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TrashResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TrashError::serde(format!("parse trash config JSON: {e}")))
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> TrashResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| TrashError::serde(format!("parse trash config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TrashResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TrashError::invalid_input(format!("open trash config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the config without building the frame buffer.
    pub fn validate(&self) -> TrashResult<()> {
        if self.spacing > MAX_SPACING {
            return Err(TrashError::invalid_input(format!(
                "spacing {} exceeds the maximum of {MAX_SPACING}",
                self.spacing
            )));
        }
        SpriteSet::new(self.sprites.clone(), 0)?;
        self.text.as_input().into_items().map(|_| ())
    }

    /// Build the engine described by this config.
    pub fn build(&self) -> TrashResult<TrashState> {
        TrashState::new(self.text.as_input(), self.spacing, self.sprites.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
