use crate::foundation::error::{TrashError, TrashResult};

/// Raw input handed to [`crate::TrashState::new`].
///
/// Both shapes are resolved once, at construction, into an owned item list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrashInput<'a> {
    /// A single UTF-8 string; every code point becomes one item.
    Text(&'a [u8]),
    /// Caller-chosen tokens, used verbatim. An empty token is a valid item that renders as
    /// nothing.
    Items(Vec<&'a [u8]>),
}

impl<'a> From<&'a str> for TrashInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s.as_bytes())
    }
}

impl<'a> From<&'a String> for TrashInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_bytes())
    }
}

impl<'a> From<&'a [&'a str]> for TrashInput<'a> {
    fn from(items: &'a [&'a str]) -> Self {
        Self::Items(items.iter().map(|s| s.as_bytes()).collect())
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for TrashInput<'a> {
    fn from(items: &'a [&'a str; N]) -> Self {
        Self::from(&items[..])
    }
}

impl<'a> From<Vec<&'a str>> for TrashInput<'a> {
    fn from(items: Vec<&'a str>) -> Self {
        Self::Items(items.into_iter().map(str::as_bytes).collect())
    }
}

impl<'a> From<&'a [String]> for TrashInput<'a> {
    fn from(items: &'a [String]) -> Self {
        Self::Items(items.iter().map(|s| s.as_bytes()).collect())
    }
}

impl TrashInput<'_> {
    /// Validate and copy the input into owned items.
    pub(crate) fn into_items(self) -> TrashResult<Vec<Box<str>>> {
        let items = match self {
            TrashInput::Text(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(|e| {
                    TrashError::invalid_input(format!(
                        "text is not valid UTF-8 (valid up to byte {})",
                        e.valid_up_to()
                    ))
                })?;
                split_code_points(text)?
            }
            TrashInput::Items(raw) => {
                let mut items = Vec::new();
                items.try_reserve_exact(raw.len())?;
                for (i, bytes) in raw.into_iter().enumerate() {
                    let s = std::str::from_utf8(bytes).map_err(|e| {
                        TrashError::invalid_input(format!(
                            "item {i} is not valid UTF-8 (valid up to byte {})",
                            e.valid_up_to()
                        ))
                    })?;
                    items.push(Box::from(s));
                }
                items
            }
        };

        if items.is_empty() {
            return Err(TrashError::invalid_input("nothing to animate: no items"));
        }
        Ok(items)
    }
}

/// Split `text` into one item per Unicode scalar value.
pub fn split_code_points(text: &str) -> TrashResult<Vec<Box<str>>> {
    let mut items = Vec::new();
    items.try_reserve_exact(text.chars().count())?;
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        items.push(Box::from(&*ch.encode_utf8(&mut buf)));
    }
    Ok(items)
}

#[cfg(test)]
#[path = "../../tests/unit/input/items.rs"]
mod tests;
