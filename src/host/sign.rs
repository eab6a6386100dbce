//! Sign tile host.

use std::any::Any;

use serde::{Deserialize, Serialize};

use super::DataHolder;

/// A placed sign holding lines of text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignTile {
    /// Text lines, top to bottom.
    pub lines: Vec<String>,
}

impl SignTile {
    /// Create a sign with the given lines.
    #[must_use]
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a sign with `count` empty lines.
    #[must_use]
    pub fn blank(count: usize) -> Self {
        Self {
            lines: vec![String::new(); count],
        }
    }

    /// Check if every line is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }
}

impl DataHolder for SignTile {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn kind(&self) -> &'static str {
        "SignTile"
    }
}
