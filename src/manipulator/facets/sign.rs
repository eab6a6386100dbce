//! Sign text facet.
//!
//! The mutable facet stores its lines in a `Vec`, the immutable one in an
//! `im::Vector` so that deriving a changed copy shares the untouched lines.

use std::sync::Arc;

use im::Vector;

use crate::container::DataContainer;
use crate::key::keys::SIGN_LINES;
use crate::key::{ErasedValue, ImmutableValue};
use crate::manipulator::{DataManipulator, Facet, ImmutableDataManipulator};

fn lines_container(lines: Vec<String>) -> DataContainer {
    DataContainer::new().with(SIGN_LINES.query(), lines)
}

/// The text lines of a sign.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignData {
    pub(crate) lines: Vec<String>,
}

impl SignData {
    /// Create a facet with the given lines.
    #[must_use]
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// All lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// One line, if `index` is in range.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Replace one line. Returns `false` if `index` is out of range.
    pub fn set_line(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                *line = text.into();
                true
            }
            None => false,
        }
    }
}

impl Facet for SignData {
    fn values(&self) -> Vec<ErasedValue> {
        vec![Arc::new(ImmutableValue::new(&SIGN_LINES, self.lines.clone()))]
    }

    fn to_container(&self) -> DataContainer {
        lines_container(self.lines.clone())
    }
}

impl DataManipulator for SignData {
    type Immutable = ImmutableSignData;

    fn as_immutable(&self) -> ImmutableSignData {
        ImmutableSignData {
            lines: self.lines.iter().cloned().collect(),
        }
    }
}

/// Frozen sign text facet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImmutableSignData {
    pub(crate) lines: Vector<String>,
}

impl ImmutableSignData {
    /// Create a facet with the given lines.
    #[must_use]
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// All lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &Vector<String> {
        &self.lines
    }

    /// One line, if `index` is in range.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// A new facet with one line replaced. `None` if `index` is out of
    /// range.
    #[must_use]
    pub fn with_line(&self, index: usize, text: impl Into<String>) -> Option<Self> {
        if index >= self.lines.len() {
            return None;
        }
        Some(Self {
            lines: self.lines.update(index, text.into()),
        })
    }

    pub(crate) fn line_vec(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

impl Facet for ImmutableSignData {
    fn values(&self) -> Vec<ErasedValue> {
        vec![Arc::new(ImmutableValue::new(&SIGN_LINES, self.line_vec()))]
    }

    fn to_container(&self) -> DataContainer {
        lines_container(self.line_vec())
    }
}

impl ImmutableDataManipulator for ImmutableSignData {
    type Mutable = SignData;

    fn as_mutable(&self) -> SignData {
        SignData {
            lines: self.line_vec(),
        }
    }
}
