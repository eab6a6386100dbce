//! Sign text processors.

use std::any::Any;

use super::{traced, DataPriority, ManipulatorProcessor, ValueProcessor};
use crate::container::DataContainer;
use crate::core::{DataConfig, DataError, Result};
use crate::host::{DataHolder, SignTile};
use crate::key::keys::SIGN_LINES;
use crate::key::{Key, Value};
use crate::manipulator::{ImmutableSignData, SignData};
use crate::transaction::{DataTransactionResult, TransactionType};

/// Line count and width a sign tile holds.
#[derive(Clone, Copy, Debug)]
struct SignLimits {
    line_count: usize,
    max_line_chars: usize,
}

impl SignLimits {
    fn new(config: &DataConfig) -> Self {
        Self {
            line_count: config.sign_line_count,
            max_line_chars: config.max_sign_line_chars,
        }
    }

    fn fits(&self, lines: &[String]) -> bool {
        lines.iter().all(|line| line.chars().count() <= self.max_line_chars)
    }

    fn normalized(&self, lines: &[String]) -> Vec<String> {
        let mut lines: Vec<String> = lines.iter().take(self.line_count).cloned().collect();
        lines.resize(self.line_count, String::new());
        lines
    }
}

/// Reads and writes [`SIGN_LINES`] on sign facets and sign tiles.
///
/// Facets keep lines as given. Tiles refuse over-long lines and store
/// exactly the configured number of lines.
#[derive(Clone, Copy, Debug)]
pub struct SignLinesValueProcessor {
    limits: SignLimits,
}

impl SignLinesValueProcessor {
    /// Create a processor using the sign limits from `config`.
    #[must_use]
    pub fn new(config: &DataConfig) -> Self {
        Self {
            limits: SignLimits::new(config),
        }
    }
}

impl Default for SignLinesValueProcessor {
    fn default() -> Self {
        Self::new(&DataConfig::default())
    }
}

impl ValueProcessor<Vec<String>> for SignLinesValueProcessor {
    fn key(&self) -> &'static Key<Vec<String>> {
        &SIGN_LINES
    }

    fn supports(&self, target: &dyn Any) -> bool {
        target.is::<SignData>() || target.is::<ImmutableSignData>() || target.is::<SignTile>()
    }

    fn value_from(&self, target: &dyn Any) -> Option<Vec<String>> {
        if let Some(data) = target.downcast_ref::<SignData>() {
            return Some(data.lines.clone());
        }
        if let Some(data) = target.downcast_ref::<ImmutableSignData>() {
            return Some(data.line_vec());
        }
        target.downcast_ref::<SignTile>().map(|tile| tile.lines.clone())
    }

    fn set(&self, target: &mut dyn Any, value: Vec<String>) -> Result<()> {
        if let Some(data) = target.downcast_mut::<SignData>() {
            data.lines = value;
            return Ok(());
        }
        if let Some(tile) = target.downcast_mut::<SignTile>() {
            if !self.limits.fits(&value) {
                return Err(DataError::rejected(
                    SIGN_LINES.id().as_str(),
                    "line longer than the sign allows",
                ));
            }
            tile.lines = self.limits.normalized(&value);
            return Ok(());
        }
        Err(self.unsupported_target())
    }

    fn with(&self, target: &dyn Any, value: Vec<String>) -> Option<Box<dyn Any>> {
        if target.is::<ImmutableSignData>() {
            return Some(Box::new(ImmutableSignData::new(value)));
        }
        if target.is::<SignData>() {
            return Some(Box::new(SignData::new(value)));
        }
        if !target.is::<SignTile>() || !self.limits.fits(&value) {
            return None;
        }
        Some(Box::new(SignTile::new(self.limits.normalized(&value))))
    }
}

/// Applies [`SignData`] to sign tiles.
///
/// Lines are padded or truncated to the configured line count on the way
/// in and out of a tile. Lines longer than the configured limit are
/// rejected.
#[derive(Clone, Debug)]
pub struct SignDataProcessor {
    limits: SignLimits,
}

impl SignDataProcessor {
    /// Create a processor using the sign limits from `config`.
    #[must_use]
    pub fn new(config: &DataConfig) -> Self {
        Self {
            limits: SignLimits::new(config),
        }
    }

    fn normalized(&self, lines: &[String]) -> Vec<String> {
        self.limits.normalized(lines)
    }
}

impl ManipulatorProcessor<SignData> for SignDataProcessor {
    fn create(&self) -> SignData {
        SignData {
            lines: vec![String::new(); self.limits.line_count],
        }
    }

    fn supports_holder(&self, holder: &dyn DataHolder) -> bool {
        holder.as_any().is::<SignTile>()
    }

    fn get_from(&self, holder: &dyn DataHolder) -> Option<SignData> {
        let tile = holder.as_any().downcast_ref::<SignTile>()?;
        Some(SignData {
            lines: self.normalized(&tile.lines),
        })
    }

    fn set_data(
        &self,
        holder: &mut dyn DataHolder,
        manipulator: &SignData,
        priority: DataPriority,
    ) -> DataTransactionResult {
        let host = holder.kind();
        let Some(tile) = holder.as_any_mut().downcast_mut::<SignTile>() else {
            return traced("SignData", host, DataTransactionResult::fail(manipulator));
        };
        if !self.limits.fits(&manipulator.lines) {
            return traced("SignData", host, DataTransactionResult::fail(manipulator));
        }
        if priority.holder_wins() && !tile.is_blank() {
            return traced("SignData", host, DataTransactionResult::fail(manipulator));
        }

        let previous = self.normalized(&tile.lines);
        let applied = self.normalized(&manipulator.lines);
        tile.lines = applied.clone();

        let result = DataTransactionResult::builder()
            .replace(&Value::new(&SIGN_LINES, previous))
            .success(&Value::new(&SIGN_LINES, applied))
            .result(TransactionType::Success)
            .build();
        traced("SignData", host, result)
    }

    fn remove(&self, holder: &mut dyn DataHolder) -> bool {
        match holder.as_any_mut().downcast_mut::<SignTile>() {
            Some(tile) if !tile.is_blank() => {
                tile.lines = vec![String::new(); self.limits.line_count];
                true
            }
            _ => false,
        }
    }

    fn build(&self, container: &DataContainer) -> Option<SignData> {
        let lines = container.get_string_list(SIGN_LINES.query())?;
        Some(SignData {
            lines: self.normalized(&lines),
        })
    }
}
