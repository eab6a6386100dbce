//! Incremental construction of transaction results.

use super::result::{DataTransactionResult, TransactionType};
use crate::key::{BaseValue, ErasedValue};
use crate::manipulator::Facet;

/// Accumulates replaced, rejected and applied values, then freezes them
/// into a [`DataTransactionResult`].
///
/// The outcome type defaults to `Failure` unless [`result`](Self::result)
/// is called.
///
/// ## Example
///
/// ```
/// use hostdata::key::{keys::PORTION_TYPE, Value};
/// use hostdata::core::PortionType;
/// use hostdata::transaction::{DataTransactionBuilder, TransactionType};
///
/// let result = DataTransactionBuilder::new()
///     .replace(&Value::new(&PORTION_TYPE, PortionType::Bottom))
///     .success(&Value::new(&PORTION_TYPE, PortionType::Top))
///     .result(TransactionType::Success)
///     .build();
///
/// assert!(result.is_successful());
/// assert_eq!(result.successful_of(&PORTION_TYPE).map(|v| *v.get()), Some(PortionType::Top));
///
/// let unfinished = DataTransactionBuilder::new().build();
/// assert_eq!(unfinished.kind(), TransactionType::Failure);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DataTransactionBuilder {
    kind: Option<TransactionType>,
    replaced: Vec<ErasedValue>,
    rejected: Vec<ErasedValue>,
    successful: Vec<ErasedValue>,
}

impl DataTransactionBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a replaced value.
    #[must_use]
    pub fn replace(mut self, value: &dyn BaseValue) -> Self {
        self.replaced.push(value.snapshot());
        self
    }

    /// Record replaced values.
    #[must_use]
    pub fn replace_all(mut self, values: impl IntoIterator<Item = ErasedValue>) -> Self {
        self.replaced.extend(values);
        self
    }

    /// Record every value of a replaced facet.
    #[must_use]
    pub fn replace_data(self, facet: &impl Facet) -> Self {
        self.replace_all(facet.values())
    }

    /// Record an applied value.
    #[must_use]
    pub fn success(mut self, value: &dyn BaseValue) -> Self {
        self.successful.push(value.snapshot());
        self
    }

    /// Record applied values.
    #[must_use]
    pub fn success_all(mut self, values: impl IntoIterator<Item = ErasedValue>) -> Self {
        self.successful.extend(values);
        self
    }

    /// Record every value of an applied facet.
    #[must_use]
    pub fn success_data(self, facet: &impl Facet) -> Self {
        self.success_all(facet.values())
    }

    /// Record a rejected value.
    #[must_use]
    pub fn reject(mut self, value: &dyn BaseValue) -> Self {
        self.rejected.push(value.snapshot());
        self
    }

    /// Record rejected values.
    #[must_use]
    pub fn reject_all(mut self, values: impl IntoIterator<Item = ErasedValue>) -> Self {
        self.rejected.extend(values);
        self
    }

    /// Record every value of a rejected facet.
    #[must_use]
    pub fn reject_data(self, facet: &impl Facet) -> Self {
        self.reject_all(facet.values())
    }

    /// Set the outcome type.
    #[must_use]
    pub fn result(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Freeze into a result.
    #[must_use]
    pub fn build(self) -> DataTransactionResult {
        DataTransactionResult {
            kind: self.kind.unwrap_or_default(),
            replaced: self.replaced,
            rejected: self.rejected,
            successful: self.successful,
        }
    }
}
