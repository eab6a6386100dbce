//! Frozen mutation outcomes.

use serde::{Deserialize, Serialize};

use super::builder::DataTransactionBuilder;
use crate::key::{downcast_value, ErasedValue, ImmutableValue, Key, KeyValue};
use crate::manipulator::Facet;

/// Overall outcome of a mutation attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Every offered value was applied.
    Success,
    /// The offer was valid but rejected by the processor's rules.
    #[default]
    Failure,
    /// The offer could not be processed at all.
    Error,
    /// The offer was withdrawn before it was applied.
    Cancelled,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TransactionType::Success => "success",
            TransactionType::Failure => "failure",
            TransactionType::Error => "error",
            TransactionType::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// What a mutation replaced, rejected and applied.
///
/// Every recorded value is an immutable snapshot taken when it was added to
/// the builder. Inspect typed entries with [`replaced_of`](Self::replaced_of)
/// and friends.
#[derive(Clone, Debug)]
pub struct DataTransactionResult {
    pub(super) kind: TransactionType,
    pub(super) replaced: Vec<ErasedValue>,
    pub(super) rejected: Vec<ErasedValue>,
    pub(super) successful: Vec<ErasedValue>,
}

impl DataTransactionResult {
    /// Start building a result.
    #[must_use]
    pub fn builder() -> DataTransactionBuilder {
        DataTransactionBuilder::new()
    }

    /// A failed result rejecting every value of `facet`.
    #[must_use]
    pub fn fail(facet: &impl Facet) -> Self {
        Self::builder()
            .reject_data(facet)
            .result(TransactionType::Failure)
            .build()
    }

    /// A failed result with nothing recorded.
    #[must_use]
    pub fn fail_no_data() -> Self {
        Self::builder().result(TransactionType::Failure).build()
    }

    /// An error result rejecting every value of `facet`.
    #[must_use]
    pub fn error(facet: &impl Facet) -> Self {
        Self::builder()
            .reject_data(facet)
            .result(TransactionType::Error)
            .build()
    }

    /// A successful result that replaced exactly `facet`.
    #[must_use]
    pub fn success_replace_data(facet: &impl Facet) -> Self {
        Self::builder()
            .replace_data(facet)
            .result(TransactionType::Success)
            .build()
    }

    /// A successful result applying `applied` over `replaced`.
    #[must_use]
    pub fn success_replace(applied: &impl Facet, replaced: &impl Facet) -> Self {
        Self::builder()
            .replace_data(replaced)
            .success_data(applied)
            .result(TransactionType::Success)
            .build()
    }

    /// The outcome type.
    #[must_use]
    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    /// Check if the outcome is `Success`.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.kind == TransactionType::Success
    }

    /// Values that were overwritten or removed.
    #[must_use]
    pub fn replaced(&self) -> &[ErasedValue] {
        &self.replaced
    }

    /// Values that were offered but not applied.
    #[must_use]
    pub fn rejected(&self) -> &[ErasedValue] {
        &self.rejected
    }

    /// Values that were applied.
    #[must_use]
    pub fn successful(&self) -> &[ErasedValue] {
        &self.successful
    }

    /// The replaced value for `key`, if recorded.
    #[must_use]
    pub fn replaced_of<V: KeyValue>(&self, key: &'static Key<V>) -> Option<&ImmutableValue<V>> {
        find(&self.replaced, key)
    }

    /// The rejected value for `key`, if recorded.
    #[must_use]
    pub fn rejected_of<V: KeyValue>(&self, key: &'static Key<V>) -> Option<&ImmutableValue<V>> {
        find(&self.rejected, key)
    }

    /// The applied value for `key`, if recorded.
    #[must_use]
    pub fn successful_of<V: KeyValue>(&self, key: &'static Key<V>) -> Option<&ImmutableValue<V>> {
        find(&self.successful, key)
    }
}

fn find<'a, V: KeyValue>(
    values: &'a [ErasedValue],
    key: &'static Key<V>,
) -> Option<&'a ImmutableValue<V>> {
    values
        .iter()
        .find_map(|value| downcast_value(value.as_ref(), key))
}
