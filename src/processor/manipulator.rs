//! Per-facet manipulator processors.

use super::priority::DataPriority;
use crate::container::DataContainer;
use crate::host::DataHolder;
use crate::manipulator::DataManipulator;
use crate::transaction::DataTransactionResult;

/// Materializes, applies and removes one facet type on a family of hosts.
///
/// Processors hold no per-call state; everything they read or write lives
/// in the host. A host outside the processor's family is answered with
/// `None`, `false` or a failed result, never a panic.
pub trait ManipulatorProcessor<M: DataManipulator>: Send + Sync {
    /// A facet holding default values.
    fn create(&self) -> M;

    /// Check if `holder` belongs to this processor's host family.
    fn supports_holder(&self, holder: &dyn DataHolder) -> bool;

    /// Read the facet from `holder`.
    ///
    /// `None` if the holder is unsupported or carries no value; defaults
    /// are never substituted.
    fn get_from(&self, holder: &dyn DataHolder) -> Option<M>;

    /// Read the facet from `holder`, falling back to defaults when the
    /// holder carries no value. `None` only if the holder is unsupported.
    fn create_from(&self, holder: &dyn DataHolder) -> Option<M> {
        if !self.supports_holder(holder) {
            return None;
        }
        Some(self.get_from(holder).unwrap_or_else(|| self.create()))
    }

    /// Merge the holder's state into a copy of `manipulator`.
    ///
    /// `None` if the holder is unsupported. A holder with no value leaves
    /// the copy as it was.
    fn fill_data(
        &self,
        holder: &dyn DataHolder,
        manipulator: &M,
        priority: DataPriority,
    ) -> Option<M> {
        if !self.supports_holder(holder) {
            return None;
        }
        Some(priority.resolve(manipulator.copy(), self.get_from(holder)))
    }

    /// Apply `manipulator` onto `holder`.
    ///
    /// Previous host values are recorded as replaced before they are
    /// overwritten.
    fn set_data(
        &self,
        holder: &mut dyn DataHolder,
        manipulator: &M,
        priority: DataPriority,
    ) -> DataTransactionResult;

    /// Clear the facet from `holder`. Returns whether anything was present.
    fn remove(&self, holder: &mut dyn DataHolder) -> bool;

    /// Parse a facet from its container form. `None` if required entries
    /// are missing or malformed.
    fn build(&self, container: &DataContainer) -> Option<M>;
}
