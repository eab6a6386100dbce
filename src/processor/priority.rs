//! Merge priority between a facet and a host.

use serde::{Deserialize, Serialize};

/// Which side wins when a facet and a host both carry a value.
///
/// - When filling a facet from a host, `DataHolder` takes the host's state
///   and `DataManipulator` keeps the facet's.
/// - When offering a facet to a host, `DataManipulator` overwrites the host
///   and `DataHolder` only writes into a host that has no value yet; a host
///   that already has one rejects the offer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataPriority {
    /// The facet's values win.
    #[default]
    DataManipulator,
    /// The host's existing values win.
    DataHolder,
}

impl DataPriority {
    /// Check if existing host state wins over incoming facet values.
    #[must_use]
    pub const fn holder_wins(self) -> bool {
        matches!(self, DataPriority::DataHolder)
    }

    /// Resolve a conflict between a facet value and a host value.
    ///
    /// Returns the facet's value when the host has none.
    #[must_use]
    pub fn resolve<T>(self, facet: T, host: Option<T>) -> T {
        match (self, host) {
            (DataPriority::DataHolder, Some(host)) => host,
            (_, _) => facet,
        }
    }
}
