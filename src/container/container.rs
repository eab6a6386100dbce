//! The data container tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::query::{Query, QueryPart};
use super::value::DataValue;
use crate::core::{DataError, Result};

/// A tree of named entries used to move facets across the serialization
/// boundary.
///
/// The container knows nothing about bytes; it derives serde traits so a
/// persistence collaborator can encode it with whatever format it uses.
///
/// ## Example
///
/// ```
/// use hostdata::container::DataContainer;
///
/// let mut container = DataContainer::new();
/// container
///     .set("Velocity.X", 0.5)
///     .set("Velocity.Y", -1.0)
///     .set("Lines", vec!["hello".to_string(), "world".to_string()]);
///
/// assert_eq!(container.get_double("Velocity.X"), Some(0.5));
/// assert_eq!(container.get_string("Lines[1]"), Some("world"));
/// assert!(container.get_double("Velocity.Z").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataContainer {
    entries: BTreeMap<String, DataValue>,
}

impl DataContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the container has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Top-level entry names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Look up the value at `query`.
    #[must_use]
    pub fn get(&self, query: impl Into<Query>) -> Option<&DataValue> {
        let query = query.into();
        let (first, rest) = query.parts().split_first()?;
        let QueryPart::Key(name) = first else {
            return None;
        };
        let mut current = self.entries.get(name)?;
        for part in rest {
            current = match (part, current) {
                (QueryPart::Key(key), DataValue::Container(c)) => c.entries.get(key)?,
                (QueryPart::Index(i), DataValue::List(items)) => items.get(*i)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Check if a value exists at `query`.
    #[must_use]
    pub fn contains(&self, query: impl Into<Query>) -> bool {
        self.get(query).is_some()
    }

    /// Get a bool at `query`.
    #[must_use]
    pub fn get_bool(&self, query: impl Into<Query>) -> Option<bool> {
        self.get(query).and_then(DataValue::as_bool)
    }

    /// Get an integer at `query`.
    #[must_use]
    pub fn get_int(&self, query: impl Into<Query>) -> Option<i64> {
        self.get(query).and_then(DataValue::as_int)
    }

    /// Get a double at `query`. Integers widen.
    #[must_use]
    pub fn get_double(&self, query: impl Into<Query>) -> Option<f64> {
        self.get(query).and_then(DataValue::as_double)
    }

    /// Get a string at `query`.
    #[must_use]
    pub fn get_string(&self, query: impl Into<Query>) -> Option<&str> {
        self.get(query).and_then(DataValue::as_text)
    }

    /// Get a list at `query`.
    #[must_use]
    pub fn get_list(&self, query: impl Into<Query>) -> Option<&[DataValue]> {
        self.get(query).and_then(DataValue::as_list)
    }

    /// Get a list of strings at `query`.
    #[must_use]
    pub fn get_string_list(&self, query: impl Into<Query>) -> Option<Vec<String>> {
        self.get(query).and_then(DataValue::as_string_list)
    }

    /// Get a list of doubles at `query`.
    #[must_use]
    pub fn get_double_list(&self, query: impl Into<Query>) -> Option<Vec<f64>> {
        self.get(query).and_then(DataValue::as_double_list)
    }

    /// Get a nested container at `query`.
    #[must_use]
    pub fn get_container(&self, query: impl Into<Query>) -> Option<&DataContainer> {
        self.get(query).and_then(DataValue::as_container)
    }

    /// Write `value` at `query`, creating intermediate containers and lists.
    ///
    /// An index may address an existing element or the slot one past the
    /// end (append). Fails if the path crosses a value of the wrong shape.
    pub fn try_set(
        &mut self,
        query: impl Into<Query>,
        value: impl Into<DataValue>,
    ) -> Result<&mut Self> {
        let query = query.into();
        set_in_entries(&mut self.entries, query.parts(), value.into(), &query)?;
        Ok(self)
    }

    /// Write `value` at `query`, logging and skipping malformed paths.
    pub fn set(&mut self, query: impl Into<Query>, value: impl Into<DataValue>) -> &mut Self {
        let query = query.into();
        if let Err(error) = set_in_entries(&mut self.entries, query.parts(), value.into(), &query) {
            warn!(domain = "container", query = %query, %error, "container write skipped");
        }
        self
    }

    /// Write `value` at `query` (builder pattern).
    #[must_use]
    pub fn with(mut self, query: impl Into<Query>, value: impl Into<DataValue>) -> Self {
        self.set(query, value);
        self
    }

    /// Remove and return the value at `query`.
    pub fn remove(&mut self, query: impl Into<Query>) -> Option<DataValue> {
        let query = query.into();
        let (last, parent) = query.parts().split_last()?;

        if parent.is_empty() {
            return match last {
                QueryPart::Key(key) => self.entries.remove(key),
                QueryPart::Index(_) => None,
            };
        }

        match (last, self.get_mut(parent)?) {
            (QueryPart::Key(key), DataValue::Container(c)) => c.entries.remove(key),
            (QueryPart::Index(i), DataValue::List(items)) if *i < items.len() => {
                Some(items.remove(*i))
            }
            _ => None,
        }
    }

    fn get_mut(&mut self, parts: &[QueryPart]) -> Option<&mut DataValue> {
        let (first, rest) = parts.split_first()?;
        let QueryPart::Key(name) = first else {
            return None;
        };
        let mut current = self.entries.get_mut(name)?;
        for part in rest {
            current = match (part, current) {
                (QueryPart::Key(key), DataValue::Container(c)) => c.entries.get_mut(key)?,
                (QueryPart::Index(i), DataValue::List(items)) => items.get_mut(*i)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

fn empty_for(part: &QueryPart) -> DataValue {
    match part {
        QueryPart::Key(_) => DataValue::Container(DataContainer::new()),
        QueryPart::Index(_) => DataValue::List(Vec::new()),
    }
}

fn set_in_entries(
    entries: &mut BTreeMap<String, DataValue>,
    parts: &[QueryPart],
    value: DataValue,
    query: &Query,
) -> Result<()> {
    let Some((first, rest)) = parts.split_first() else {
        return Err(DataError::invalid_query(query.to_string(), "empty query"));
    };
    let QueryPart::Key(name) = first else {
        return Err(DataError::invalid_query(
            query.to_string(),
            "containers are addressed by name",
        ));
    };
    let Some(next) = rest.first() else {
        entries.insert(name.clone(), value);
        return Ok(());
    };
    let created = !entries.contains_key(name);
    let slot = entries.entry(name.clone()).or_insert_with(|| empty_for(next));
    let outcome = set_in_value(slot, rest, value, query);
    // Drop intermediates created for a write that never landed.
    if outcome.is_err() && created {
        entries.remove(name);
    }
    outcome
}

fn set_in_value(
    slot: &mut DataValue,
    parts: &[QueryPart],
    value: DataValue,
    query: &Query,
) -> Result<()> {
    match (&parts[0], slot) {
        (QueryPart::Key(_), DataValue::Container(c)) => set_in_entries(&mut c.entries, parts, value, query),
        (QueryPart::Index(i), DataValue::List(items)) => {
            let i = *i;
            if i > items.len() {
                return Err(DataError::invalid_query(
                    query.to_string(),
                    "index past the end of the list",
                ));
            }
            let rest = &parts[1..];
            let Some(next) = rest.first() else {
                if i == items.len() {
                    items.push(value);
                } else {
                    items[i] = value;
                }
                return Ok(());
            };
            let created = i == items.len();
            if created {
                items.push(empty_for(next));
            }
            let outcome = set_in_value(&mut items[i], rest, value, query);
            if outcome.is_err() && created {
                items.pop();
            }
            outcome
        }
        (QueryPart::Key(_), _) => Err(DataError::invalid_query(
            query.to_string(),
            "path crosses a non-container value",
        )),
        (QueryPart::Index(_), _) => Err(DataError::invalid_query(
            query.to_string(),
            "index applied to a non-list value",
        )),
    }
}
