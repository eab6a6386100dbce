//! Values stored in a data container.
//!
//! ## DataValue Types
//!
//! - `Bool`: Flags
//! - `Int`: Integers (ids, counts)
//! - `Double`: Floating point (velocity components)
//! - `Text`: Strings (sign lines, catalog ids)
//! - `List`: Ordered values, addressed by index
//! - `Container`: Nested containers, addressed by name

use serde::{Deserialize, Serialize};

use super::container::DataContainer;

/// A node of the container tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Double(f64),
    /// Text value.
    Text(String),
    /// List of values.
    List(Vec<DataValue>),
    /// Nested container.
    Container(DataContainer),
}

impl DataValue {
    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DataValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as double. Integers widen to doubles.
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            DataValue::Double(v) => Some(*v),
            DataValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as list reference if this is a List value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[DataValue]> {
        match self {
            DataValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// Get as container reference if this is a Container value.
    #[must_use]
    pub fn as_container(&self) -> Option<&DataContainer> {
        match self {
            DataValue::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Get as a list of strings. Fails if any element is not Text.
    #[must_use]
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        self.as_list()?
            .iter()
            .map(|v| v.as_text().map(str::to_string))
            .collect()
    }

    /// Get as a list of doubles. Fails if any element is not numeric.
    #[must_use]
    pub fn as_double_list(&self) -> Option<Vec<f64>> {
        self.as_list()?.iter().map(DataValue::as_double).collect()
    }

    /// Name of the variant, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Bool(_) => "bool",
            DataValue::Int(_) => "int",
            DataValue::Double(_) => "double",
            DataValue::Text(_) => "text",
            DataValue::List(_) => "list",
            DataValue::Container(_) => "container",
        }
    }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        DataValue::Bool(v)
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        DataValue::Int(v)
    }
}

impl From<i32> for DataValue {
    fn from(v: i32) -> Self {
        DataValue::Int(v as i64)
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Double(v)
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        DataValue::Text(v)
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        DataValue::Text(v.to_string())
    }
}

impl From<Vec<String>> for DataValue {
    fn from(v: Vec<String>) -> Self {
        DataValue::List(v.into_iter().map(DataValue::Text).collect())
    }
}

impl From<Vec<f64>> for DataValue {
    fn from(v: Vec<f64>) -> Self {
        DataValue::List(v.into_iter().map(DataValue::Double).collect())
    }
}

impl From<Vec<DataValue>> for DataValue {
    fn from(v: Vec<DataValue>) -> Self {
        DataValue::List(v)
    }
}

impl From<DataContainer> for DataValue {
    fn from(c: DataContainer) -> Self {
        DataValue::Container(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_value_int() {
        let val = DataValue::Int(5);
        assert_eq!(val.as_int(), Some(5));
        assert_eq!(val.as_double(), Some(5.0));
        assert_eq!(val.as_bool(), None);
    }

    #[test]
    fn test_data_value_double() {
        let val = DataValue::Double(0.25);
        assert_eq!(val.as_double(), Some(0.25));
        assert_eq!(val.as_int(), None);
    }

    #[test]
    fn test_data_value_text() {
        let val = DataValue::Text("top".to_string());
        assert_eq!(val.as_text(), Some("top"));
        assert_eq!(val.type_name(), "text");
    }

    #[test]
    fn test_string_list() {
        let val: DataValue = vec!["a".to_string(), "b".to_string()].into();
        assert_eq!(val.as_string_list(), Some(vec!["a".to_string(), "b".to_string()]));

        let mixed = DataValue::List(vec![DataValue::from("a"), DataValue::Int(1)]);
        assert_eq!(mixed.as_string_list(), None);
    }

    #[test]
    fn test_double_list() {
        let val = DataValue::List(vec![DataValue::Int(1), DataValue::Double(2.5)]);
        assert_eq!(val.as_double_list(), Some(vec![1.0, 2.5]));
    }

    #[test]
    fn test_data_value_from() {
        let int: DataValue = 42i32.into();
        assert_eq!(int.as_int(), Some(42));

        let boolean: DataValue = true.into();
        assert_eq!(boolean.as_bool(), Some(true));

        let text: DataValue = "keyword".into();
        assert_eq!(text.as_text(), Some("keyword"));

        let nested: DataValue = DataContainer::new().into();
        assert!(nested.as_container().is_some_and(DataContainer::is_empty));
    }
}
