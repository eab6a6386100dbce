//! Error types for the data framework.
//!
//! Only programmer errors and structural failures are errors here:
//!
//! - A value or facet that is simply not present is `None`, not an error.
//! - A mutation rejected by business rules is reported through a
//!   [`DataTransactionResult`](crate::transaction::DataTransactionResult)
//!   with type `Failure`, not an error.

use thiserror::Error;

use super::math::Vector3i;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised by the data framework.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    /// A required mutator was invoked for a key with no registered
    /// processor, or the processor rejects the target.
    ///
    /// Guard with `supports(key)` before calling `set` / `with`.
    #[error("unsupported attribute `{key}` for {target}; check supports() first")]
    UnsupportedAttribute {
        key: &'static str,
        target: &'static str,
    },

    /// A processor was registered twice for the same identity.
    #[error("{kind} processor already registered for `{identity}`")]
    RegistrationConflict {
        kind: &'static str,
        identity: String,
    },

    /// A host refused a value that breaks one of its limits.
    #[error("value for `{key}` rejected: {reason}")]
    ValueRejected {
        key: &'static str,
        reason: &'static str,
    },

    /// A container path could not be resolved for writing.
    #[error("invalid query `{query}`: {reason}")]
    InvalidQuery { query: String, reason: &'static str },

    /// A grid buffer was addressed outside its bounds.
    #[error("position {position} out of bounds [{min}, {max}]")]
    PositionOutOfBounds {
        position: Vector3i,
        min: Vector3i,
        max: Vector3i,
    },
}

impl DataError {
    /// Create an unsupported attribute error.
    pub fn unsupported(key: &'static str, target: &'static str) -> Self {
        Self::UnsupportedAttribute { key, target }
    }

    /// Create a registration conflict error.
    pub fn conflict(kind: &'static str, identity: impl Into<String>) -> Self {
        Self::RegistrationConflict {
            kind,
            identity: identity.into(),
        }
    }

    /// Create a rejected value error.
    pub fn rejected(key: &'static str, reason: &'static str) -> Self {
        Self::ValueRejected { key, reason }
    }

    /// Create an invalid query error.
    pub fn invalid_query(query: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidQuery {
            query: query.into(),
            reason,
        }
    }

    /// Check if this is an unsupported attribute error.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedAttribute { .. })
    }

    /// Check if a host refused the value.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::ValueRejected { .. })
    }

    /// Check if this is a registration conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::RegistrationConflict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let err = DataError::unsupported("velocity", "SignData");
        assert!(err.is_unsupported());
        assert_eq!(
            err.to_string(),
            "unsupported attribute `velocity` for SignData; check supports() first"
        );
    }

    #[test]
    fn test_conflict_display() {
        let err = DataError::conflict("value", "sign_lines");
        assert!(err.is_conflict());
        assert!(!err.is_unsupported());
        assert_eq!(
            err.to_string(),
            "value processor already registered for `sign_lines`"
        );
    }

    #[test]
    fn test_rejected_display() {
        let err = DataError::rejected("velocity", "component above the limit");
        assert!(err.is_rejected());
        assert!(!err.is_unsupported());
        assert_eq!(
            err.to_string(),
            "value for `velocity` rejected: component above the limit"
        );
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = DataError::PositionOutOfBounds {
            position: Vector3i::new(16, 0, 0),
            min: Vector3i::new(0, 0, 0),
            max: Vector3i::new(15, 255, 15),
        };
        assert_eq!(
            err.to_string(),
            "position (16, 0, 0) out of bounds [(0, 0, 0), (15, 255, 15)]"
        );
    }
}
