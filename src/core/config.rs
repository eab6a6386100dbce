//! Framework configuration.
//!
//! Collaborators configure the built-in processors at startup by providing a
//! `DataConfig`. The processors read it once at construction and never
//! consult it again, so a sealed registry behaves the same for its whole
//! lifetime.

use serde::{Deserialize, Serialize};

/// Configuration for the built-in processors.
///
/// ## Example
///
/// ```
/// use hostdata::core::DataConfig;
///
/// let config = DataConfig::default()
///     .with_max_velocity(4.0)
///     .with_max_sign_line_chars(64);
///
/// assert_eq!(config.sign_line_count, 4);
/// assert_eq!(config.max_velocity, 4.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Number of text lines a sign facet carries.
    pub sign_line_count: usize,

    /// Maximum characters per sign line.
    ///
    /// Longer lines are rejected when a sign facet is offered to a host.
    pub max_sign_line_chars: usize,

    /// Maximum absolute velocity on any axis.
    ///
    /// Faster velocities are rejected when offered to an entity.
    pub max_velocity: f64,
}

/// Lines on a sign unless configured otherwise.
pub const DEFAULT_SIGN_LINE_COUNT: usize = 4;

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            sign_line_count: DEFAULT_SIGN_LINE_COUNT,
            max_sign_line_chars: 384,
            max_velocity: 10.0,
        }
    }
}

impl DataConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sign lines.
    #[must_use]
    pub fn with_sign_line_count(mut self, count: usize) -> Self {
        self.sign_line_count = count;
        self
    }

    /// Set the per-line character limit for signs.
    #[must_use]
    pub fn with_max_sign_line_chars(mut self, max: usize) -> Self {
        self.max_sign_line_chars = max;
        self
    }

    /// Set the per-axis velocity limit.
    #[must_use]
    pub fn with_max_velocity(mut self, max: f64) -> Self {
        self.max_velocity = max;
        self
    }
}
