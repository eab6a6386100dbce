//! Path addressing into a [`DataContainer`](super::DataContainer).
//!
//! A query is a sequence of named and indexed segments written as
//! `Velocity.X` or `Lines[2]`. Names address container entries, indices
//! address list elements.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DataError, Result};

/// One segment of a [`Query`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryPart {
    /// Named entry of a container.
    Key(String),
    /// Element of a list.
    Index(usize),
}

impl From<&str> for QueryPart {
    fn from(key: &str) -> Self {
        QueryPart::Key(key.to_string())
    }
}

impl From<String> for QueryPart {
    fn from(key: String) -> Self {
        QueryPart::Key(key)
    }
}

impl From<usize> for QueryPart {
    fn from(index: usize) -> Self {
        QueryPart::Index(index)
    }
}

/// A path into a data container.
///
/// ```
/// use hostdata::container::{Query, QueryPart};
///
/// let query = Query::parse("Sign.Lines[2]").unwrap();
/// assert_eq!(query.len(), 3);
/// assert_eq!(query.parts()[2], QueryPart::Index(2));
/// assert_eq!(query.to_string(), "Sign.Lines[2]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    parts: SmallVec<[QueryPart; 4]>,
}

impl Query {
    /// The empty query, addressing the container root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dotted/indexed path.
    ///
    /// Every segment needs a name; each name may be followed by any number
    /// of `[n]` indices. The empty string parses to the root query.
    pub fn parse(path: &str) -> Result<Self> {
        let mut parts = SmallVec::new();
        if path.is_empty() {
            return Ok(Self { parts });
        }

        for segment in path.split('.') {
            let (name, mut rest) = match segment.find('[') {
                Some(open) => (&segment[..open], &segment[open..]),
                None => (segment, ""),
            };
            if name.is_empty() {
                return Err(DataError::invalid_query(path, "empty segment"));
            }
            if name.contains(']') {
                return Err(DataError::invalid_query(path, "unbalanced index brackets"));
            }
            parts.push(QueryPart::Key(name.to_string()));

            while !rest.is_empty() {
                let Some(inner) = rest.strip_prefix('[') else {
                    return Err(DataError::invalid_query(path, "unexpected text after index"));
                };
                let Some(close) = inner.find(']') else {
                    return Err(DataError::invalid_query(path, "unbalanced index brackets"));
                };
                let index = inner[..close]
                    .parse::<usize>()
                    .map_err(|_| DataError::invalid_query(path, "index is not a number"))?;
                parts.push(QueryPart::Index(index));
                rest = &inner[close + 1..];
            }
        }

        Ok(Self { parts })
    }

    /// Parse a path, treating anything malformed as plain dotted names.
    #[must_use]
    pub fn of(path: &str) -> Self {
        Self::parse(path).unwrap_or_else(|_| Self {
            parts: path.split('.').map(QueryPart::from).collect(),
        })
    }

    /// Append a segment (builder pattern).
    #[must_use]
    pub fn then(mut self, part: impl Into<QueryPart>) -> Self {
        self.parts.push(part.into());
        self
    }

    /// A new query extending this one by a named segment.
    #[must_use]
    pub fn child(&self, key: impl Into<String>) -> Self {
        self.clone().then(QueryPart::Key(key.into()))
    }

    /// A new query extending this one by an index segment.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.clone().then(QueryPart::Index(index))
    }

    /// The query without its last segment. `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.parts.split_last()?;
        Some(Self {
            parts: parent.iter().cloned().collect(),
        })
    }

    /// All segments, first to last.
    #[must_use]
    pub fn parts(&self) -> &[QueryPart] {
        &self.parts
    }

    /// The last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&QueryPart> {
        self.parts.last()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if this is the root query.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<&str> for Query {
    fn from(path: &str) -> Self {
        Self::of(path)
    }
}

impl From<String> for Query {
    fn from(path: String) -> Self {
        Self::of(&path)
    }
}

impl From<&Query> for Query {
    fn from(query: &Query) -> Self {
        query.clone()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            match part {
                QueryPart::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                QueryPart::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
