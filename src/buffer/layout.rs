//! Index arithmetic for flat grid storage.

use serde::{Deserialize, Serialize};

use crate::core::{DataError, Result, Vector2i, Vector3i};

fn extent(component: i32) -> usize {
    usize::try_from(component).unwrap_or(0)
}

/// Maps block positions inside `[min, max]` to flat array indices.
///
/// Storage is x-major, then z, then y: consecutive indices walk up a
/// column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockLayout {
    start: Vector3i,
    size: Vector3i,
    end: Vector3i,
    y_line: usize,
    yz_slice: usize,
}

impl BlockLayout {
    /// Layout of a box starting at `start` with `size` blocks per axis.
    ///
    /// A box reaching past the `i32` range ends at the last representable
    /// position on that axis.
    #[must_use]
    pub fn new(start: Vector3i, size: Vector3i) -> Self {
        let y_line = extent(size.y);
        Self {
            start,
            size,
            end: start.saturating_add(size.saturating_sub(Vector3i::ONE)),
            y_line,
            yz_slice: y_line * extent(size.z),
        }
    }

    /// Lowest contained position.
    #[must_use]
    pub fn min(&self) -> Vector3i {
        self.start
    }

    /// Highest contained position.
    #[must_use]
    pub fn max(&self) -> Vector3i {
        self.end
    }

    /// Blocks per axis.
    #[must_use]
    pub fn size(&self) -> Vector3i {
        self.size
    }

    /// Total number of positions.
    #[must_use]
    pub fn volume(&self) -> usize {
        self.yz_slice * extent(self.size.x)
    }

    /// Check if `position` lies inside the box.
    #[must_use]
    pub fn contains(&self, position: Vector3i) -> bool {
        self.volume() > 0 && position.in_bounds(self.start, self.end)
    }

    /// Flat index of `position`.
    pub fn index(&self, position: Vector3i) -> Result<usize> {
        if !self.contains(position) {
            return Err(DataError::PositionOutOfBounds {
                position,
                min: self.start,
                max: self.end,
            });
        }
        let offset = position - self.start;
        Ok(extent(offset.x) * self.yz_slice + extent(offset.z) * self.y_line + extent(offset.y))
    }
}

/// Maps column positions inside `[min, max]` to flat array indices.
///
/// Storage is row-major on z: consecutive indices walk along x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaLayout {
    start: Vector2i,
    size: Vector2i,
    end: Vector2i,
}

impl AreaLayout {
    /// Layout of a rectangle starting at `start` with `size` columns per
    /// axis.
    ///
    /// A rectangle reaching past the `i32` range ends at the last
    /// representable column on that axis.
    #[must_use]
    pub fn new(start: Vector2i, size: Vector2i) -> Self {
        Self {
            start,
            size,
            end: start.saturating_add(size.saturating_sub(Vector2i::ONE)),
        }
    }

    #[must_use]
    pub fn min(&self) -> Vector2i {
        self.start
    }

    #[must_use]
    pub fn max(&self) -> Vector2i {
        self.end
    }

    #[must_use]
    pub fn size(&self) -> Vector2i {
        self.size
    }

    /// Total number of columns.
    #[must_use]
    pub fn area(&self) -> usize {
        extent(self.size.x) * extent(self.size.y)
    }

    /// Check if `position` lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, position: Vector2i) -> bool {
        self.area() > 0 && position.in_bounds(self.start, self.end)
    }

    /// Flat index of `position`.
    pub fn index(&self, position: Vector2i) -> Result<usize> {
        if !self.contains(position) {
            return Err(DataError::PositionOutOfBounds {
                position: position.to_3d(),
                min: self.start.to_3d(),
                max: self.end.to_3d(),
            });
        }
        let offset = position - self.start;
        Ok(extent(offset.x) + extent(offset.y) * extent(self.size.x))
    }
}
