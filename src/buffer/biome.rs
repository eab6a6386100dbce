//! Biome id buffers.

use std::sync::Arc;

use super::layout::AreaLayout;
use crate::core::{DataError, Result, Vector2i};

/// A rectangle of biome ids, writable in place.
#[derive(Clone, Debug, PartialEq)]
pub struct MutableBiomeBuffer {
    layout: AreaLayout,
    biomes: Vec<u8>,
}

impl MutableBiomeBuffer {
    /// A buffer filled with biome id 0.
    #[must_use]
    pub fn new(start: Vector2i, size: Vector2i) -> Self {
        let layout = AreaLayout::new(start, size);
        Self {
            biomes: vec![0; layout.area()],
            layout,
        }
    }

    /// Wrap existing ids laid out row by row along x.
    ///
    /// `None` if `biomes` does not match the area of the rectangle.
    #[must_use]
    pub fn from_raw(biomes: Vec<u8>, start: Vector2i, size: Vector2i) -> Option<Self> {
        let layout = AreaLayout::new(start, size);
        (biomes.len() == layout.area()).then_some(Self { layout, biomes })
    }

    /// The id at `position`.
    pub fn get(&self, position: Vector2i) -> Result<u8> {
        Ok(self.biomes[self.layout.index(position)?])
    }

    /// Write `id` at `position`.
    pub fn set(&mut self, position: Vector2i, id: u8) -> Result<()> {
        let index = self.layout.index(position)?;
        self.biomes[index] = id;
        Ok(())
    }

    /// Write `id` at every position.
    pub fn fill(&mut self, id: u8) {
        self.biomes.fill(id);
    }

    #[must_use]
    pub fn contains(&self, position: Vector2i) -> bool {
        self.layout.contains(position)
    }

    #[must_use]
    pub fn min(&self) -> Vector2i {
        self.layout.min()
    }

    #[must_use]
    pub fn max(&self) -> Vector2i {
        self.layout.max()
    }

    #[must_use]
    pub fn size(&self) -> Vector2i {
        self.layout.size()
    }

    /// An independent mutable copy.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Freeze a copy of the current contents.
    #[must_use]
    pub fn immutable_copy(&self) -> ImmutableBiomeBuffer {
        ImmutableBiomeBuffer {
            layout: self.layout,
            biomes: Arc::from(self.biomes.as_slice()),
        }
    }

    /// Raw ids in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.biomes
    }
}

/// A frozen rectangle of biome ids. Clones share storage.
#[derive(Clone, Debug, PartialEq)]
pub struct ImmutableBiomeBuffer {
    layout: AreaLayout,
    biomes: Arc<[u8]>,
}

impl ImmutableBiomeBuffer {
    /// The id at `position`.
    pub fn get(&self, position: Vector2i) -> Result<u8> {
        Ok(self.biomes[self.layout.index(position)?])
    }

    #[must_use]
    pub fn contains(&self, position: Vector2i) -> bool {
        self.layout.contains(position)
    }

    #[must_use]
    pub fn min(&self) -> Vector2i {
        self.layout.min()
    }

    #[must_use]
    pub fn max(&self) -> Vector2i {
        self.layout.max()
    }

    #[must_use]
    pub fn size(&self) -> Vector2i {
        self.layout.size()
    }

    /// Another handle on the same contents.
    #[must_use]
    pub fn immutable_copy(&self) -> Self {
        self.clone()
    }

    /// A writable copy; writes never reach this buffer.
    #[must_use]
    pub fn mutable_copy(&self) -> MutableBiomeBuffer {
        MutableBiomeBuffer {
            layout: self.layout,
            biomes: self.biomes.to_vec(),
        }
    }

    /// Raw ids in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.biomes
    }

    /// A read-only window onto `[min, max]`, sharing this buffer's storage.
    ///
    /// Both corners must lie inside the buffer, and `max` must not be below
    /// `min` on either axis.
    pub fn view(&self, min: Vector2i, max: Vector2i) -> Result<BiomeView> {
        BiomeView::whole(self).view(min, max)
    }
}

/// A window onto part of an [`ImmutableBiomeBuffer`].
///
/// Views share the buffer's storage. A view addresses columns either in
/// the buffer's coordinates or, after [`relative`](Self::relative), from a
/// zero origin.
#[derive(Clone, Debug, PartialEq)]
pub struct BiomeView {
    layout: AreaLayout,
    biomes: Arc<[u8]>,
    min: Vector2i,
    max: Vector2i,
    offset: Vector2i,
}

impl BiomeView {
    fn whole(buffer: &ImmutableBiomeBuffer) -> Self {
        Self {
            layout: buffer.layout,
            biomes: Arc::clone(&buffer.biomes),
            min: buffer.min(),
            max: buffer.max(),
            offset: Vector2i::default(),
        }
    }

    fn check(&self, position: Vector2i) -> Result<()> {
        if self.contains(position) {
            return Ok(());
        }
        Err(DataError::PositionOutOfBounds {
            position: position.to_3d(),
            min: self.min.to_3d(),
            max: self.max.to_3d(),
        })
    }

    /// The id at `position`.
    pub fn get(&self, position: Vector2i) -> Result<u8> {
        self.check(position)?;
        Ok(self.biomes[self.layout.index(position + self.offset)?])
    }

    #[must_use]
    pub fn contains(&self, position: Vector2i) -> bool {
        position.in_bounds(self.min, self.max)
    }

    #[must_use]
    pub fn min(&self) -> Vector2i {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Vector2i {
        self.max
    }

    #[must_use]
    pub fn size(&self) -> Vector2i {
        self.max.saturating_sub(self.min).saturating_add(Vector2i::ONE)
    }

    /// A narrower window onto `[min, max]`, in this view's coordinates.
    pub fn view(&self, min: Vector2i, max: Vector2i) -> Result<Self> {
        self.check(min)?;
        self.check(max)?;
        if !max.in_bounds(min, self.max) {
            return Err(DataError::PositionOutOfBounds {
                position: max.to_3d(),
                min: min.to_3d(),
                max: self.max.to_3d(),
            });
        }
        Ok(Self {
            min,
            max,
            ..self.clone()
        })
    }

    /// The same window addressed from `(0, 0)`.
    #[must_use]
    pub fn relative(&self) -> Self {
        Self {
            min: Vector2i::default(),
            max: self.size() - Vector2i::ONE,
            offset: self.offset + self.min,
            ..self.clone()
        }
    }

    fn collect(&self) -> MutableBiomeBuffer {
        let mut biomes = Vec::with_capacity(AreaLayout::new(self.min, self.size()).area());
        for z in self.min.y..=self.max.y {
            for x in self.min.x..=self.max.x {
                biomes.extend(self.get(Vector2i::new(x, z)).ok());
            }
        }
        MutableBiomeBuffer {
            layout: AreaLayout::new(self.min, self.size()),
            biomes,
        }
    }

    /// A writable copy of the window, keeping this view's coordinates.
    #[must_use]
    pub fn mutable_copy(&self) -> MutableBiomeBuffer {
        self.collect()
    }

    /// A frozen copy of the window with storage of its own.
    #[must_use]
    pub fn immutable_copy(&self) -> ImmutableBiomeBuffer {
        self.collect().immutable_copy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DataError, Vector3i};

    #[test]
    fn test_out_of_bounds_reports_columns() {
        let buffer = MutableBiomeBuffer::new(Vector2i::new(0, 0), Vector2i::new(16, 16));
        let error = buffer.get(Vector2i::new(3, 16)).unwrap_err();
        assert_eq!(
            error,
            DataError::PositionOutOfBounds {
                position: Vector3i::new(3, 0, 16),
                min: Vector3i::new(0, 0, 0),
                max: Vector3i::new(15, 0, 15),
            }
        );
    }

    #[test]
    fn test_snapshot_isolation() {
        let mut buffer = MutableBiomeBuffer::new(Vector2i::new(-8, -8), Vector2i::new(8, 8));
        buffer.set(Vector2i::new(-1, -1), 4).unwrap();

        let frozen = buffer.immutable_copy();
        buffer.fill(9);

        assert_eq!(frozen.get(Vector2i::new(-1, -1)).unwrap(), 4);
        assert_eq!(frozen.get(Vector2i::new(-8, -8)).unwrap(), 0);
        assert_eq!(buffer.get(Vector2i::new(-8, -8)).unwrap(), 9);
        assert_eq!(frozen.immutable_copy(), frozen);
    }

    fn numbered() -> ImmutableBiomeBuffer {
        // Each id is x + 4 * z for the 4 x 4 area at the origin.
        let raw: Vec<u8> = (0..16).collect();
        MutableBiomeBuffer::from_raw(raw, Vector2i::new(0, 0), Vector2i::new(4, 4))
            .unwrap()
            .immutable_copy()
    }

    #[test]
    fn test_view_bounds() {
        let buffer = numbered();
        let view = buffer.view(Vector2i::new(1, 1), Vector2i::new(2, 3)).unwrap();

        assert_eq!(view.size(), Vector2i::new(2, 3));
        assert_eq!(view.get(Vector2i::new(1, 1)).unwrap(), 5);
        assert_eq!(view.get(Vector2i::new(2, 3)).unwrap(), 14);
        assert!(!view.contains(Vector2i::new(0, 0)));
        assert_eq!(
            view.get(Vector2i::new(3, 1)).unwrap_err(),
            DataError::PositionOutOfBounds {
                position: Vector3i::new(3, 0, 1),
                min: Vector3i::new(1, 0, 1),
                max: Vector3i::new(2, 0, 3),
            }
        );

        assert!(buffer.view(Vector2i::new(0, 0), Vector2i::new(4, 0)).is_err());
        assert!(buffer.view(Vector2i::new(2, 2), Vector2i::new(1, 3)).is_err());
        assert!(view.view(Vector2i::new(0, 1), Vector2i::new(2, 2)).is_err());

        let narrower = view.view(Vector2i::new(2, 2), Vector2i::new(2, 3)).unwrap();
        assert_eq!(narrower.get(Vector2i::new(2, 2)).unwrap(), 10);
        assert!(narrower.get(Vector2i::new(1, 2)).is_err());
    }

    #[test]
    fn test_relative_view() {
        let buffer = numbered();
        let relative = buffer
            .view(Vector2i::new(2, 1), Vector2i::new(3, 2))
            .unwrap()
            .relative();

        assert_eq!(relative.min(), Vector2i::new(0, 0));
        assert_eq!(relative.max(), Vector2i::new(1, 1));
        assert_eq!(relative.get(Vector2i::new(0, 0)).unwrap(), 6);
        assert_eq!(relative.get(Vector2i::new(1, 1)).unwrap(), 11);
        assert!(relative.get(Vector2i::new(2, 0)).is_err());

        let inner = relative.view(Vector2i::new(1, 0), Vector2i::new(1, 1)).unwrap().relative();
        assert_eq!(inner.get(Vector2i::new(0, 0)).unwrap(), 7);
        assert_eq!(inner.get(Vector2i::new(0, 1)).unwrap(), 11);
    }

    #[test]
    fn test_view_copies() {
        let buffer = numbered();
        let view = buffer.view(Vector2i::new(1, 2), Vector2i::new(3, 3)).unwrap();

        let frozen = view.immutable_copy();
        assert_eq!(frozen.min(), Vector2i::new(1, 2));
        assert_eq!(frozen.as_slice(), &[9, 10, 11, 13, 14, 15]);

        let mut thawed = view.relative().mutable_copy();
        assert_eq!(thawed.min(), Vector2i::new(0, 0));
        assert_eq!(thawed.get(Vector2i::new(2, 1)).unwrap(), 15);
        thawed.fill(0);
        assert_eq!(view.get(Vector2i::new(3, 3)).unwrap(), 15);
        assert_eq!(buffer.get(Vector2i::new(3, 3)).unwrap(), 15);
    }

    #[test]
    fn test_from_raw_layout() {
        let raw: Vec<u8> = (0..6).collect();
        let buffer = MutableBiomeBuffer::from_raw(raw, Vector2i::new(0, 0), Vector2i::new(3, 2)).unwrap();
        assert_eq!(buffer.get(Vector2i::new(2, 0)).unwrap(), 2);
        assert_eq!(buffer.get(Vector2i::new(0, 1)).unwrap(), 3);
        assert!(MutableBiomeBuffer::from_raw(vec![0; 5], Vector2i::new(0, 0), Vector2i::new(3, 2)).is_none());
    }
}
