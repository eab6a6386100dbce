//! Block id buffers.

use std::sync::Arc;

use super::layout::BlockLayout;
use crate::core::{Result, Vector3i};

/// A box of block ids, writable in place.
///
/// ## Example
///
/// ```
/// use hostdata::buffer::MutableBlockBuffer;
/// use hostdata::core::Vector3i;
///
/// let mut buffer = MutableBlockBuffer::new(Vector3i::new(0, 0, 0), Vector3i::new(16, 256, 16));
/// buffer.set(Vector3i::new(3, 64, 7), 1).unwrap();
///
/// let snapshot = buffer.immutable_copy();
/// buffer.set(Vector3i::new(3, 64, 7), 2).unwrap();
///
/// assert_eq!(snapshot.get(Vector3i::new(3, 64, 7)).unwrap(), 1);
/// assert!(buffer.get(Vector3i::new(16, 0, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MutableBlockBuffer {
    layout: BlockLayout,
    blocks: Vec<u16>,
}

impl MutableBlockBuffer {
    /// A buffer of air (id 0).
    #[must_use]
    pub fn new(start: Vector3i, size: Vector3i) -> Self {
        let layout = BlockLayout::new(start, size);
        Self {
            blocks: vec![0; layout.volume()],
            layout,
        }
    }

    /// Wrap existing ids laid out x-major, then z, then y.
    ///
    /// `None` if `blocks` does not match the volume of the box.
    #[must_use]
    pub fn from_raw(blocks: Vec<u16>, start: Vector3i, size: Vector3i) -> Option<Self> {
        let layout = BlockLayout::new(start, size);
        (blocks.len() == layout.volume()).then_some(Self { layout, blocks })
    }

    /// The id at `position`.
    pub fn get(&self, position: Vector3i) -> Result<u16> {
        Ok(self.blocks[self.layout.index(position)?])
    }

    /// Write `id` at `position`.
    pub fn set(&mut self, position: Vector3i, id: u16) -> Result<()> {
        let index = self.layout.index(position)?;
        self.blocks[index] = id;
        Ok(())
    }

    /// Write `id` at every position.
    pub fn fill(&mut self, id: u16) {
        self.blocks.fill(id);
    }

    #[must_use]
    pub fn contains(&self, position: Vector3i) -> bool {
        self.layout.contains(position)
    }

    #[must_use]
    pub fn min(&self) -> Vector3i {
        self.layout.min()
    }

    #[must_use]
    pub fn max(&self) -> Vector3i {
        self.layout.max()
    }

    #[must_use]
    pub fn size(&self) -> Vector3i {
        self.layout.size()
    }

    /// An independent mutable copy.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Freeze a copy of the current contents.
    #[must_use]
    pub fn immutable_copy(&self) -> ImmutableBlockBuffer {
        ImmutableBlockBuffer {
            layout: self.layout,
            blocks: Arc::from(self.blocks.as_slice()),
        }
    }

    /// Raw ids in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.blocks
    }
}

/// A frozen box of block ids. Clones share storage.
#[derive(Clone, Debug, PartialEq)]
pub struct ImmutableBlockBuffer {
    layout: BlockLayout,
    blocks: Arc<[u16]>,
}

impl ImmutableBlockBuffer {
    /// The id at `position`.
    pub fn get(&self, position: Vector3i) -> Result<u16> {
        Ok(self.blocks[self.layout.index(position)?])
    }

    #[must_use]
    pub fn contains(&self, position: Vector3i) -> bool {
        self.layout.contains(position)
    }

    #[must_use]
    pub fn min(&self) -> Vector3i {
        self.layout.min()
    }

    #[must_use]
    pub fn max(&self) -> Vector3i {
        self.layout.max()
    }

    #[must_use]
    pub fn size(&self) -> Vector3i {
        self.layout.size()
    }

    /// Another handle on the same contents.
    #[must_use]
    pub fn immutable_copy(&self) -> Self {
        self.clone()
    }

    /// A writable copy; writes never reach this buffer.
    #[must_use]
    pub fn mutable_copy(&self) -> MutableBlockBuffer {
        MutableBlockBuffer {
            layout: self.layout,
            blocks: self.blocks.to_vec(),
        }
    }

    /// Raw ids in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.blocks
    }
}
