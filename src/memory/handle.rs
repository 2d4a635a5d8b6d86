/*!
 * Owned Heap Handles
 *
 * Exclusive handle to a ledger-tracked heap block with automatic cleanup.
 * Releasing consumes the handle, so a released block can never be read or
 * released twice.
 */

use super::manager::Heap;
use super::types::MemoryResult;
use crate::core::types::{BlockId, Size};
use std::fmt;
use std::ops::{Deref, DerefMut};
use tracing::error;

/// Exclusively owned heap block
///
/// # Example
///
/// ```rust
/// use heap_lifecycle::memory::Heap;
///
/// let heap = Heap::new();
/// let mut cell = heap.allocate(41)?;
/// *cell += 1;
/// assert_eq!(*cell, 42);
/// cell.release()?;
/// assert!(heap.stats().is_balanced());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Owned<T: ?Sized> {
    value: Box<T>,
    id: BlockId,
    size: Size,
    heap: Heap,
    released: bool,
}

impl<T: ?Sized> Owned<T> {
    pub(super) fn new(value: Box<T>, id: BlockId, size: Size, heap: Heap) -> Self {
        Self {
            value,
            id,
            size,
            heap,
            released: false,
        }
    }

    /// Ledger id of the block
    #[inline]
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Bytes accounted to the block
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Release the block now instead of at end of scope
    ///
    /// Returns the number of bytes returned to the ledger.
    pub fn release(mut self) -> MemoryResult<Size> {
        self.released = true;
        self.heap.deallocate(self.id)
    }
}

impl<T: ?Sized> Deref for Owned<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: ?Sized> DerefMut for Owned<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: ?Sized> Drop for Owned<T> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(e) = self.heap.deallocate(self.id) {
            error!(block = %self.id, error = %e, "Handle drop failed to settle ledger");
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Owned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owned")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("value", &&*self.value)
            .finish()
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Owned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.value, f)
    }
}
