/*!
 * Heap Ledger
 *
 * Accounting layer over the global allocator. Storage itself comes from
 * `Box`/`Vec`; the ledger records every live block so allocation and
 * release counts can be observed.
 *
 * ## Features
 *
 * - **Capacity budget**: allocations beyond `HeapConfig::capacity` fail with
 *   `MemoryError::OutOfMemory` instead of reaching the allocator
 * - **Fallible sequences**: slice storage is reserved with
 *   `Vec::try_reserve_exact`, so allocator refusal is a `MemoryError`
 * - **Memory pressure tracking**: warns at 80%, critical at 95% by default
 * - **Peak tracking**: high-water mark of live bytes
 */

use super::handle::Owned;
use super::types::{HeapConfig, HeapStats, MemoryBlock, MemoryError, MemoryPressure, MemoryResult};
use crate::core::types::{Address, BlockId, Size};
use ahash::RandomState;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Heap ledger
///
/// Cloning is cheap and every clone observes the same ledger.
#[derive(Clone)]
pub struct Heap {
    blocks: Arc<DashMap<BlockId, MemoryBlock, RandomState>>,
    next_id: Arc<AtomicU64>,
    used: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    allocations: Arc<AtomicU64>,
    releases: Arc<AtomicU64>,
    config: HeapConfig,
}

impl Heap {
    pub fn new() -> Self {
        Self::with_config(HeapConfig::default())
    }

    /// Create a ledger with a custom byte budget (useful for testing)
    pub fn with_capacity(capacity: Size) -> Self {
        Self::with_config(HeapConfig::default().with_capacity(capacity))
    }

    pub fn with_config(config: HeapConfig) -> Self {
        info!(capacity = config.capacity, "Heap ledger initialized");
        Self {
            blocks: Arc::new(DashMap::with_hasher(RandomState::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            used: Arc::new(AtomicUsize::new(0)),
            peak: Arc::new(AtomicUsize::new(0)),
            allocations: Arc::new(AtomicU64::new(0)),
            releases: Arc::new(AtomicU64::new(0)),
            config,
        }
    }

    pub fn config(&self) -> &HeapConfig {
        &self.config
    }

    /// Move `value` into a fresh heap block
    ///
    /// A refusal by the system allocator itself aborts the process through
    /// the standard allocation error handler; only the ledger budget is
    /// reported as an error here.
    pub fn allocate<T>(&self, value: T) -> MemoryResult<Owned<T>> {
        let size = std::mem::size_of::<T>();
        let reservation = self.reserve(size)?;

        let boxed = Box::new(value);
        let address = &*boxed as *const T as Address;
        let id = self.register(address, size, std::any::type_name::<T>());
        reservation.commit();

        Ok(Owned::new(boxed, id, size, self.clone()))
    }

    /// Allocate a sequence of `len` elements, element `i` produced by `fill(i)`
    pub fn allocate_slice<T, F>(&self, len: usize, fill: F) -> MemoryResult<Owned<[T]>>
    where
        F: FnMut(usize) -> T,
    {
        let element_size = std::mem::size_of::<T>();
        let size = element_size
            .checked_mul(len)
            .ok_or_else(|| MemoryError::AllocationFailed {
                len,
                element_size,
                reason: "requested size overflows usize".to_string(),
            })?;
        let reservation = self.reserve(size)?;

        let mut storage: Vec<T> = Vec::new();
        if let Err(e) = storage.try_reserve_exact(len) {
            error!(len, element_size, error = %e, "System allocator refused sequence storage");
            return Err(MemoryError::AllocationFailed {
                len,
                element_size,
                reason: e.to_string(),
            });
        }
        storage.extend((0..len).map(fill));

        let boxed = storage.into_boxed_slice();
        let address = boxed.as_ptr() as Address;
        let id = self.register(address, size, std::any::type_name::<[T]>());
        reservation.commit();

        Ok(Owned::new(boxed, id, size, self.clone()))
    }

    /// Remove a block from the ledger, returning its size
    ///
    /// Storage is owned by the handle; this only settles the accounting.
    pub fn deallocate(&self, id: BlockId) -> MemoryResult<Size> {
        match self.blocks.remove(&id) {
            Some((_, block)) => {
                self.used.fetch_sub(block.size, Ordering::SeqCst);
                let releases = self.releases.fetch_add(1, Ordering::SeqCst) + 1;
                debug!(
                    block = %id,
                    size = block.size,
                    address = block.address,
                    releases,
                    "Released block"
                );
                Ok(block.size)
            }
            None => {
                warn!(block = %id, "Attempted to release invalid or already released block");
                Err(MemoryError::InvalidHandle(id))
            }
        }
    }

    /// Check if a block is currently live
    pub fn is_live(&self, id: BlockId) -> bool {
        self.blocks.contains_key(&id)
    }

    /// Get the size of a live block
    pub fn block_size(&self, id: BlockId) -> Option<Size> {
        self.blocks.get(&id).map(|entry| entry.value().size)
    }

    /// Snapshot of all live blocks, ordered by id
    pub fn live_blocks(&self) -> Vec<MemoryBlock> {
        let mut blocks: Vec<_> = self.blocks.iter().map(|e| e.value().clone()).collect();
        blocks.sort_by_key(|b| b.id);
        blocks
    }

    pub fn stats(&self) -> HeapStats {
        let used = self.used.load(Ordering::SeqCst);
        HeapStats {
            capacity: self.config.capacity,
            used,
            available: self.config.capacity.saturating_sub(used),
            peak: self.peak.load(Ordering::SeqCst),
            allocations: self.allocations.load(Ordering::SeqCst),
            releases: self.releases.load(Ordering::SeqCst),
            live_blocks: self.blocks.len(),
        }
    }

    /// Get memory info as (total, used, available)
    pub fn info(&self) -> (Size, Size, Size) {
        let used = self.used.load(Ordering::SeqCst);
        (
            self.config.capacity,
            used,
            self.config.capacity.saturating_sub(used),
        )
    }

    pub fn pressure(&self) -> MemoryPressure {
        self.config.pressure(self.used.load(Ordering::SeqCst))
    }

    /// Claim `size` bytes of the budget, failing without side effects
    fn reserve(&self, size: Size) -> MemoryResult<Reservation<'_>> {
        let capacity = self.config.capacity;
        match self
            .used
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |used| {
                used.checked_add(size).filter(|&next| next <= capacity)
            }) {
            Ok(previous) => {
                self.peak.fetch_max(previous + size, Ordering::SeqCst);
                Ok(Reservation {
                    heap: self,
                    size,
                    committed: false,
                })
            }
            Err(used) => {
                let available = capacity.saturating_sub(used);
                error!(
                    requested = size,
                    available,
                    used,
                    total = capacity,
                    "OOM: heap ledger budget exhausted"
                );
                Err(MemoryError::OutOfMemory {
                    requested: size,
                    available,
                    used,
                    total: capacity,
                })
            }
        }
    }

    fn register(&self, address: Address, size: Size, type_name: &'static str) -> BlockId {
        let id = BlockId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.blocks.insert(
            id,
            MemoryBlock {
                id,
                address,
                size,
                type_name,
            },
        );
        let allocations = self.allocations.fetch_add(1, Ordering::SeqCst) + 1;

        let used = self.used.load(Ordering::SeqCst);
        match self.config.pressure(used) {
            level @ (MemoryPressure::High | MemoryPressure::Critical) => {
                warn!(
                    %level,
                    block = %id,
                    size,
                    used,
                    total = self.config.capacity,
                    "Memory pressure after allocation"
                );
            }
            _ => {
                debug!(
                    block = %id,
                    size,
                    address,
                    type_name,
                    allocations,
                    "Allocated block"
                );
            }
        }
        id
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Heap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heap")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

/// Budget claim that is returned unless the allocation completes
struct Reservation<'a> {
    heap: &'a Heap,
    size: Size,
    committed: bool,
}

impl Reservation<'_> {
    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.heap.used.fetch_sub(self.size, Ordering::SeqCst);
        }
    }
}
