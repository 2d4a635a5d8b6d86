/*!
 * Bulk Allocation
 * Scalar cell and populated sequence, both released before return
 */

use crate::core::limits::{BULK_SCALAR_VALUE, BULK_SEQUENCE_LEN};
use crate::memory::{Heap, HeapStats, MemoryError, MemoryResult, Owned};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Bulk program configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkConfig {
    pub scalar: i32,
    pub sequence_len: usize,
}

impl BulkConfig {
    pub fn with_sequence_len(mut self, len: usize) -> Self {
        self.sequence_len = len;
        self
    }
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            scalar: BULK_SCALAR_VALUE,
            sequence_len: BULK_SEQUENCE_LEN,
        }
    }
}

/// What the routine observed before releasing its storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkReport {
    pub scalar: i32,
    pub sequence: Vec<i32>,
    pub bytes_released: usize,
    pub stats: HeapStats,
}

/// Allocate a single integer cell holding the default scalar
pub fn allocate_scalar(heap: &Heap) -> MemoryResult<Owned<i32>> {
    allocate_scalar_with(heap, BULK_SCALAR_VALUE)
}

pub fn allocate_scalar_with(heap: &Heap, value: i32) -> MemoryResult<Owned<i32>> {
    let mut cell = heap.allocate(0)?;
    *cell = value;
    Ok(cell)
}

fn index_out_of_range(len: usize) -> MemoryError {
    MemoryError::AllocationFailed {
        len,
        element_size: std::mem::size_of::<i32>(),
        reason: format!("index {} does not fit in i32", len - 1),
    }
}

/// Allocate `len` integers, index `i` holding `i`
///
/// Lengths whose last index does not fit in `i32` are refused before any
/// storage is claimed.
pub fn allocate_sequence(heap: &Heap, len: usize) -> MemoryResult<Owned<[i32]>> {
    if i32::try_from(len.saturating_sub(1)).is_err() {
        return Err(index_out_of_range(len));
    }

    let mut seq = heap.allocate_slice(len, |_| 0)?;
    for (i, slot) in seq.iter_mut().enumerate() {
        *slot = i32::try_from(i).map_err(|_| index_out_of_range(len))?;
    }
    Ok(seq)
}

/// Allocate, populate, then release both blocks
pub fn run_bulk(heap: &Heap, config: &BulkConfig) -> MemoryResult<BulkReport> {
    let scalar = allocate_scalar_with(heap, config.scalar)?;
    let sequence = allocate_sequence(heap, config.sequence_len)?;

    let observed_scalar = *scalar;
    let observed_sequence = sequence.to_vec();

    let mut bytes_released = scalar.release()?;
    bytes_released += sequence.release()?;

    let stats = heap.stats();
    info!(
        allocations = stats.allocations,
        releases = stats.releases,
        bytes_released,
        "Bulk routine finished"
    );

    Ok(BulkReport {
        scalar: observed_scalar,
        sequence: observed_sequence,
        bytes_released,
        stats,
    })
}
