/*!
 * Bulk Allocation Tests
 */

use heap_lifecycle::programs::bulk::{allocate_scalar, allocate_sequence};
use heap_lifecycle::programs::{run_bulk, BulkConfig};
use heap_lifecycle::{Heap, MemoryError};
use pretty_assertions::assert_eq;

#[test]
fn test_scalar_and_sequence_contents() {
    let heap = Heap::new();
    let report = run_bulk(&heap, &BulkConfig::default()).unwrap();

    assert_eq!(report.scalar, 42);
    assert_eq!(report.sequence, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    for (i, value) in report.sequence.iter().enumerate() {
        assert_eq!(*value, i as i32);
    }
}

#[test]
fn test_every_handle_released_once() {
    let heap = Heap::new();
    let report = run_bulk(&heap, &BulkConfig::default()).unwrap();

    assert_eq!(report.stats.allocations, 2);
    assert_eq!(report.stats.releases, 2);
    assert_eq!(report.stats.live_blocks, 0);
    assert_eq!(heap.stats(), report.stats);
}

#[test]
fn test_blocks_live_until_released() {
    let heap = Heap::new();
    let scalar = allocate_scalar(&heap).unwrap();
    let seq = allocate_sequence(&heap, 10).unwrap();

    assert_eq!(heap.stats().live_blocks, 2);
    assert_eq!(heap.block_size(seq.id()), Some(40));

    scalar.release().unwrap();
    seq.release().unwrap();
    assert!(heap.stats().is_balanced());
}

#[test]
fn test_longer_sequence() {
    let heap = Heap::new();
    let config = BulkConfig::default().with_sequence_len(1_000);
    let report = run_bulk(&heap, &config).unwrap();

    assert_eq!(report.sequence.len(), 1_000);
    assert_eq!(report.sequence[999], 999);
    assert_eq!(report.bytes_released, 4 + 4_000);
}

#[test]
fn test_budget_failure_is_propagated() {
    let heap = Heap::with_capacity(2);
    let err = run_bulk(&heap, &BulkConfig::default()).unwrap_err();
    assert!(matches!(err, MemoryError::OutOfMemory { requested: 4, .. }));
}
