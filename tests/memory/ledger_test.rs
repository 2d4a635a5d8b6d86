/*!
 * Heap Ledger Tests
 * Allocation, release and budget handling through the public API
 */

use heap_lifecycle::memory::{Heap, HeapConfig, MemoryError, MemoryPressure};
use pretty_assertions::assert_eq;

#[test]
fn test_heap_initialization() {
    let heap = Heap::new();
    let (total, used, available) = heap.info();

    assert_eq!(total, 1024 * 1024 * 1024); // 1GB
    assert_eq!(used, 0);
    assert_eq!(available, total);
    assert_eq!(heap.pressure(), MemoryPressure::Low);
}

#[test]
fn test_allocation_and_release() {
    let heap = Heap::new();

    let cell = heap.allocate(42i32).unwrap();
    let (_, used_before, _) = heap.info();
    assert_eq!(used_before, 4);

    assert_eq!(cell.release().unwrap(), 4);
    let (_, used_after, _) = heap.info();
    assert_eq!(used_after, 0);
}

#[test]
fn test_ids_never_reused() {
    let heap = Heap::new();
    let first = heap.allocate(1u32).unwrap();
    let first_id = first.id();
    first.release().unwrap();

    let second = heap.allocate(1u32).unwrap();
    assert_ne!(second.id(), first_id);
    assert!(!heap.is_live(first_id));
    assert!(heap.is_live(second.id()));
}

#[test]
fn test_out_of_memory() {
    let heap = Heap::with_capacity(16);
    let _held = heap.allocate([0u8; 12]).unwrap();

    match heap.allocate([0u8; 8]) {
        Err(MemoryError::OutOfMemory {
            requested,
            available,
            used,
            total,
        }) => {
            assert_eq!(requested, 8);
            assert_eq!(available, 4);
            assert_eq!(used, 12);
            assert_eq!(total, 16);
        }
        other => panic!("expected OutOfMemory, got {:?}", other.map(|o| o.id())),
    }

    let stats = heap.stats();
    assert_eq!(stats.allocations, 1);
    assert_eq!(stats.used, 12);
}

#[test]
fn test_exact_capacity_fits() {
    let heap = Heap::with_capacity(8);
    let cell = heap.allocate(0u64).unwrap();
    assert_eq!(heap.info().2, 0);
    assert_eq!(heap.pressure(), MemoryPressure::Critical);
    drop(cell);
    assert_eq!(heap.info().2, 8);
}

#[test]
fn test_dropped_handle_releases() {
    let heap = Heap::with_capacity(1024);
    let seq = heap.allocate_slice(16, |i| i as u8).unwrap();
    let id = seq.id();
    drop(seq);

    assert!(!heap.is_live(id));
    assert!(heap.stats().is_balanced());
}

#[test]
fn test_clones_share_ledger() {
    let heap = Heap::with_config(HeapConfig::default().with_capacity(4096));
    let view = heap.clone();

    let _cell = heap.allocate(3u16).unwrap();
    assert_eq!(view.stats().live_blocks, 1);
    assert_eq!(view.config().capacity, 4096);
}

#[test]
fn test_handles_move_across_threads() {
    let heap = Heap::new();
    let seq = heap.allocate_slice(4, |i| i as u64 * 2).unwrap();

    let sum = std::thread::spawn(move || {
        let sum: u64 = seq.iter().sum();
        seq.release().unwrap();
        sum
    })
    .join()
    .unwrap();

    assert_eq!(sum, 12);
    assert!(heap.stats().is_balanced());
}

#[test]
fn test_error_diagnostic_code() {
    use miette::Diagnostic;

    let heap = Heap::with_capacity(0);
    let err = heap.allocate(1u8).unwrap_err();
    assert_eq!(err.code().unwrap().to_string(), "memory::out_of_memory");
    assert!(err.to_string().starts_with("Out of memory: requested 1 bytes"));
}
