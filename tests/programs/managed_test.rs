/*!
 * Managed Lifecycle Tests
 * Records reclaimed at scope exit instead of by an explicit release
 */

use heap_lifecycle::programs::{run_managed, LifecycleConfig, ManagedReport, Person};
use heap_lifecycle::Heap;
use pretty_assertions::assert_eq;

#[test]
fn test_full_run_prints_100k_quoted_records() {
    let heap = Heap::new();
    let mut out = Vec::new();

    let report = run_managed(&heap, &LifecycleConfig::default(), &mut out).unwrap();

    assert_eq!(
        report,
        ManagedReport {
            constructed: 100_000,
            printed: 100_000,
        }
    );
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 100_000);
    assert!(lines
        .iter()
        .all(|line| *line == "Person{name: \"max musterman\", age: 89.000000}"));
}

#[test]
fn test_full_run_leaves_ledger_balanced() {
    let heap = Heap::new();
    run_managed(&heap, &LifecycleConfig::default(), &mut std::io::sink()).unwrap();

    let stats = heap.stats();
    assert_eq!(stats.allocations, 100_000);
    assert_eq!(stats.releases, 100_000);
    assert!(stats.is_balanced());
    // One record live at a time
    assert_eq!(stats.peak, std::mem::size_of::<Person>());
}
