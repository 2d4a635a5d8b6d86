/*!
 * Escape Demo
 *
 * A value returned to the caller must live on the heap; a value that never
 * leaves its frame can stay on the stack. Only the escaping counter shows
 * up in the ledger.
 */

use crate::core::limits::{ESCAPING_COUNTER, LOCAL_COUNTER};
use crate::memory::{Heap, MemoryResult, Owned};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub x: i64,
}

/// Heap-allocate a counter that outlives this frame
pub fn escape_to_caller(heap: &Heap) -> MemoryResult<Owned<Counter>> {
    heap.allocate(Counter {
        x: ESCAPING_COUNTER,
    })
}

/// Build, bump and return a counter by value; nothing touches the heap
pub fn stay_local() -> Counter {
    let mut t = Counter { x: LOCAL_COUNTER };
    t.x += 1;
    t
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeReport {
    pub escaped: i64,
    pub local: i64,
    pub heap_allocations: u64,
}

pub fn run_escape(heap: &Heap) -> MemoryResult<EscapeReport> {
    let before = heap.stats().allocations;

    let escaped = escape_to_caller(heap)?;
    let local = stay_local();

    let report = EscapeReport {
        escaped: escaped.x,
        local: local.x,
        heap_allocations: heap.stats().allocations - before,
    };
    escaped.release()?;

    info!(
        escaped = report.escaped,
        local = report.local,
        heap_allocations = report.heap_allocations,
        "Escape demo finished"
    );
    Ok(report)
}
