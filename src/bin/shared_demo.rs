/*!
 * Shared Ownership Demo - Entry Point
 */

use heap_lifecycle::programs::run_shared;
use heap_lifecycle::{init_tracing, Heap, RunSpan};
use miette::Result;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let run = RunSpan::new("shared_demo");
    let _entered = run.enter();

    let heap = Heap::new();
    let result = run_shared(&heap, &mut std::io::stdout().lock());
    run.record_result(result.is_ok());
    let report = result?;

    info!(counts = ?report.counts, "Reference counts observed");
    Ok(())
}
