/*!
 * Person Lifecycle - Entry Point
 *
 * Constructs and destroys a heap record 100,000 times. Any record that
 * survived release would be printed to stdout; none does.
 */

use heap_lifecycle::programs::{run_lifecycle, LifecycleConfig};
use heap_lifecycle::{init_tracing, Heap, RunSpan};
use miette::Result;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let run = RunSpan::new("person_lifecycle");
    let _entered = run.enter();

    let heap = Heap::new();
    let config = LifecycleConfig::default();
    let mut stdout = std::io::stdout().lock();

    let result = run_lifecycle(&heap, &config, &mut stdout);
    run.record_result(result.is_ok());
    let report = result?;

    let stats = heap.stats();
    info!(
        constructed = report.constructed,
        printed = report.printed,
        allocations = stats.allocations,
        releases = stats.releases,
        peak = stats.peak,
        "Heap balanced: {}",
        stats.is_balanced()
    );
    Ok(())
}
