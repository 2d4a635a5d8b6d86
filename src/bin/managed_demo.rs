/*!
 * Managed Lifecycle - Entry Point
 *
 * Constructs 100,000 heap records and prints each one; records are
 * reclaimed at scope exit instead of by an explicit free.
 */

use heap_lifecycle::programs::{run_managed, LifecycleConfig};
use heap_lifecycle::{init_tracing, Heap, RunSpan};
use miette::Result;
use std::io::BufWriter;

fn main() -> Result<()> {
    init_tracing();

    let run = RunSpan::new("managed_demo");
    let _entered = run.enter();

    let heap = Heap::new();
    let mut stdout = BufWriter::new(std::io::stdout().lock());

    let result = run_managed(&heap, &LifecycleConfig::default(), &mut stdout);
    run.record_result(result.is_ok());
    result?;
    Ok(())
}
