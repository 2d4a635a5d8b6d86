/*!
 * Ownership Demo - Entry Point
 */

use heap_lifecycle::programs::run_ownership;
use heap_lifecycle::{init_tracing, Heap, RunSpan};
use miette::Result;

fn main() -> Result<()> {
    init_tracing();

    let run = RunSpan::new("ownership_demo");
    let _entered = run.enter();

    let heap = Heap::new();
    let result = run_ownership(&heap, &mut std::io::stdout().lock());
    run.record_result(result.is_ok());
    result?;
    Ok(())
}
