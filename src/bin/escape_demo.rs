/*!
 * Escape Demo - Entry Point
 */

use heap_lifecycle::programs::run_escape;
use heap_lifecycle::{init_tracing, Heap, RunSpan};
use miette::Result;

fn main() -> Result<()> {
    init_tracing();

    let run = RunSpan::new("escape_demo");
    let _entered = run.enter();

    let heap = Heap::new();
    let result = run_escape(&heap);
    run.record_result(result.is_ok());
    result?;
    Ok(())
}
