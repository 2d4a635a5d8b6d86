/*!
 * Bulk Allocation - Entry Point
 *
 * Allocates a scalar cell and a ten-element sequence, populates them and
 * releases both. Writes nothing to stdout.
 */

use heap_lifecycle::programs::{run_bulk, BulkConfig};
use heap_lifecycle::{init_tracing, Heap, RunSpan};
use miette::{IntoDiagnostic, Result};
use std::process::ExitCode;
use tracing::info;

fn main() -> Result<ExitCode> {
    init_tracing();

    let run = RunSpan::new("bulk_alloc");
    let _entered = run.enter();

    let heap = Heap::new();
    let result = run_bulk(&heap, &BulkConfig::default());
    run.record_result(result.is_ok());
    let report = result?;

    let stats = serde_json::to_string(&report.stats).into_diagnostic()?;
    info!(%stats, "Final ledger");
    Ok(ExitCode::SUCCESS)
}
