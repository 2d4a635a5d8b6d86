/*!
 * Monitoring
 * Structured tracing for program runs
 */

mod tracer;

pub use tracer::{generate_run_id, init_tracing, RunSpan, TRACE_JSON_ENV};
