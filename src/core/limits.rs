/*!
 * Limits and Constants
 *
 * Central location for the defaults used by the heap ledger and the demo
 * programs. Grouped by domain.
 */

// =============================================================================
// HEAP LEDGER
// =============================================================================

/// Default ledger capacity (1GB)
/// Used as default capacity for the heap ledger
pub const DEFAULT_HEAP_CAPACITY: usize = 1024 * 1024 * 1024;

/// Usage ratio at which allocations are logged as high pressure
pub const PRESSURE_WARNING_RATIO: f64 = 0.80;

/// Usage ratio at which allocations are logged as critical pressure
pub const PRESSURE_CRITICAL_RATIO: f64 = 0.95;

/// Usage ratio reported as medium pressure
pub const PRESSURE_MEDIUM_RATIO: f64 = 0.60;

// =============================================================================
// LIFECYCLE PROGRAM
// =============================================================================

/// Construct/destroy cycles run by the lifecycle program
pub const LIFECYCLE_CYCLES: u64 = 100_000;

/// Name given to every constructed record
pub const LIFECYCLE_NAME: &str = "max musterman";

/// Age given to every constructed record
pub const LIFECYCLE_AGE: f64 = 89.0;

// =============================================================================
// BULK PROGRAM
// =============================================================================

/// Value written into the scalar cell
pub const BULK_SCALAR_VALUE: i32 = 42;

/// Length of the populated sequence
pub const BULK_SEQUENCE_LEN: usize = 10;

// =============================================================================
// ESCAPE PROGRAM
// =============================================================================

/// Initial value of the counter that escapes to the caller
pub const ESCAPING_COUNTER: i64 = 12;

/// Initial value of the counter that stays in its frame
pub const LOCAL_COUNTER: i64 = 25;
