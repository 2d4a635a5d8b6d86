/*!
 * Heap Lifecycle
 * Allocate, use and release heap storage through owned, ledger-tracked handles
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod programs;

// Re-exports
pub use crate::core::types::{Address, BlockId, Size};
pub use memory::{Heap, HeapConfig, HeapStats, MemoryError, MemoryResult, Owned};
pub use monitoring::{init_tracing, RunSpan};
pub use programs::ProgramError;
