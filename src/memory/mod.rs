/*!
 * Memory Module
 * Heap ledger, owned handles and memory types
 */

pub mod handle;
pub mod manager;
pub mod types;

// Re-export for convenience
pub use handle::Owned;
pub use manager::Heap;
pub use types::*;
