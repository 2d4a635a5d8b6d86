/*!
 * Core Types
 * Common types used across the crate
 */

use serde::{Deserialize, Serialize};

/// Address type for heap blocks (pointer value, for logging only)
pub type Address = usize;

/// Size type for memory operations
pub type Size = usize;

/// Ledger identifier for a heap block
///
/// Ids are handed out monotonically and never reused, so a released id can
/// never alias a newer block (addresses can, once the allocator recycles them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(u64);

impl BlockId {
    #[inline]
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
