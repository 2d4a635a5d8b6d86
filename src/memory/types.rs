/*!
 * Memory Types
 * Errors, block metadata, statistics and configuration for the heap ledger
 */

use crate::core::limits::{
    DEFAULT_HEAP_CAPACITY, PRESSURE_CRITICAL_RATIO, PRESSURE_MEDIUM_RATIO,
    PRESSURE_WARNING_RATIO,
};
use crate::core::types::{Address, BlockId, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Out of memory: requested {requested} bytes, available {available} bytes ({used} used / {total} total)")]
    #[diagnostic(
        code(memory::out_of_memory),
        help("The heap ledger capacity is exhausted. Release handles or raise HeapConfig::capacity.")
    )]
    OutOfMemory {
        requested: usize,
        available: usize,
        used: usize,
        total: usize,
    },

    #[error("Allocation of {len} elements ({element_size} bytes each) failed: {reason}")]
    #[diagnostic(
        code(memory::allocation_failed),
        help("The system allocator refused the request or its size overflowed.")
    )]
    AllocationFailed {
        len: usize,
        element_size: usize,
        reason: String,
    },

    #[error("Invalid or already released block: {0}")]
    #[diagnostic(
        code(memory::invalid_handle),
        help("The block is not live in this ledger. It was released already or belongs to another heap.")
    )]
    InvalidHandle(BlockId),
}

/// Ledger entry for one live heap block
#[derive(Debug, Clone, Serialize)]
pub struct MemoryBlock {
    pub id: BlockId,
    pub address: Address,
    pub size: Size,
    pub type_name: &'static str,
}

/// Heap ledger statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapStats {
    pub capacity: Size,
    pub used: Size,
    pub available: Size,
    pub peak: Size,
    pub allocations: u64,
    pub releases: u64,
    pub live_blocks: usize,
}

impl HeapStats {
    /// True when every allocated block has been released
    pub fn is_balanced(&self) -> bool {
        self.allocations == self.releases && self.live_blocks == 0 && self.used == 0
    }

    pub fn usage_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.used as f64 / self.capacity as f64
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Heap ledger configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeapConfig {
    /// Maximum bytes the ledger lets be live at once
    pub capacity: Size,
    pub medium_threshold: f64,
    pub warning_threshold: f64,
    pub critical_threshold: f64,
}

impl HeapConfig {
    pub fn with_capacity(mut self, capacity: Size) -> Self {
        self.capacity = capacity;
        self
    }

    /// Usage ratios at which pressure turns medium, high and critical
    pub fn with_thresholds(mut self, medium: f64, warning: f64, critical: f64) -> Self {
        self.medium_threshold = medium;
        self.warning_threshold = warning;
        self.critical_threshold = critical;
        self
    }

    /// Classify a usage level against the configured thresholds
    pub fn pressure(&self, used: Size) -> MemoryPressure {
        if self.capacity == 0 {
            return MemoryPressure::Critical;
        }
        let usage_ratio = used as f64 / self.capacity as f64;

        if usage_ratio >= self.critical_threshold {
            MemoryPressure::Critical
        } else if usage_ratio >= self.warning_threshold {
            MemoryPressure::High
        } else if usage_ratio >= self.medium_threshold {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HEAP_CAPACITY,
            medium_threshold: PRESSURE_MEDIUM_RATIO,
            warning_threshold: PRESSURE_WARNING_RATIO,
            critical_threshold: PRESSURE_CRITICAL_RATIO,
        }
    }
}
