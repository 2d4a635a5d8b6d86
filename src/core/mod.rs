/*!
 * Core Module
 * Fundamental types and constants
 */

pub mod limits;
pub mod types;

pub use types::*;
