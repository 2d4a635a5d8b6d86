/*!
 * Programs
 * The allocate/use/release demonstrations built on the heap ledger
 */

pub mod bulk;
pub mod escape;
pub mod managed;
pub mod ownership;
pub mod person;
pub mod shared;

use crate::memory::MemoryError;
use miette::Diagnostic;
use thiserror::Error;

pub use bulk::{run_bulk, BulkConfig, BulkReport};
pub use escape::{run_escape, EscapeReport};
pub use managed::{run_managed, ManagedReport};
pub use ownership::run_ownership;
pub use person::{free_person, new_person, run_lifecycle, LifecycleConfig, LifecycleReport, Person};
pub use shared::{run_shared, SharedReport};

/// Errors a program run can end with
#[derive(Error, Debug, Diagnostic)]
pub enum ProgramError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),

    #[error("Failed to write program output: {0}")]
    #[diagnostic(
        code(program::output),
        help("Standard output was closed or is not writable.")
    )]
    Output(#[from] std::io::Error),
}
