/*!
 * Managed Lifecycle
 *
 * Same loop as the person lifecycle, with no explicit release: every
 * record is printed and then goes out of scope, and `Drop` hands its block
 * back to the ledger. At most one record is live at a time.
 */

use super::person::{new_person, LifecycleConfig, Person};
use super::ProgramError;
use crate::memory::Heap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use tracing::info;

/// Record line with the name in double quotes
pub struct Quoted<'p, 'a>(pub &'p Person<'a>);

impl fmt::Display for Quoted<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person{{name: {:?}, age: {:.6}}}", self.0.name, self.0.age)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedReport {
    pub constructed: u64,
    pub printed: u64,
}

/// Construct and print `config.cycles` records, leaving cleanup to scope exit
pub fn run_managed<W: Write>(
    heap: &Heap,
    config: &LifecycleConfig,
    out: &mut W,
) -> Result<ManagedReport, ProgramError> {
    let mut report = ManagedReport::default();

    for _ in 0..config.cycles {
        let person = new_person(heap, &config.name, config.age)?;
        report.constructed += 1;

        writeln!(out, "{}", Quoted(&person))?;
        report.printed += 1;
    }
    out.flush()?;

    info!(
        constructed = report.constructed,
        printed = report.printed,
        "Managed lifecycle finished"
    );
    Ok(report)
}
