/*!
 * Person Lifecycle
 *
 * Constructs a record on the heap, destroys it and checks the returned
 * handle, over and over.
 *
 * `free_person` always hands back `None`, so the print branch in
 * `run_lifecycle` never executes.
 */

use super::ProgramError;
use crate::core::limits::{LIFECYCLE_AGE, LIFECYCLE_CYCLES, LIFECYCLE_NAME};
use crate::memory::{Heap, MemoryResult, Owned};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

/// Record with a borrowed name
///
/// The name belongs to the caller and outlives the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Person<'a> {
    pub name: &'a str,
    pub age: f64,
}

impl fmt::Display for Person<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person{{name: '{}', age: {:.6}}}", self.name, self.age)
    }
}

/// Allocate a record on the heap. The age is taken as given.
pub fn new_person<'a>(heap: &Heap, name: &'a str, age: f64) -> MemoryResult<Owned<Person<'a>>> {
    heap.allocate(Person { name, age })
}

/// Release a record and return the null handle
pub fn free_person(person: Owned<Person<'_>>) -> MemoryResult<Option<Owned<Person<'_>>>> {
    person.release()?;
    Ok(None)
}

/// Lifecycle program configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    pub cycles: u64,
    pub name: String,
    pub age: f64,
}

impl LifecycleConfig {
    pub fn with_cycles(mut self, cycles: u64) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn with_person(mut self, name: impl Into<String>, age: f64) -> Self {
        self.name = name.into();
        self.age = age;
        self
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            cycles: LIFECYCLE_CYCLES,
            name: LIFECYCLE_NAME.to_string(),
            age: LIFECYCLE_AGE,
        }
    }
}

/// Counts observed by one lifecycle run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleReport {
    pub constructed: u64,
    pub destroyed: u64,
    pub printed: u64,
}

/// Run the construct/destroy loop, writing any surviving record to `out`
pub fn run_lifecycle<W: Write>(
    heap: &Heap,
    config: &LifecycleConfig,
    out: &mut W,
) -> Result<LifecycleReport, ProgramError> {
    let mut report = LifecycleReport::default();

    for cycle in 0..config.cycles {
        let person = new_person(heap, &config.name, config.age)?;
        report.constructed += 1;

        let person = free_person(person)?;
        report.destroyed += 1;

        let Some(person) = person else {
            continue;
        };
        debug!(cycle, "Record survived release");
        writeln!(out, "{}", *person)?;
        report.printed += 1;
    }

    info!(
        constructed = report.constructed,
        destroyed = report.destroyed,
        printed = report.printed,
        "Lifecycle finished"
    );
    Ok(report)
}
