/*!
 * Shared Ownership Demo
 *
 * One heap record behind reference-counted handles. The ledger block is
 * released when the last handle goes away.
 */

use super::ownership::{new_owned_person, Person};
use super::ProgramError;
use crate::memory::{Heap, Owned};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::rc::Rc;

/// Strong counts observed along the way
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedReport {
    pub counts: Vec<usize>,
    pub live_after_clones_dropped: bool,
}

pub fn run_shared<W: Write>(heap: &Heap, out: &mut W) -> Result<SharedReport, ProgramError> {
    let person: Rc<Owned<Person>> = Rc::new(new_owned_person(heap, "Rainer Zufall", 42.0)?);
    let mut counts = Vec::with_capacity(3);

    // Clones can be handed to other owners and outlive `person`
    let clone1 = Rc::clone(&person);
    let clone2 = Rc::clone(&person);

    counts.push(Rc::strong_count(&person));
    writeln!(out, "Reference count of person: {}", Rc::strong_count(&person))?;

    writeln!(out, "clone1 data: {:?}", **clone1)?;
    writeln!(out, "clone2 data: {:?}", **clone2)?;

    drop(clone1);
    counts.push(Rc::strong_count(&person));
    writeln!(out, "Count after dropping clone1: {}", Rc::strong_count(&person))?;

    drop(clone2);
    counts.push(Rc::strong_count(&person));
    writeln!(out, "Count after dropping clone2: {}", Rc::strong_count(&person))?;

    let live_after_clones_dropped = heap.is_live(person.id());
    // Last reference: the block goes back to the ledger
    drop(person);

    Ok(SharedReport {
        counts,
        live_after_clones_dropped,
    })
}
