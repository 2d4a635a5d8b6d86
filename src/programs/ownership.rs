/*!
 * Ownership Demo
 * Moving a heap record into a consuming printer versus borrowing it
 */

use super::ProgramError;
use crate::memory::{Heap, MemoryResult, Owned};
use std::io::Write;

/// Record that owns its name
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: f64,
}

pub fn new_owned_person(
    heap: &Heap,
    name: impl Into<String>,
    age: f64,
) -> MemoryResult<Owned<Person>> {
    heap.allocate(Person {
        name: name.into(),
        age,
    })
}

/// Print and take ownership; the record is released before returning
pub fn print_person<W: Write>(person: Owned<Person>, out: &mut W) -> Result<(), ProgramError> {
    writeln!(out, "{} is {} years old.", person.name, person.age)?;
    person.release()?;
    Ok(())
}

/// Print through a borrow; the caller keeps the record
pub fn print_person_borrowed<W: Write>(person: &Person, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{} is {} years old.", person.name, person.age)
}

pub fn run_ownership<W: Write>(heap: &Heap, out: &mut W) -> Result<(), ProgramError> {
    let person = new_owned_person(heap, "Rainer Zufall", 42.0)?;
    // `person` is moved; using it after this line does not compile
    let person1 = person;
    print_person(person1, out)?;

    {
        let person2 = new_owned_person(heap, "Anna Zufall", 13.0)?;
        print_person_borrowed(&person2, out)?;
        print_person_borrowed(&person2, out)?;
    } // person2 released here

    Ok(())
}
