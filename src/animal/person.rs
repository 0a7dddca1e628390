//! Person variant: base line first, own line second

use super::{mammal_eats, Mammal};
use crate::terminal::Console;

/// The line a person emits after delegating to the base behavior.
pub const PERSON_EATING_LINE: &str = "Hey, soy humano y estoy comiendo...";

/// A person with an occupation and an age, both fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    occupation: String,
    age: u32,
}

impl Person {
    pub fn new(occupation: impl Into<String>, age: u32) -> Self {
        Person {
            occupation: occupation.into(),
            age,
        }
    }

    pub fn occupation(&self) -> &str {
        &self.occupation
    }
}

impl Mammal for Person {
    fn age(&self) -> u32 {
        self.age
    }

    fn eat(&self, console: &mut dyn Console) {
        // Base behavior runs before the person's own line
        mammal_eats(console);
        console.line(PERSON_EATING_LINE);
    }
}
