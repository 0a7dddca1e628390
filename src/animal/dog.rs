//! Dog variant: own line first, base line second

use super::{mammal_eats, Mammal};
use crate::terminal::Console;

/// The line a dog emits before delegating to the base behavior.
pub const DOG_EATING_LINE: &str = "Wof wof...";

/// A dog with a name and an age, both fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    name: String,
    age: u32,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Dog {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Mammal for Dog {
    fn age(&self) -> u32 {
        self.age
    }

    fn eat(&self, console: &mut dyn Console) {
        console.line(DOG_EATING_LINE);
        // Base behavior runs after the dog's own line
        mammal_eats(console);
    }
}
