//! Labeled animal roster
//!
//! A [`Menagerie`] owns its animals as trait objects and feeds them either
//! one at a time by label or all together in admission order.  The roster
//! never inspects which concrete variant it holds; dispatch picks the
//! right `eat` implementation.

use std::error::Error;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::animal::Mammal;
use crate::terminal::Console;

/// Errors from roster operations.
///
/// Feeding itself cannot fail; the only fallible step is resolving a
/// label to an admitted animal.
#[derive(Debug, Clone, PartialEq)]
pub enum MenagerieError {
    /// No animal was admitted under the requested label
    UnknownAnimal { label: String },
}

impl fmt::Display for MenagerieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenagerieError::UnknownAnimal { label } => {
                write!(f, "no animal admitted under label '{}'", label)
            }
        }
    }
}

impl Error for MenagerieError {}

/// A collection of labeled animals, fed in admission order.
#[derive(Default)]
pub struct Menagerie {
    animals: Vec<(String, Box<dyn Mammal>)>,
    index: FxHashMap<String, usize>, // label -> position in `animals`
}

impl Menagerie {
    pub fn new() -> Self {
        Menagerie {
            animals: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Admit an animal under `label`.
    ///
    /// Re-admitting an existing label replaces the previous animal but
    /// keeps its admission slot, so `feed_all` order is unaffected.
    pub fn admit(&mut self, label: impl Into<String>, animal: Box<dyn Mammal>) {
        let label = label.into();
        if let Some(&pos) = self.index.get(&label) {
            self.animals[pos].1 = animal;
        } else {
            self.index.insert(label.clone(), self.animals.len());
            self.animals.push((label, animal));
        }
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Labels in admission order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.animals.iter().map(|(label, _)| label.as_str())
    }

    /// Age of the animal admitted under `label`, if any.
    pub fn age_of(&self, label: &str) -> Option<u32> {
        let &pos = self.index.get(label)?;
        Some(self.animals[pos].1.age())
    }

    /// Feed one animal, writing its notification lines to `console`.
    pub fn feed(&self, label: &str, console: &mut dyn Console) -> Result<(), MenagerieError> {
        match self.index.get(label) {
            Some(&pos) => {
                self.animals[pos].1.eat(console);
                Ok(())
            }
            None => Err(MenagerieError::UnknownAnimal {
                label: label.to_string(),
            }),
        }
    }

    /// Feed every animal, in admission order.
    pub fn feed_all(&self, console: &mut dyn Console) {
        for (_, animal) in &self.animals {
            animal.eat(console);
        }
    }
}
