//! The `eat` capability and its variants
//!
//! This module defines the shared capability surface:
//! - [`Mammal`]: the trait every variant implements
//! - [`mammal_eats`]: the base behavior, a plain free function
//! - [`dog`], [`person`]: the two concrete variants
//!
//! # Dispatch model
//!
//! There is no automatic chaining from a variant's `eat` to the base
//! behavior.  The base behavior is a free function that a variant calls
//! explicitly, at whatever point in its own implementation it chooses.
//! The trait's default `eat` body is that same free function, so a type
//! that does not override `eat` emits exactly the base line.
//!
//! Output goes through the [`Console`] sink parameter rather than directly
//! to stdout, which keeps `eat` observational and lets tests record the
//! emitted lines.

pub mod dog;
pub mod person;

use crate::terminal::Console;

/// The line emitted by the base behavior, identical from every call site.
pub const MAMMAL_EATING_LINE: &str = "¡El mamífero está comiendo!";

/// The shared base behavior for the `eat` capability.
///
/// Variants delegate to this explicitly from their overrides; it is also
/// the body of [`Mammal::eat`]'s default implementation.
pub fn mammal_eats(console: &mut dyn Console) {
    console.line(MAMMAL_EATING_LINE);
}

/// The capability surface shared by every animal variant.
pub trait Mammal {
    /// Age in years, fixed at construction.  No mutator exists.
    fn age(&self) -> u32;

    /// Emit this animal's eating notification to `console`.
    ///
    /// The default implementation is the base behavior.  Overrides may
    /// call [`mammal_eats`] before or after their own output to include
    /// it; nothing forces them to.
    fn eat(&self, console: &mut dyn Console) {
        mammal_eats(console);
    }
}
