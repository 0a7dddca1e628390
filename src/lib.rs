//! # Introduction
//!
//! Menagerie demonstrates one reusable design contract: a capability
//! (`eat`) declared once on a shared trait, implemented polymorphically by
//! a closed set of variants, where each variant's implementation may
//! explicitly invoke the shared base behavior at a position of its own
//! choosing.  Delegation is opt-in and orderable, never automatic.
//!
//! ## Dispatch pipeline
//!
//! ```text
//! Variant (Dog | Person) → Mammal::eat → Console lines
//! ```
//!
//! 1. [`animal`] — the [`animal::Mammal`] trait, the shared base behavior
//!    [`animal::mammal_eats`], and the two variants.
//! 2. [`roster`] — a labeled [`roster::Menagerie`] that feeds its animals
//!    in admission order.
//! 3. [`terminal`] — line-oriented output sinks: a stdout console and a
//!    recording [`terminal::MockTerminal`] for tests.
//!
//! ## Delegation orderings
//!
//! - `Dog::eat` emits its own line first, then calls
//!   [`animal::mammal_eats`].
//! - `Person::eat` calls [`animal::mammal_eats`] first, then emits its own
//!   line.
//!
//! Both orderings produce exactly two lines per invocation, and the base
//! line is textually identical no matter which variant delegates to it.

pub mod animal;
pub mod roster;
pub mod terminal;
