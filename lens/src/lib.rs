//! # Lens
//!
//! **Focus on part of an immutable value, read it, replace it**
//!
//! A [`Lens`] pairs a getter with a setter. The getter pulls a sub-value (the
//! *focus*) out of a larger state; the setter builds a new state with the
//! focus replaced. The original state is only ever borrowed.
//!
//! ## Quick Start
//!
//! ```rust
//! use lens::{lens, over, set, view};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Address {
//!     city: String,
//!     zip: String,
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     name: String,
//!     address: Arc<Address>,
//! }
//!
//! let city = lens(
//!     |user: &User| user.address.city.clone(),
//!     |city, user: &User| User {
//!         address: Arc::new(Address {
//!             city,
//!             ..(*user.address).clone()
//!         }),
//!         ..user.clone()
//!     },
//! );
//!
//! let alice = User {
//!     name: "Alice".into(),
//!     address: Arc::new(Address {
//!         city: "Wonderland".into(),
//!         zip: "12345".into(),
//!     }),
//! };
//!
//! assert_eq!(view(&city, &alice), "Wonderland");
//!
//! let moved = set(&city, "Oz".to_string(), &alice);
//! assert_eq!(moved.address.city, "Oz");
//! assert_eq!(alice.address.city, "Wonderland");
//!
//! let shouting = over(&city, |c| c.to_uppercase(), &alice);
//! assert_eq!(shouting.address.city, "WONDERLAND");
//! ```
//!
//! ## Structural sharing
//!
//! How much of the old state the new one reuses is entirely up to the setter.
//! Holding sub-structures behind `Arc` and rebuilding only the path down to
//! the changed field keeps every untouched branch pointer-identical.
//!
//! ## Nesting
//!
//! There is no composition combinator. A lens into a nested record is written
//! by calling the inner lens's `view`/`set` from inside the outer getter and
//! setter.

pub mod macros;
pub mod operations;
pub mod optic;

pub use operations::{lens, over, set, try_over, view};
pub use optic::{Getter, Lens, Setter};

#[cfg(test)]
mod tests;
