#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;

pub mod slot;

/// Strategy traits and ready-made strategies.
///
/// This module defines the hash, equality, and allocate/deallocate roles a
/// [`Table`] is built from, along with implementations for string keys,
/// integer keys, and any `Hash + PartialEq` key.
pub mod strategy;

pub mod table;

/// Probe-length and slot-state diagnostics.
#[cfg(feature = "stats")]
pub mod stats;

pub use error::Error;
pub use slot::Slot;
pub use table::Table;
