//! lj-core: Shared types for the Lucky Jewels draw system
//!
//! This crate provides the foundational types used across all Lucky Jewels crates.

mod error;
mod participant;
mod ticket;
mod winner;

pub use error::*;
pub use participant::*;
pub use ticket::*;
pub use winner::*;
