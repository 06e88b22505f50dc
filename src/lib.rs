//! Deterministic pseudo-random numbers from a Collatz (3n+1) orbit.
//!
//! Not suitable for anything security related: the whole sequence follows
//! from the seed.

pub mod env;
pub mod stats;
mod util;

pub use env::{Clock, SystemClock};
pub use util::{
    collatz_step, BoundedInts, CollatzRng, Error, Result, KICK_MULTIPLIER, KICK_OFFSET,
};
