mod random;
mod result;

pub use random::{collatz_step, BoundedInts, CollatzRng, KICK_MULTIPLIER, KICK_OFFSET};
pub use result::{Error, Result};
