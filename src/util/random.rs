use std::marker::PhantomData;

use log::debug;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use super::{Error, Result};
use crate::env::{Clock, SystemClock};

pub const KICK_OFFSET: u64 = 0xDEADBEEF;
pub const KICK_MULTIPLIER: u64 = 1664525;

// Consecutive Collatz states are correlated, only every third is used.
const ADVANCES_PER_DRAW: usize = 3;

const FLOAT_SCALE: u32 = 1_000_000_000;

pub fn collatz_step(n: &BigInt) -> BigInt {
    if (n % 2u32).is_zero() {
        n / 2u32
    } else {
        n * 3u32 + 1u32
    }
}

/// Pseudo-random generator driven by the Collatz recurrence. Not `Clone`,
/// and not synchronized: use one generator per thread.
#[derive(Debug)]
pub struct CollatzRng {
    seed: BigInt,
    state: BigInt,
    steps_taken: u64,
}

impl CollatzRng {
    pub fn new() -> Self {
        Self::with_clock(&SystemClock)
    }

    pub fn seeded(seed: impl Into<BigInt>) -> Self {
        let seed = seed.into();
        Self {
            state: seed.clone(),
            seed,
            steps_taken: 0,
        }
    }

    pub fn with_clock(clock: &dyn Clock) -> Self {
        let seed = clock.now_millis();
        debug!("seeding collatz generator from clock: {}", seed);
        Self::seeded(seed)
    }

    pub fn from_seed(seed: Option<BigInt>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    pub fn seed(&self) -> &BigInt {
        &self.seed
    }

    pub fn state(&self) -> &BigInt {
        &self.state
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Advance the state by one Collatz step and return the new state.
    /// A state of 1 or less is first kicked onto a new trajectory.
    pub fn advance(&mut self) -> BigInt {
        if self.state <= BigInt::one() {
            self.state =
                (&self.state + &self.seed + self.steps_taken + KICK_OFFSET) * KICK_MULTIPLIER;
        }
        self.state = collatz_step(&self.state);
        self.steps_taken += 1;
        self.state.clone()
    }

    pub fn next_int(&mut self) -> BigInt {
        self.advance()
    }

    /// Return `n` with `low <= n <= high`.
    ///
    /// Fails with `InvalidRange` when `high < low`; the generator is left
    /// untouched in that case.
    pub fn bounded_int<T>(&mut self, low: T, high: T) -> Result<T>
    where
        T: Into<BigInt> + TryFrom<BigInt>,
    {
        let (low, range_size) = checked_range(low.into(), high.into())?;
        Ok(narrow(self.draw(&low, &range_size)))
    }

    pub fn ints<T>(&mut self, low: T, high: T) -> Result<BoundedInts<'_, T>>
    where
        T: Into<BigInt> + TryFrom<BigInt>,
    {
        let (low, range_size) = checked_range(low.into(), high.into())?;
        Ok(BoundedInts {
            rng: self,
            low,
            range_size,
            _marker: PhantomData,
        })
    }

    pub fn uniform_float(&mut self) -> f64 {
        // bounded_int(0, FLOAT_SCALE)
        let range_size = BigInt::from(FLOAT_SCALE) + 1u32;
        let value: u32 = narrow(self.draw(&BigInt::zero(), &range_size));
        value as f64 / (FLOAT_SCALE as f64 + 1.0)
    }

    fn draw(&mut self, low: &BigInt, range_size: &BigInt) -> BigInt {
        let mut value = BigInt::zero();
        for _ in 0..ADVANCES_PER_DRAW {
            value = self.advance();
        }
        // `%` truncates towards zero, the offset must not be negative.
        let mut offset = value % range_size;
        if offset.is_negative() {
            offset += range_size;
        }
        low + offset
    }
}

impl Default for CollatzRng {
    fn default() -> Self {
        Self::new()
    }
}

pub struct BoundedInts<'a, T> {
    rng: &'a mut CollatzRng,
    low: BigInt,
    range_size: BigInt,
    _marker: PhantomData<T>,
}

impl<T> Iterator for BoundedInts<'_, T>
where
    T: TryFrom<BigInt>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(narrow(self.rng.draw(&self.low, &self.range_size)))
    }
}

fn checked_range(low: BigInt, high: BigInt) -> Result<(BigInt, BigInt)> {
    if high < low {
        return Err(Error::InvalidRange { low, high });
    }
    let range_size = &high - &low + 1u32;
    Ok((low, range_size))
}

// Only called with values inside the caller's own [low, high], which always fit T.
fn narrow<T: TryFrom<BigInt>>(value: BigInt) -> T {
    T::try_from(value).unwrap_or_else(|_| unreachable!("drawn value lies within [low, high]"))
}
