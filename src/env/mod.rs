mod system_clock;

pub use system_clock::SystemClock;

/// A Clock is the interface the generator uses to read the operating
/// system's notion of the current time when no explicit seed is given.
/// Callers may provide their own Clock to get reproducible seeding,
/// e.g. in tests.
pub trait Clock {
    /// Milliseconds elapsed since the Unix epoch.
    fn now_millis(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

#[cfg(test)]
pub(crate) struct FixedClock(pub i64);

#[cfg(test)]
impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
