//! Sources of the current time.

use crate::instant::Instant;


/// Something that can say what time it is now.
///
/// `Moment::now()` asks the `SystemClock`; pass a different clock to the
/// builder to make “now” deterministic.
pub trait Clock {

    /// Returns the current instant.
    fn now(&self) -> Instant;
}


/// The computer’s own real-time clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}


/// A clock that is stopped at one instant.
///
/// ```rust
/// use dateflow::{Clock, FixedClock, Instant};
///
/// let clock = FixedClock(Instant::at_epoch());
/// assert_eq!(clock.now().millis(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}
