//! Exact points on a timeline.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::system::sys_time;


/// The furthest an instant may lie from the Unix epoch, in either
/// direction: one hundred million days, in milliseconds.
pub const MAX_MILLIS: i64 = 8_640_000_000_000_000;

const MILLIS_IN_SECOND: i64 = 1000;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with millisecond precision.
///
/// Internally this is a single count of milliseconds since the Unix epoch,
/// kept within `±MAX_MILLIS`, which covers every year from −271,821 to
/// 275,760.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    millis: i64,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero milliseconds. Returns `None` if the value is out of
    /// range.
    pub fn at(seconds: i64) -> Option<Self> {
        seconds.checked_mul(MILLIS_IN_SECOND).and_then(Self::at_ms)
    }

    /// Creates a new Instant set to the number of milliseconds since the
    /// Unix epoch. Returns `None` if the value is out of range.
    pub fn at_ms(millis: i64) -> Option<Self> {
        if millis >= -MAX_MILLIS && millis <= MAX_MILLIS {
            Some(Self { millis })
        }
        else {
            None
        }
    }

    /// Creates a new Instant from a millisecond count, clamping it into the
    /// representable range rather than failing.
    pub fn saturating(millis: i64) -> Self {
        Self { millis: millis.max(-MAX_MILLIS).min(MAX_MILLIS) }
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, milliseconds) = unsafe { sys_time() };
        Self::saturating(seconds.saturating_mul(MILLIS_IN_SECOND).saturating_add(milliseconds as i64))
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self { millis: 0 }
    }

    /// Converts a `SystemTime`, returning `None` if it lies outside the
    /// range an Instant can hold.
    pub fn from_system_time(time: SystemTime) -> Option<Self> {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => {
                let millis = after.as_secs().checked_mul(1000)?.checked_add(u64::from(after.subsec_millis()))?;
                if millis > MAX_MILLIS as u64 { None } else { Self::at_ms(millis as i64) }
            }
            Err(before) => {
                let before = before.duration();
                // Round towards the past, as a sub-millisecond remainder
                // still lies before the whole-millisecond mark.
                let mut millis = before.as_secs().checked_mul(1000)?.checked_add(u64::from(before.subsec_millis()))?;
                if before.subsec_nanos() % 1_000_000 != 0 {
                    millis += 1;
                }
                if millis > MAX_MILLIS as u64 { None } else { Self::at_ms(-(millis as i64)) }
            }
        }
    }

    /// Returns the number of whole seconds at this instant, rounded towards
    /// the past.
    pub fn seconds(&self) -> i64 {
        self.millis.div_euclid(MILLIS_IN_SECOND)
    }

    /// Returns the millisecond of the second at this instant.
    pub fn milliseconds(&self) -> i16 {
        self.millis.rem_euclid(MILLIS_IN_SECOND) as i16
    }

    /// Returns the total number of milliseconds since the Unix epoch.
    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// Returns a new instant shifted by the given number of milliseconds,
    /// clamped into range.
    pub fn shift(self, millis: i64) -> Self {
        Self::saturating(self.millis.saturating_add(millis))
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ms)", self.seconds(), self.milliseconds())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    #[test]
    fn negative_split() {
        let instant = Instant::at_ms(-1).unwrap();
        assert_eq!(instant.seconds(), -1);
        assert_eq!(instant.milliseconds(), 999);
    }

    #[test]
    fn range() {
        assert!(Instant::at_ms(MAX_MILLIS).is_some());
        assert!(Instant::at_ms(MAX_MILLIS + 1).is_none());
        assert!(Instant::at_ms(-MAX_MILLIS - 1).is_none());
        assert!(Instant::at(i64::max_value()).is_none());
    }

    #[test]
    fn saturates() {
        assert_eq!(Instant::saturating(i64::min_value()).millis(), -MAX_MILLIS);
        assert_eq!(Instant::at_epoch().shift(i64::max_value()).millis(), MAX_MILLIS);
    }

    #[test]
    fn system_time_before_epoch() {
        let time = UNIX_EPOCH - Duration::from_micros(1500);
        assert_eq!(Instant::from_system_time(time).unwrap().millis(), -2);
    }

    #[test]
    fn system_time_after_epoch() {
        let time = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
        assert_eq!(Instant::from_system_time(time).unwrap().millis(), 1_700_000_000_123);
    }
}
