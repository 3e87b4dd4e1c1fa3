//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

#[cfg(unix)]
use libc::clock_gettime;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(unix)]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    let mut tv = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = clock_gettime(libc::CLOCK_REALTIME, &mut tv);
    (tv.tv_sec as i64, (tv.tv_nsec / 1_000_000) as i16)
}

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(windows)]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    use std::mem;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;
    let mut ft = mem::zeroed();

    GetSystemTimeAsFileTime(&mut ft);
    (file_time_to_unix_seconds(&ft), (file_time_to_nsec(&ft) / 1_000_000) as i16)
}

#[cfg(windows)]
fn file_time_to_nsec(ft: &FILETIME) -> i32 {
    let t = file_time_as_u64(ft) as i64;
    ((t % HECTONANOSECS_IN_SEC) * 100) as i32
}

#[cfg(windows)]
fn file_time_to_unix_seconds(ft: &FILETIME) -> i64 {
    let t = file_time_as_u64(ft) as i64;
    (t - HECTONANOSEC_TO_UNIX_EPOCH) / HECTONANOSECS_IN_SEC
}

#[cfg(windows)]
fn file_time_as_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)
}

/// Fallback for targets with neither a Unix nor a Windows clock.
#[cfg(not(any(unix, windows)))]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d)  => (d.as_secs() as i64, d.subsec_millis() as i16),
        Err(_) => (0, 0),
    }
}


/// Returns the total offset from UTC, in seconds, that the system’s local
/// time zone has at the given number of seconds since the Unix epoch.
///
/// This asks the C library, so it follows whatever `TZ` and
/// `/etc/localtime` say. An instant the C library cannot convert is
/// treated as UTC.
#[cfg(unix)]
pub(crate) fn sys_offset(seconds: i64) -> i64 {
    let time = seconds as libc::time_t;
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };

    let result = unsafe { libc::localtime_r(&time, &mut tm) };
    if result.is_null() {
        warn!("localtime_r could not convert {} seconds; assuming UTC", seconds);
        return 0;
    }

    tm.tm_gmtoff as i64
}

/// Returns the total offset from UTC, in seconds, that the system’s local
/// time zone has at the given number of seconds since the Unix epoch.
#[cfg(windows)]
pub(crate) fn sys_offset(seconds: i64) -> i64 {
    use std::ptr::null;
    use winapi::um::minwinbase::SYSTEMTIME;
    use winapi::um::timezoneapi::SystemTimeToTzSpecificLocalTime;

    use crate::cal::{DatePiece, TimePiece, LocalDateTime};

    let utc = LocalDateTime::from_epoch_ms(seconds.saturating_mul(1000));

    // SYSTEMTIME cannot express anything before 1601.
    if utc.year() < 1601 || utc.year() > 30827 {
        return 0;
    }

    let universal = SYSTEMTIME {
        wYear:         utc.year() as u16,
        wMonth:        utc.month() as u16,
        wDayOfWeek:    utc.weekday() as u16,
        wDay:          utc.day() as u16,
        wHour:         utc.hour() as u16,
        wMinute:       utc.minute() as u16,
        wSecond:       utc.second() as u16,
        wMilliseconds: 0,
    };
    let mut local: SYSTEMTIME = unsafe { std::mem::zeroed() };

    if unsafe { SystemTimeToTzSpecificLocalTime(null(), &universal, &mut local) } == 0 {
        warn!("SystemTimeToTzSpecificLocalTime failed for {} seconds; assuming UTC", seconds);
        return 0;
    }

    let local = LocalDateTime::from_fields(
        local.wYear as i64, local.wMonth as i64 - 1, local.wDay as i64,
        local.wHour as i64, local.wMinute as i64, local.wSecond as i64, 0,
    );
    local.to_epoch_ms() / 1000 - seconds
}

/// Targets without a C time zone library run in UTC.
#[cfg(not(any(unix, windows)))]
pub(crate) fn sys_offset(_seconds: i64) -> i64 {
    0
}


#[cfg(test)]
mod test {
    use super::{sys_time, sys_offset};

    #[test]
    fn sanity_check() {
        assert!((0, 0) != unsafe { sys_time() })
    }

    #[test]
    fn millisecond_in_range() {
        let (_, ms) = unsafe { sys_time() };
        assert!(ms >= 0 && ms < 1000);
    }

    #[test]
    fn offset_is_less_than_a_day() {
        let offset = sys_offset(1_700_000_000);
        assert!(offset > -86400 && offset < 86400);
    }
}
