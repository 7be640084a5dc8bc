//! Calendar breakdown of a single instant
//!
//! Pattern rendering reads every date/time field from one [`TimeSnapshot`]
//! taken per log call, so all tokens of a line agree on the same instant.

use chrono::{Datelike, Local, Timelike, Weekday};

/// Local date and time fields captured at one instant.
///
/// # Examples
///
/// ```
/// use rust_pattern_logger::TimeSnapshot;
/// use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(14, 5, 7)
///     .unwrap();
/// let snapshot = TimeSnapshot::from_datetime(&dt);
/// assert_eq!(snapshot.weekday_name(), "Saturday");
/// assert_eq!(snapshot.month_name(), "March");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSnapshot {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    pub day: u32,
    /// 0-23
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub weekday: Weekday,
}

impl TimeSnapshot {
    /// Capture the current local time
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Break down any chrono date-time (naive or zoned)
    #[must_use]
    pub fn from_datetime<T: Datelike + Timelike>(datetime: &T) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
            weekday: datetime.weekday(),
        }
    }

    #[must_use]
    pub fn weekday_name(&self) -> &'static str {
        match self.weekday {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
    }

    #[must_use]
    pub fn month_name(&self) -> &'static str {
        match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Last two digits of the year
    #[must_use]
    pub fn short_year(&self) -> i32 {
        self.year.rem_euclid(100)
    }

    /// Hour on a 12-hour dial, 1-12
    #[must_use]
    pub fn clock_hour(&self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    #[must_use]
    pub fn meridiem(&self) -> &'static str {
        if self.hour < 12 {
            "AM"
        } else {
            "PM"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> TimeSnapshot {
        let dt = NaiveDate::from_ymd_opt(2007, 12, 31)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        TimeSnapshot::from_datetime(&dt)
    }

    #[test]
    fn test_fields() {
        let t = at(23, 59, 58);
        assert_eq!(t.year, 2007);
        assert_eq!(t.short_year(), 7);
        assert_eq!(t.month, 12);
        assert_eq!(t.day, 31);
        assert_eq!(t.weekday_name(), "Monday");
        assert_eq!(t.month_name(), "December");
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(at(0, 0, 0).clock_hour(), 12);
        assert_eq!(at(0, 0, 0).meridiem(), "AM");
        assert_eq!(at(12, 0, 0).clock_hour(), 12);
        assert_eq!(at(12, 0, 0).meridiem(), "PM");
        assert_eq!(at(13, 0, 0).clock_hour(), 1);
    }

    #[test]
    fn test_now_is_plausible() {
        let t = TimeSnapshot::now();
        assert!((1..=12).contains(&t.month));
        assert!(t.hour < 24);
    }
}
