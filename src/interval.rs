use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("{0}")]
pub struct ParseTimeError(pub String);

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Width of a time-of-day bucket, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Granularity(u32);

impl Granularity {
    /// A granularity must split the day into equal buckets.
    pub fn minutes(minutes: u32) -> Option<Granularity> {
        if minutes == 0 || MINUTES_PER_DAY % minutes != 0 {
            return None;
        }
        Some(Granularity(minutes))
    }

    pub fn as_minutes(&self) -> u32 {
        self.0
    }

    pub fn buckets_per_day(&self) -> usize {
        (MINUTES_PER_DAY / self.0) as usize
    }

    fn millis(&self) -> i64 {
        i64::from(self.0) * 60_000
    }
}

/// A clock time, carried as an instant on the epoch date.  Only the
/// hour/minute/second components are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    instant: NaiveDateTime,
}

impl TimeOfDay {
    fn from_hms(hour: u32, minute: u32, second: u32) -> Option<TimeOfDay> {
        let instant = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, second)?;
        Some(TimeOfDay { instant })
    }

    pub fn midnight() -> TimeOfDay {
        TimeOfDay::from_hms(0, 0, 0).unwrap()
    }

    /// Snap to the nearest multiple of `granularity` since midnight.
    /// Ties round toward the later boundary, so 08:15:00 at 30 minutes
    /// goes to 08:30.  Times past 23:30 can land on the midnight
    /// boundary of the next day; only the `HH:MM` label matters there.
    pub fn round_to_nearest(&self, granularity: Granularity) -> TimeOfDay {
        let coeff = granularity.millis();
        let millis = self.instant.and_utc().timestamp_millis();
        let rounded = (millis + coeff / 2).div_euclid(coeff) * coeff;
        TimeOfDay {
            instant: DateTime::from_timestamp_millis(rounded).unwrap().naive_utc(),
        }
    }

    /// The `HH:MM` bucket label, truncated to the minute.
    pub fn label(&self) -> String {
        self.instant.format("%H:%M").to_string()
    }

    fn next(&self, granularity: Granularity) -> TimeOfDay {
        TimeOfDay {
            instant: self.instant + Duration::minutes(i64::from(granularity.as_minutes())),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    /// Parse a `"HH:MM:SS"` time string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(ParseTimeError(format!(
                "Failed to parse {} as a HH:MM:SS time",
                s
            )));
        }
        let mut fields = [0u32; 3];
        for (i, part) in parts.iter().enumerate() {
            fields[i] = part.parse::<u32>().map_err(|_| {
                ParseTimeError(format!("Failed to parse {} as a HH:MM:SS time", s))
            })?;
        }
        TimeOfDay::from_hms(fields[0], fields[1], fields[2])
            .ok_or_else(|| ParseTimeError(format!("Time fields out of range in {}", s)))
    }
}

/// The bucket boundaries covering one day, in chronological order,
/// starting at 00:00:00.
pub fn time_intervals(granularity: Granularity) -> Vec<TimeOfDay> {
    let mut intervals = Vec::with_capacity(granularity.buckets_per_day());
    let mut next = TimeOfDay::midnight();
    for _ in 0..granularity.buckets_per_day() {
        intervals.push(next);
        next = next.next(granularity);
    }
    intervals
}
