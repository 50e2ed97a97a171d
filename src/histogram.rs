use indexmap::IndexMap;
use log::{debug, warn};

use crate::interval::{time_intervals, Granularity, TimeOfDay};
use crate::records::AppointmentRecord;

/// Bucket label -> number of appointments first seen in that bucket.
/// Iteration order is chronological.
pub type TimeHistogram = IndexMap<String, u32>;

/// What happened to each record during binning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BinSummary {
    /// Records counted into a bucket
    pub binned: u32,
    /// Records without a first-seen time
    pub missing: u32,
    /// Records whose time string did not parse
    pub unparseable: u32,
}

#[derive(Debug)]
pub struct Binned {
    pub histogram: TimeHistogram,
    pub summary: BinSummary,
}

/// Seed every bucket of the day with a zero count, then count each
/// record into the bucket nearest to its first-seen time.
pub fn bin_appointments(records: &[AppointmentRecord], granularity: Granularity) -> Binned {
    let mut histogram = TimeHistogram::new();
    for interval in time_intervals(granularity) {
        histogram.insert(interval.label(), 0);
    }

    let mut summary = BinSummary::default();
    for record in records {
        let time = match &record.earliest_time_found {
            Some(time) => time,
            None => {
                debug!("Skipping record without a first-seen time: {:?}", record);
                summary.missing += 1;
                continue;
            }
        };
        match time.parse::<TimeOfDay>() {
            Ok(t) => {
                let label = t.round_to_nearest(granularity).label();
                *histogram.entry(label).or_insert(0) += 1;
                summary.binned += 1;
            }
            Err(e) => {
                warn!("{}", e);
                summary.unparseable += 1;
            }
        }
    }

    Binned { histogram, summary }
}
