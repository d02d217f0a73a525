//! Collapses 3-hour forecast samples into one reading per calendar day.

use chrono::{NaiveDate, Timelike};

use crate::model::{DailySummary, RawSample};

/// Upper bound on the number of days emitted.
pub const MAX_DAYS: usize = 5;

const NOON_SECS: i64 = 12 * 60 * 60;

/// Group samples by calendar date, keeping dates in order of first appearance.
pub fn group_by_day(samples: &[RawSample]) -> Vec<(NaiveDate, Vec<&RawSample>)> {
    let mut buckets: Vec<(NaiveDate, Vec<&RawSample>)> = Vec::new();

    for sample in samples {
        let date = sample.date();
        match buckets.iter_mut().find(|(day, _)| *day == date) {
            Some((_, bucket)) => bucket.push(sample),
            None => buckets.push((date, vec![sample])),
        }
    }

    buckets
}

fn noon_distance(sample: &RawSample) -> i64 {
    (i64::from(sample.local_time.num_seconds_from_midnight()) - NOON_SECS).abs()
}

/// Pick the sample closest to noon.
///
/// An exact 12:00 sample has distance zero and always wins. The current choice
/// is only replaced by a strictly closer sample, so among equidistant samples
/// the first one in the bucket is kept.
pub fn representative<'a>(bucket: &[&'a RawSample]) -> Option<&'a RawSample> {
    let mut best: Option<&'a RawSample> = None;

    for &candidate in bucket {
        match best {
            Some(current) if noon_distance(candidate) >= noon_distance(current) => {}
            _ => best = Some(candidate),
        }
    }

    best
}

/// One [`DailySummary`] per calendar day, at most [`MAX_DAYS`], in date order of
/// the (time-ordered) input.
pub fn daily_summaries(samples: &[RawSample]) -> Vec<DailySummary> {
    group_by_day(samples)
        .into_iter()
        .filter_map(|(_, bucket)| representative(&bucket).map(DailySummary::from))
        .take(MAX_DAYS)
        .collect()
}
