//! Longest consecutive-day push streak.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Longest run of push activity on adjacent calendar days.
///
/// `times_desc` must be sorted descending by timestamp. The walk visits
/// adjacent pairs oldest to newest:
/// - a pair sharing the same day-of-month number, or lying more than one
///   whole day apart, resets the running streak;
/// - a pair within the 24-hour window anchored at the end of the earlier
///   day extends it;
/// - anything else leaves the run untouched.
///
/// The adjacency test compares day-of-month numbers, not full dates, so
/// pairs a whole month apart can behave surprisingly near month
/// boundaries. The tests pin the exact behavior down.
pub fn longest_streak(times_desc: &[DateTime<Utc>]) -> usize {
    let mut best = 0;
    let mut run = 0;

    for i in (1..times_desc.len()).rev() {
        let earlier = times_desc[i].naive_utc();
        let later = times_desc[i - 1].naive_utc();

        let hours = (later - earlier).num_hours();
        let days = (later - earlier).num_days();
        // Whole-hour distance from the earlier event to 23:59:59.999999999
        // of its calendar day; with the sub-hour remainder truncated this
        // is 23 minus the hour component.
        let hours_to_day_end = 23 - i64::from(earlier.hour());

        if earlier.day() == later.day() || days > 1 {
            run = 0;
        } else if hours - hours_to_day_end <= 24 {
            run += 1;
            if run > best {
                best = run;
            }
        }
    }

    best
}
