//! The calendar window: day buckets starting at today
//!
//! Days are never stored. The window is recomputed from whatever "today" the
//! caller passes in, and each day's posts are found by date equality.

use crate::types::{Bucket, ScheduledPost, Snapshot};
use chrono::NaiveDate;
use serde::Serialize;

/// Days shown when nothing else is configured
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// `days` consecutive dates starting at `today`
pub fn window(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    today.iter_days().take(days as usize).collect()
}

/// One day of the calendar with its posts in chronological order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub posts: Vec<&'a ScheduledPost>,
}

impl DayBucket<'_> {
    pub fn bucket(&self) -> Bucket {
        Bucket::Day(self.date)
    }
}

/// Build the day buckets for the window starting at `today`
pub fn week(snapshot: &Snapshot, today: NaiveDate, days: u32) -> Vec<DayBucket<'_>> {
    window(today, days)
        .into_iter()
        .map(|date| DayBucket {
            date,
            is_today: date == today,
            posts: snapshot.schedule.on_day(date),
        })
        .collect()
}
