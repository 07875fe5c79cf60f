use chrono::{Datelike, NaiveDateTime};
use std::collections::HashMap;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month of a specific year.
///
/// The month is always in `1..=12`; keys only come from [`MonthKey::of`]
/// or a checked [`MonthKey::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Returns `None` unless `month` is in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: &NaiveDateTime) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based, as returned by [`Datelike::month`].
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }
}

/// Transaction counts grouped by month, remembering the order in which
/// each month was first seen.
#[derive(Debug, Default)]
pub struct MonthlyCounts {
    positions: HashMap<MonthKey, usize>,
    counts: Vec<(MonthKey, usize)>,
}

impl MonthlyCounts {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            counts: Vec::new(),
        }
    }

    /// Counts one more transaction for the month of `date`.
    pub fn record(&mut self, date: &NaiveDateTime) {
        let key = MonthKey::of(date);
        match self.positions.get(&key) {
            Some(&position) => self.counts[position].1 += 1,
            None => {
                self.positions.insert(key, self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    pub fn count(&self, key: &MonthKey) -> usize {
        self.positions
            .get(key)
            .map(|&position| self.counts[position].1)
            .unwrap_or(0)
    }

    /// Months in first-seen order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (MonthKey, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// The month with the highest count. A later month has to be strictly
    /// greater to take over, so ties go to the month seen first.
    pub fn most_frequent(&self) -> Option<MonthKey> {
        let mut best: Option<(MonthKey, usize)> = None;
        for &(key, count) in &self.counts {
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((key, count));
            }
        }
        best.map(|(key, _)| key)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<'a> FromIterator<&'a NaiveDateTime> for MonthlyCounts {
    fn from_iter<I: IntoIterator<Item = &'a NaiveDateTime>>(iter: I) -> Self {
        let mut counts = Self::new();
        for date in iter {
            counts.record(date);
        }
        counts
    }
}
