//! Unique active-period bookkeeping.
//!
//! Days are UTC calendar dates, weeks are ISO `(year, week)` pairs and
//! months are `(year, month)` pairs.

use crate::utils::error::AnalysisError;
use chrono::{DateTime, Datelike, NaiveDate};
use std::collections::HashSet;

/// Sets of distinct days, ISO weeks and months seen so far
#[derive(Debug, Clone, Default)]
pub struct ActivePeriods {
    days: HashSet<NaiveDate>,
    weeks: HashSet<(i32, u32)>,
    months: HashSet<(i32, u32)>,
}

impl ActivePeriods {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one date into all three sets
    pub fn record(&mut self, date: NaiveDate) {
        let week = date.iso_week();
        self.days.insert(date);
        self.weeks.insert((week.year(), week.week()));
        self.months.insert((date.year(), date.month()));
    }

    /// Insert the UTC date of a Unix timestamp
    pub fn record_timestamp(&mut self, secs: i64) -> Result<NaiveDate, AnalysisError> {
        let date = timestamp_to_date(secs)?;
        self.record(date);
        Ok(date)
    }

    pub fn unique_days(&self) -> usize {
        self.days.len()
    }

    pub fn unique_weeks(&self) -> usize {
        self.weeks.len()
    }

    pub fn unique_months(&self) -> usize {
        self.months.len()
    }
}

/// Parse a decimal Unix-seconds string
pub fn parse_timestamp(raw: &str) -> Result<i64, AnalysisError> {
    raw.parse::<i64>().map_err(|_| AnalysisError::InvalidNumber {
        field: "timeStamp",
        value: raw.to_string(),
    })
}

/// UTC calendar date of a Unix timestamp
pub fn timestamp_to_date(secs: i64) -> Result<NaiveDate, AnalysisError> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.date_naive())
        .ok_or(AnalysisError::InvalidTimestamp(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_to_date() {
        let date = timestamp_to_date(1_698_694_940).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 10, 30).unwrap());
        assert!(timestamp_to_date(i64::MAX).is_err());
    }

    #[test]
    fn test_same_week_across_month_boundary() {
        let mut periods = ActivePeriods::new();
        periods.record_timestamp(1_706_702_400).unwrap(); // 2024-01-31
        periods.record_timestamp(1_706_779_800).unwrap(); // 2024-02-01
        periods.record_timestamp(1_706_831_940).unwrap(); // 2024-02-01 23:59

        assert_eq!(periods.unique_days(), 2);
        assert_eq!(periods.unique_weeks(), 1);
        assert_eq!(periods.unique_months(), 2);
    }

    #[test]
    fn test_iso_week_year_differs_from_calendar_year() {
        let mut periods = ActivePeriods::new();
        periods.record_timestamp(1_735_552_800).unwrap(); // 2024-12-30, ISO 2025-W01
        periods.record_timestamp(1_735_725_600).unwrap(); // 2025-01-01, ISO 2025-W01

        assert_eq!(periods.unique_weeks(), 1);
        assert_eq!(periods.unique_months(), 2);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp("1698694940").unwrap(), 1_698_694_940);
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("16986.5").is_err());
    }
}
