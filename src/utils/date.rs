use crate::config::DayBasis;
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Current calendar day according to the configured basis.
pub fn today(basis: DayBasis) -> NaiveDate {
    match basis {
        DayBasis::Utc => Utc::now().date_naive(),
        DayBasis::Local => Local::now().date_naive(),
    }
}

pub fn yesterday_of(day: NaiveDate) -> NaiveDate {
    day.pred_opt().unwrap_or(day)
}

/// Epoch milliseconds, the timestamp unit used by every stored record.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Local wall-clock time of an epoch-millis timestamp (`HH:MM:SS`).
pub fn fmt_time_of_day(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

/// Local date and time of an epoch-millis timestamp.
pub fn fmt_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
