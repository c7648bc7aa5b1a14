// src/export/excel_date.rs

use chrono::NaiveDate;

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Interpret a `YYYY-MM-DD` string as an Excel date serial.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(date_to_excel_serial)
}

/// Days since the 1900 date system epoch (1899-12-30, which absorbs the
/// Lotus leap-year quirk for every date after February 1900).
fn date_to_excel_serial(d: NaiveDate) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_serials() {
        assert_eq!(parse_to_excel_date("1900-03-01"), Some(61.0));
        assert_eq!(parse_to_excel_date("2025-01-01"), Some(45658.0));
    }

    #[test]
    fn non_dates_are_ignored() {
        assert_eq!(parse_to_excel_date("CAT 320"), None);
        assert_eq!(parse_to_excel_date("2025-02-30"), None);
    }
}
