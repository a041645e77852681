//! Free-text conference date ranges.
//!
//! Upstream writes event dates the way a human would: `May 19, 2025`,
//! `April 29-May 4`, `Sept 10 - 12`. [`parse_date_range`] turns those into a
//! pair of calendar dates.

use chrono::NaiveDate;

use crate::error::{Result, SyncError};

/// Full month names, canonical capitalization.
const MONTHS: &[&str] = &[
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

/// Abbreviations seen upstream and the month they stand for.
const MONTH_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Sept", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

/// Expand a single token to a full month name, if it names a month.
///
/// Matching is exact on whole tokens, so `Sept` never turns into
/// `Septembert` and a day number can never look like a month. A trailing
/// period (`Sept.`) is tolerated.
fn month_name(token: &str) -> Option<&'static str> {
    let token = token.trim_end_matches('.');
    if let Some(full) = MONTHS.iter().copied().find(|m| *m == token) {
        return Some(full);
    }
    MONTH_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == token)
        .map(|(_, full)| *full)
}

fn has_month(segment: &str) -> bool {
    segment.split_whitespace().any(|t| month_name(t).is_some())
}

/// Expand month abbreviations token by token and collapse whitespace.
fn normalize_segment(segment: &str) -> String {
    segment
        .split_whitespace()
        .map(|t| month_name(t).unwrap_or(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a free-text date range for the given year.
///
/// Returns `(start, end)`; a single-day event yields the same date twice.
///
/// # Examples
///
/// ```
/// use confsync::utils::parse_date_range;
///
/// let (start, end) = parse_date_range("April 29-May 4", "2025").unwrap();
/// assert_eq!(start.to_string(), "2025-04-29");
/// assert_eq!(end.to_string(), "2025-05-04");
///
/// let (start, end) = parse_date_range("Sept 10 - 12", "2025").unwrap();
/// assert_eq!(start.to_string(), "2025-09-10");
/// assert_eq!(end.to_string(), "2025-09-12");
/// ```
pub fn parse_date_range(text: &str, year: &str) -> Result<(NaiveDate, NaiveDate)> {
    let stripped = text.replace(&format!(", {year}"), "");

    let (start, end) = if let Some((start, end)) = stripped.split_once(" - ") {
        (start.to_string(), end.to_string())
    } else if let Some((start, end)) = stripped.split_once('-') {
        (start.to_string(), end.to_string())
    } else {
        (stripped.clone(), stripped.clone())
    };

    // "Sept 10 - 12": the end is a bare day in the start's month
    let end = if has_month(&end) {
        end
    } else {
        match start.split_whitespace().next() {
            Some(month) => format!("{} {}", month, end.trim()),
            None => end,
        }
    };

    let start = normalize_segment(&start);
    let end = normalize_segment(&end);

    let start_date = parse_day(&start, year).map_err(|e| SyncError::date_range(text, e))?;
    let end_date = parse_day(&end, year).map_err(|e| SyncError::date_range(text, e))?;

    Ok((start_date, end_date))
}

fn parse_day(segment: &str, year: &str) -> std::result::Result<NaiveDate, String> {
    let candidate = format!("{segment}, {year}");
    NaiveDate::parse_from_str(&candidate, "%B %d, %Y").map_err(|e| format!("{candidate:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_with_year() {
        let (start, end) = parse_date_range("May 19, 2025", "2025").unwrap();
        assert_eq!(start, ymd(2025, 5, 19));
        assert_eq!(end, ymd(2025, 5, 19));
    }

    #[test]
    fn test_range_across_months_without_spaces() {
        let (start, end) = parse_date_range("April 29-May 4", "2025").unwrap();
        assert_eq!(start, ymd(2025, 4, 29));
        assert_eq!(end, ymd(2025, 5, 4));
    }

    #[test]
    fn test_bare_end_day_takes_start_month() {
        let (start, end) = parse_date_range("Sept 10 - 12", "2025").unwrap();
        assert_eq!(start, ymd(2025, 9, 10));
        assert_eq!(end, ymd(2025, 9, 12));
    }

    #[test]
    fn test_sep_and_sept_both_expand() {
        let (start, end) = parse_date_range("Sep 28 - Oct 2, 2025", "2025").unwrap();
        assert_eq!(start, ymd(2025, 9, 28));
        assert_eq!(end, ymd(2025, 10, 2));
    }

    #[test]
    fn test_full_month_names_are_not_rewritten() {
        let (start, end) = parse_date_range("February 25 - March 4, 2025", "2025").unwrap();
        assert_eq!(start, ymd(2025, 2, 25));
        assert_eq!(end, ymd(2025, 3, 4));
    }

    #[test]
    fn test_year_repeated_on_both_ends() {
        let (start, end) = parse_date_range("Jan 30, 2026 - Feb 2, 2026", "2026").unwrap();
        assert_eq!(start, ymd(2026, 1, 30));
        assert_eq!(end, ymd(2026, 2, 2));
    }

    #[test]
    fn test_extra_whitespace_is_collapsed() {
        let (start, end) = parse_date_range("Dec  9 -  15", "2025").unwrap();
        assert_eq!(start, ymd(2025, 12, 9));
        assert_eq!(end, ymd(2025, 12, 15));
    }

    #[test]
    fn test_abbreviation_with_period() {
        let (start, _) = parse_date_range("Aug. 3", "2025").unwrap();
        assert_eq!(start, ymd(2025, 8, 3));
    }

    #[test]
    fn test_unparseable_text_is_named_in_error() {
        let err = parse_date_range("TBA", "2025").unwrap_err();
        match err {
            SyncError::DateRange { text, .. } => assert_eq!(text, "TBA"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_day_is_an_error() {
        assert!(parse_date_range("February 30", "2025").is_err());
    }

    #[test]
    fn test_month_lookup_is_token_based() {
        assert!(has_month("May 4"));
        assert!(has_month("Sept 4"));
        assert!(!has_month("12"));
        assert!(!has_month("Mayday"));
        assert_eq!(normalize_segment("Sept 10"), "September 10");
        assert_eq!(normalize_segment("September 10"), "September 10");
    }
}
