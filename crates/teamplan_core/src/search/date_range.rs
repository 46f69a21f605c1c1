//! Textual date-range query resolution.
//!
//! # Responsibility
//! - Parse `YYYY-MM-DD` date text into typed calendar dates.
//! - Resolve a two-field range request into a bounded start-date predicate
//!   or a full-scan fallback.
//!
//! # Invariants
//! - Date text is accepted only as a 4-digit year, 2-digit month and
//!   2-digit day, hyphen-separated. No other format, no best-effort repair.
//! - The fallback applies only when both fields are absent together; a
//!   present-but-unparsable or half-missing pair fails the whole query.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

// chrono alone would accept unpadded fields like `2025-4-1`; the shape gate
// keeps the accepted grammar exactly four-two-two.
static DATE_TEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date text regex"));

/// Error for date text that cannot become a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTextError {
    /// The field is required by the query but was not supplied.
    Missing { field: &'static str },
    /// The field text is not a `YYYY-MM-DD` calendar date.
    Invalid { field: &'static str, value: String },
}

impl Display for DateTextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing date text for `{field}`"),
            Self::Invalid { field, value } => {
                write!(
                    f,
                    "invalid date text `{value}` for `{field}`; expected YYYY-MM-DD"
                )
            }
        }
    }
}

impl Error for DateTextError {}

/// Caller-facing range request over assignment start dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentSearchRequest {
    pub start_date_text: Option<String>,
    pub end_date_text: Option<String>,
}

/// Resolved store predicate for an assignment search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDateFilter {
    /// Match assignments whose start date lies in the inclusive range.
    /// The assignment's end date is not part of the predicate.
    Between { start: NaiveDate, end: NaiveDate },
    /// No usable bounds; fall back to the full unfiltered listing.
    All,
}

/// Parses one date text field as a strict `YYYY-MM-DD` calendar date.
pub fn parse_date_text(field: &'static str, value: &str) -> Result<NaiveDate, DateTextError> {
    if !DATE_TEXT_RE.is_match(value) {
        return Err(DateTextError::Invalid {
            field,
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| DateTextError::Invalid {
        field,
        value: value.to_string(),
    })
}

/// Resolves a range request into a store predicate.
///
/// Both fields absent resolves to [`StartDateFilter::All`]. Otherwise both
/// fields must parse; any missing or malformed field fails the whole
/// resolution, so callers never see a partially bounded filter.
pub fn resolve_start_date_filter(
    request: &AssignmentSearchRequest,
) -> Result<StartDateFilter, DateTextError> {
    let start_text = request.start_date_text.as_deref();
    let end_text = request.end_date_text.as_deref();

    if start_text.is_none() && end_text.is_none() {
        return Ok(StartDateFilter::All);
    }

    let start = parse_required(start_text, "start_date")?;
    let end = parse_required(end_text, "end_date")?;

    Ok(StartDateFilter::Between { start, end })
}

fn parse_required(
    value: Option<&str>,
    field: &'static str,
) -> Result<NaiveDate, DateTextError> {
    let Some(text) = value else {
        return Err(DateTextError::Missing { field });
    };
    parse_date_text(field, text)
}

#[cfg(test)]
mod tests {
    use super::{
        parse_date_text, resolve_start_date_filter, AssignmentSearchRequest, DateTextError,
        StartDateFilter,
    };
    use chrono::NaiveDate;

    fn request(start: Option<&str>, end: Option<&str>) -> AssignmentSearchRequest {
        AssignmentSearchRequest {
            start_date_text: start.map(str::to_string),
            end_date_text: end.map(str::to_string),
        }
    }

    #[test]
    fn parse_accepts_iso_calendar_date() {
        let parsed = parse_date_text("start_date", "2025-04-01").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    }

    #[test]
    fn parse_rejects_unpadded_and_garbage_text() {
        for value in ["2025-4-1", "01-04-2025", "2025/04/01", "not-a-date", ""] {
            let err = parse_date_text("start_date", value).unwrap_err();
            assert!(matches!(err, DateTextError::Invalid { .. }), "{value}");
        }
    }

    #[test]
    fn parse_rejects_impossible_calendar_dates() {
        let err = parse_date_text("end_date", "2025-02-30").unwrap_err();
        assert!(matches!(
            err,
            DateTextError::Invalid { field: "end_date", .. }
        ));
    }

    #[test]
    fn both_absent_resolves_to_full_listing() {
        let filter = resolve_start_date_filter(&request(None, None)).unwrap();
        assert_eq!(filter, StartDateFilter::All);
    }

    #[test]
    fn both_present_resolve_to_inclusive_bounds() {
        let filter =
            resolve_start_date_filter(&request(Some("2025-04-01"), Some("2025-04-30"))).unwrap();
        assert_eq!(
            filter,
            StartDateFilter::Between {
                start: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
            }
        );
    }

    #[test]
    fn half_missing_pair_fails_instead_of_falling_back() {
        let err = resolve_start_date_filter(&request(Some("2025-04-01"), None)).unwrap_err();
        assert_eq!(err, DateTextError::Missing { field: "end_date" });

        let err = resolve_start_date_filter(&request(None, Some("2025-04-30"))).unwrap_err();
        assert_eq!(err, DateTextError::Missing { field: "start_date" });
    }

    #[test]
    fn malformed_text_fails_whole_resolution() {
        let err =
            resolve_start_date_filter(&request(Some("not-a-date"), Some("2025-04-30"))).unwrap_err();
        assert!(matches!(
            err,
            DateTextError::Invalid { field: "start_date", .. }
        ));
    }
}
