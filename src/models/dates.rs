//! Date parsing and formatting helpers
//!
//! Dates arrive either from HTML-style date inputs (`2024-03-01`) or typed in
//! the Brazilian locale (`01/03/2024`). Both normalize to a `NaiveDate`.

use chrono::NaiveDate;

use crate::error::{ContaError, ContaResult};

/// Canonical storage and comparison format
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Locale display format
pub const BR_FORMAT: &str = "%d/%m/%Y";

/// Parse a date given as `YYYY-MM-DD` or `DD/MM/YYYY`
pub fn parse_date(s: &str) -> ContaResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, BR_FORMAT))
        .map_err(|_| ContaError::InvalidDateFormat(s.to_string()))
}

/// Format a date as `DD/MM/YYYY`
pub fn format_br(date: NaiveDate) -> String {
    date.format(BR_FORMAT).to_string()
}

/// Format a date as `YYYY-MM-DD`
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}
