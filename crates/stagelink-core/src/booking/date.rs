//! Date helpers for the booking form.

use chrono::{Days, NaiveDate};

use crate::error::{Result, StagelinkError};

/// Formats an ISO date (`YYYY-MM-DD`) for display, e.g. `Wednesday, January 1, 2025`.
pub fn format_booking_date(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| StagelinkError::validation(["date"]))?;
    Ok(parsed.format("%A, %B %-d, %Y").to_string())
}

/// Bookings start tomorrow at the earliest.
pub fn earliest_bookable_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}
