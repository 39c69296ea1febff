//! Civil-date parsing for index queries.
//!
//! The index has daily resolution; inputs are calendar dates with no
//! time-of-day component, accepted as strict ISO-8601 `YYYY-MM-DD`.

use chrono::NaiveDate;

use crate::error::FtrtError;

/// Parse a strict `YYYY-MM-DD` date string.
///
/// Surrounding whitespace is tolerated; anything else (other separators,
/// missing zero-padding, trailing garbage, impossible dates) fails with
/// [`FtrtError::InvalidDateFormat`].
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, FtrtError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| FtrtError::InvalidDateFormat {
        input: input.to_string(),
    })
}
