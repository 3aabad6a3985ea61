//! Date normalization for the two raw encodings the endpoint mixes.
//!
//! Every raw date is classified exactly once into one of three variants and
//! resolved without locale- or timezone-dependent parsing: calendar
//! arithmetic only, so the same payload aligns identically everywhere.

use chrono::{Days, NaiveDate};

use crate::LookbackError;
use crate::types::RawDate;

/// The spreadsheet serial epoch: day 0 of the serial encoding.
///
/// Serial 25569 lands on 1970-01-01, which is how the original web client
/// converted serials through Unix milliseconds.
#[must_use]
pub fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("valid epoch literal")
}

/// A raw date after normalization, tagged with the encoding it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarDate {
    /// Resolved from a spreadsheet serial day count.
    Serial(NaiveDate),
    /// Resolved from a textual date.
    Iso(NaiveDate),
    /// Unrecognized encoding; the raw text is preserved for labeling and
    /// diagnostics.
    Unparseable(String),
}

impl CalendarDate {
    /// The resolved calendar day, when there is one.
    #[must_use]
    pub const fn day(&self) -> Option<NaiveDate> {
        match self {
            Self::Serial(d) | Self::Iso(d) => Some(*d),
            Self::Unparseable(_) => None,
        }
    }

    /// The label this date contributes to the chart x-axis: the calendar
    /// year for resolved dates, the raw text otherwise.
    #[must_use]
    pub fn year_label(&self) -> String {
        use chrono::Datelike;
        match self {
            Self::Serial(d) | Self::Iso(d) => d.year().to_string(),
            Self::Unparseable(raw) => raw.clone(),
        }
    }
}

/// Resolve a raw endpoint date to a calendar date.
///
/// - Serial form: `serial_epoch() + serial` days; fractional parts carry
///   intraday time and are truncated.
/// - Text form: `YYYY-MM-DD` components parsed directly. Payload variants
///   that emit `DD-MM-YYYY` are accepted when the final component is the
///   four-digit one.
/// - Anything else is `Unparseable`, carried forward rather than dropped so
///   labels and diagnostics can still show it.
#[must_use]
pub fn normalize_date(raw: &RawDate) -> CalendarDate {
    match raw {
        RawDate::Serial(serial) => {
            let days = serial.trunc();
            if !days.is_finite() || days < 0.0 {
                return CalendarDate::Unparseable(format!("{serial}"));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let whole_days = days as u64;
            match serial_epoch().checked_add_days(Days::new(whole_days)) {
                Some(d) => CalendarDate::Serial(d),
                None => CalendarDate::Unparseable(format!("{serial}")),
            }
        }
        RawDate::Text(s) => match parse_dashed(s) {
            Some(d) => CalendarDate::Iso(d),
            None => CalendarDate::Unparseable(s.clone()),
        },
    }
}

fn parse_dashed(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let nums: Vec<u32> = parts
        .iter()
        .map(|p| p.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;
    let (y, m, d) = if parts[0].len() == 4 {
        (nums[0], nums[1], nums[2])
    } else if parts[2].len() == 4 {
        (nums[2], nums[1], nums[0])
    } else {
        return None;
    };
    NaiveDate::from_ymd_opt(i32::try_from(y).ok()?, m, d)
}

/// Parse a user-facing `mm/dd/yyyy` input into a calendar date.
///
/// # Errors
/// Returns `LookbackError::InvalidArg` when the input does not match the
/// expected shape or names an impossible date.
pub fn parse_mdy(s: &str) -> Result<NaiveDate, LookbackError> {
    let parts: Vec<&str> = s.trim().split('/').collect();
    if parts.len() != 3 {
        return Err(LookbackError::invalid_arg(format!(
            "expected mm/dd/yyyy, got {s:?}"
        )));
    }
    let month: u32 = parts[0]
        .parse()
        .map_err(|_| LookbackError::invalid_arg(format!("bad month in {s:?}")))?;
    let day: u32 = parts[1]
        .parse()
        .map_err(|_| LookbackError::invalid_arg(format!("bad day in {s:?}")))?;
    let year: i32 = parts[2]
        .parse()
        .map_err(|_| LookbackError::invalid_arg(format!("bad year in {s:?}")))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| LookbackError::invalid_arg(format!("impossible date {s:?}")))
}
