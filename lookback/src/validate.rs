//! Caller-side validation of calculation requests, run before any fetch.

use chrono::NaiveDate;

use lookback_core::{LookbackError, parse_mdy};
use lookback_types::{AlignerConfig, CalculationRequest};

/// A calculation request after validation, with parsed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    /// Parsed start date.
    pub start: NaiveDate,
    /// Parsed exit date.
    pub end: NaiveDate,
    /// Parsed principal amount, strictly positive.
    pub amount: f64,
}

/// Validate a raw request against the configured bounds.
///
/// All four fields are required; dates are `mm/dd/yyyy`; the end date must
/// not precede the start date; the start date must not precede the
/// configured minimum; the amount must be a positive number.
///
/// # Errors
/// Returns `LookbackError::InvalidArg` describing the first violation.
pub fn validate_request(
    req: &CalculationRequest,
    cfg: &AlignerConfig,
) -> Result<ValidatedRequest, LookbackError> {
    if req.start_date.trim().is_empty()
        || req.end_date.trim().is_empty()
        || req.amount.trim().is_empty()
        || req.index.trim().is_empty()
    {
        return Err(LookbackError::invalid_arg("all fields are required"));
    }

    let start = parse_mdy(&req.start_date)?;
    let end = parse_mdy(&req.end_date)?;

    if end < start {
        return Err(LookbackError::invalid_arg(format!(
            "end date {end} precedes start date {start}"
        )));
    }
    if start < cfg.min_start_date {
        return Err(LookbackError::invalid_arg(format!(
            "start date {start} precedes the minimum supported date {}",
            cfg.min_start_date
        )));
    }

    let amount: f64 = req
        .amount
        .trim()
        .parse()
        .map_err(|_| LookbackError::invalid_arg(format!("bad amount {:?}", req.amount)))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LookbackError::invalid_arg(format!(
            "amount must be positive, got {amount}"
        )));
    }

    Ok(ValidatedRequest { start, end, amount })
}
