//! Raw calculation-request values as collected from the embedding UI.

use serde::{Deserialize, Serialize};

/// The four user-facing inputs of an IRR calculation, unvalidated.
///
/// Dates are `mm/dd/yyyy` strings exactly as the date-picker collaborator
/// produces them; `amount` is the raw principal field. Validation is owned by
/// the orchestrator before any fetch is issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Investment start date, `mm/dd/yyyy`.
    pub start_date: String,
    /// Investment exit date, `mm/dd/yyyy`.
    pub end_date: String,
    /// Principal amount as entered.
    pub amount: String,
    /// Selected series identifier; may be a plain index name or a composite
    /// `EXCHANGE:SYMBOL` ticker.
    pub index: String,
}

impl CalculationRequest {
    /// Convenience constructor for owned field values.
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        amount: impl Into<String>,
        index: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            amount: amount.into(),
            index: index.into(),
        }
    }
}
