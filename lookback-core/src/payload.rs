//! Inbound payload decoding, validation, and cross-table reconciliation.

use std::collections::HashMap;

use crate::LookbackError;
use crate::date::{CalendarDate, normalize_date};
use crate::types::{Diagnostic, IndicesPayload, TableKind};

/// Decode an endpoint body into a typed payload, validating shape first.
///
/// # Errors
/// Returns `LookbackError::MalformedPayload` when the body is not valid
/// JSON, is not an object, lacks `data`, or carries a non-array `data`. The
/// offending shape is logged.
pub fn decode_payload_str(body: &str) -> Result<IndicesPayload, LookbackError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "endpoint body is not valid JSON");
        LookbackError::malformed(format!("body is not valid JSON: {e}"))
    })?;
    decode_payload(&value)
}

/// Decode a parsed JSON value into a typed payload, validating shape first.
///
/// # Errors
/// Returns `LookbackError::MalformedPayload` under the same conditions as
/// [`decode_payload_str`].
pub fn decode_payload(value: &serde_json::Value) -> Result<IndicesPayload, LookbackError> {
    let Some(object) = value.as_object() else {
        tracing::warn!(shape = shape_of(value), "payload is not an object");
        return Err(LookbackError::malformed(format!(
            "payload is {}, expected an object",
            shape_of(value)
        )));
    };
    let Some(data) = object.get("data") else {
        tracing::warn!("payload has no `data` field");
        return Err(LookbackError::malformed("payload has no `data` field"));
    };
    if !data.is_array() {
        tracing::warn!(shape = shape_of(data), "`data` is not an array");
        return Err(LookbackError::malformed(format!(
            "`data` is {}, expected an array",
            shape_of(data)
        )));
    }
    serde_json::from_value(value.clone()).map_err(|e| {
        tracing::warn!(error = %e, "payload entries do not match the series contract");
        LookbackError::malformed(format!("series entries do not match the contract: {e}"))
    })
}

/// Require the base-adjusted table to be present and non-empty.
///
/// # Errors
/// Returns `LookbackError::MalformedPayload` when no entry carries the
/// "Base Adjusted Values" tag.
pub fn require_base_table(payload: &IndicesPayload) -> Result<(), LookbackError> {
    if payload.base_adjusted().is_empty() {
        tracing::warn!(entries = payload.data.len(), "base-adjusted table is absent");
        return Err(LookbackError::malformed(
            "\"Base Adjusted Values\" table is absent",
        ));
    }
    Ok(())
}

/// Reconcile the two parallel tables and collect non-fatal degradations.
///
/// Every base-adjusted series should appear in the actual-values table with
/// the same point count; violations are diagnostics, never failures.
/// Unknown table tags and unparseable point dates are reported here as well
/// (one per series per condition). Each diagnostic is also logged.
#[must_use]
pub fn reconcile_tables(payload: &IndicesPayload) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let base = payload.base_adjusted();
    let actual = payload.actual();
    if base.len() != actual.len() {
        diagnostics.push(Diagnostic::SeriesCountMismatch {
            base: base.len(),
            actual: actual.len(),
        });
    }

    let actual_by_name: HashMap<&str, usize> = actual
        .iter()
        .map(|e| (e.index_name.as_str(), e.historical_data.len()))
        .collect();
    for entry in &base {
        match actual_by_name.get(entry.index_name.as_str()) {
            None => diagnostics.push(Diagnostic::MissingActualSeries {
                index_name: entry.index_name.clone(),
            }),
            Some(&points) if points != entry.historical_data.len() => {
                diagnostics.push(Diagnostic::PointCountMismatch {
                    index_name: entry.index_name.clone(),
                    base_points: entry.historical_data.len(),
                    actual_points: points,
                });
            }
            Some(_) => {}
        }
    }

    let mut unknown_seen: Vec<&str> = Vec::new();
    for entry in &payload.data {
        if let TableKind::Other(tag) = &entry.table {
            if !unknown_seen.contains(&tag.as_str()) {
                unknown_seen.push(tag);
                diagnostics.push(Diagnostic::UnknownTable { table: tag.clone() });
            }
        }
    }

    for entry in base.iter().chain(actual.iter()) {
        for point in &entry.historical_data {
            if let CalendarDate::Unparseable(raw) = normalize_date(&point.date) {
                diagnostics.push(Diagnostic::UnparseableDate {
                    index_name: entry.index_name.clone(),
                    raw,
                });
                break;
            }
        }
    }

    for diag in &diagnostics {
        tracing::warn!(diagnostic = %diag, "alignment degraded");
    }
    diagnostics
}

fn shape_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
