use lookback_core::{
    Diagnostic, LookbackError, TableKind, decode_payload_str, reconcile_tables, require_base_table,
};
use serde_json::json;

fn two_table_body() -> String {
    json!({
        "data": [
            {
                "table": "Base Adjusted Values",
                "indexName": "NIFTY",
                "historicalData": [
                    { "date": 41640, "value": 100 },
                    { "date": 42005, "value": "112.5" },
                    { "date": 42370, "value": null },
                ]
            },
            {
                "table": "Actual Values",
                "indexName": "NIFTY",
                "historicalData": [
                    { "date": "2014-01-01", "value": "6301.65" },
                    { "date": "2015-01-01", "value": 8284.0 },
                    { "date": "2016-01-01", "value": null },
                ]
            },
        ],
        "years": "10",
        "calculated_irr": 12.85,
        "value_of_investment": "334772",
        "input": { "start_date": "01/01/2014", "end_date": "12/31/2023" }
    })
    .to_string()
}

#[test]
fn empty_object_is_malformed() {
    let err = decode_payload_str("{}").unwrap_err();
    assert!(matches!(err, LookbackError::MalformedPayload { .. }));
}

#[test]
fn non_array_data_is_malformed() {
    let err = decode_payload_str(r#"{ "data": 42 }"#).unwrap_err();
    match err {
        LookbackError::MalformedPayload { reason } => {
            assert!(reason.contains("array"), "unhelpful reason: {reason}");
        }
        other => panic!("expected MalformedPayload, got {other}"),
    }
}

#[test]
fn invalid_json_is_malformed() {
    let err = decode_payload_str("not json").unwrap_err();
    assert!(matches!(err, LookbackError::MalformedPayload { .. }));
}

#[test]
fn missing_base_table_is_reported_not_crashed() {
    let body = json!({
        "data": [{
            "table": "Actual Values",
            "indexName": "NIFTY",
            "historicalData": []
        }]
    })
    .to_string();

    let payload = decode_payload_str(&body).expect("decodes");
    let err = require_base_table(&payload).unwrap_err();
    assert!(matches!(err, LookbackError::MalformedPayload { .. }));
}

#[test]
fn two_table_payload_decodes_with_summary() {
    let payload = decode_payload_str(&two_table_body()).expect("decodes");
    require_base_table(&payload).expect("base table present");

    assert_eq!(payload.base_adjusted().len(), 1);
    assert_eq!(payload.actual().len(), 1);

    let summary = payload.irr_summary();
    assert_eq!(summary.years, 10.0);
    assert_eq!(summary.calculated_irr, 12.85);
    assert_eq!(summary.value_of_investment, 334_772.0);

    let echo = payload.input.expect("input echo");
    assert_eq!(echo.end_date.as_deref(), Some("12/31/2023"));
}

#[test]
fn summary_zero_fills_when_absent() {
    let body = json!({ "data": [] }).to_string();
    let payload = decode_payload_str(&body).expect("decodes");

    let summary = payload.irr_summary();
    assert_eq!(summary.years, 0.0);
    assert_eq!(summary.calculated_irr, 0.0);
    assert_eq!(summary.value_of_investment, 0.0);
}

#[test]
fn matching_tables_reconcile_clean() {
    let payload = decode_payload_str(&two_table_body()).expect("decodes");
    assert!(reconcile_tables(&payload).is_empty());
}

#[test]
fn reconciliation_surfaces_mismatches_as_diagnostics() {
    let body = json!({
        "data": [
            {
                "table": "Base Adjusted Values",
                "indexName": "NIFTY",
                "historicalData": [
                    { "date": 41640, "value": 100 },
                    { "date": 42005, "value": 104 },
                ]
            },
            {
                "table": "Base Adjusted Values",
                "indexName": "NASDAQ 100",
                "historicalData": [{ "date": 41640, "value": 100 }]
            },
            {
                "table": "Actual Values",
                "indexName": "NIFTY",
                "historicalData": [{ "date": 41640, "value": 6301 }]
            },
            {
                "table": "Sector Weights",
                "indexName": "NIFTY",
                "historicalData": []
            },
        ]
    })
    .to_string();

    let payload = decode_payload_str(&body).expect("decodes");
    let diagnostics = reconcile_tables(&payload);

    assert!(diagnostics.contains(&Diagnostic::SeriesCountMismatch { base: 2, actual: 1 }));
    assert!(diagnostics.contains(&Diagnostic::PointCountMismatch {
        index_name: "NIFTY".to_string(),
        base_points: 2,
        actual_points: 1,
    }));
    assert!(diagnostics.contains(&Diagnostic::MissingActualSeries {
        index_name: "NASDAQ 100".to_string(),
    }));
    assert!(diagnostics.contains(&Diagnostic::UnknownTable {
        table: "Sector Weights".to_string(),
    }));
}

#[test]
fn unparseable_dates_are_reported_once_per_series() {
    let body = json!({
        "data": [{
            "table": "Base Adjusted Values",
            "indexName": "NIFTY",
            "historicalData": [
                { "date": "??", "value": 100 },
                { "date": "??", "value": 101 },
                { "date": "2016-01-01", "value": 102 },
            ]
        }]
    })
    .to_string();

    let payload = decode_payload_str(&body).expect("decodes");
    let diagnostics = reconcile_tables(&payload);

    let unparseable: Vec<_> = diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::UnparseableDate { .. }))
        .collect();
    assert_eq!(unparseable.len(), 1);
}

#[test]
fn unknown_table_tags_round_trip() {
    let kind = TableKind::from("Sector Weights".to_string());
    assert!(matches!(kind, TableKind::Other(_)));
    assert_eq!(String::from(kind), "Sector Weights");
}
