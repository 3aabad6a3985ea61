use chrono::NaiveDate;
use lookback_types::{AlignerConfig, CalculationRequest, LookbackConfig};

#[test]
fn aligner_config_defaults() {
    let cfg = AlignerConfig::default();

    assert_eq!(
        cfg.default_series,
        ["NASDAQ 100", "NIFTY IT", "BSE IT", "NIFTY"]
    );
    assert_eq!(cfg.min_start_date, NaiveDate::from_ymd_opt(2014, 1, 1).unwrap());
}

#[test]
fn lookback_config_roundtrip() {
    let mut cfg = LookbackConfig::default();
    cfg.endpoint.base_url = "https://data.example.test".to_string();
    cfg.aligner.min_start_date = NaiveDate::from_ymd_opt(2010, 6, 1).unwrap();

    let json = serde_json::to_string(&cfg).expect("serialize config");
    let de: LookbackConfig = serde_json::from_str(&json).expect("deserialize config");

    assert_eq!(de, cfg);
}

#[test]
fn calculation_request_roundtrip() {
    let req = CalculationRequest::new("01/15/2016", "12/31/2024", "100000", "NSE:NIFTY");

    let json = serde_json::to_string(&req).expect("serialize request");
    let de: CalculationRequest = serde_json::from_str(&json).expect("deserialize request");

    assert_eq!(de, req);
    assert_eq!(de.index, "NSE:NIFTY");
}
