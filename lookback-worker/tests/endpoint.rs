use httpmock::prelude::*;
use serde_json::json;

use lookback_core::LookbackError;
use lookback_core::connector::LookbackConnector;
use lookback_types::{CalculationRequest, EndpointConfig};
use lookback_worker::WorkerConnector;

fn config_for(server: &MockServer) -> EndpointConfig {
    EndpointConfig {
        base_url: server.base_url(),
    }
}

fn overview_body() -> String {
    json!({
        "data": [
            {
                "table": "Base Adjusted Values",
                "indexName": "NASDAQ 100",
                "historicalData": [
                    { "date": 41640, "value": 100 },
                    { "date": 42005, "value": 121 },
                ]
            },
            {
                "table": "Actual Values",
                "indexName": "NASDAQ 100",
                "historicalData": [
                    { "date": 41640, "value": "3592.0" },
                    { "date": 42005, "value": "4346.3" },
                ]
            },
        ]
    })
    .to_string()
}

#[tokio::test]
async fn overview_fetch_sends_the_type_parameter() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).query_param("type", "global-indices");
            then.status(200)
                .header("content-type", "application/json")
                .body(overview_body());
        })
        .await;

    let connector = WorkerConnector::from_config(&config_for(&server)).expect("connector");
    let provider = connector.as_indices_provider().expect("capability");
    let payload = provider.global_indices().await.expect("payload");

    mock.assert_async().await;
    assert_eq!(payload.base_adjusted().len(), 1);
    assert_eq!(payload.actual().len(), 1);
}

#[tokio::test]
async fn calculation_sends_all_four_query_parameters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .query_param("start_date", "01/01/2016")
                .query_param("end_date", "12/31/2024")
                .query_param("amount", "100000")
                .query_param("index", "NSE:NIFTY");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    json!({
                        "data": [{
                            "table": "Base Adjusted Values",
                            "indexName": "NIFTY",
                            "historicalData": [{ "date": "2016-01-01", "value": 100 }]
                        }],
                        "years": 9,
                        "calculated_irr": "11.4",
                        "value_of_investment": 264000
                    })
                    .to_string(),
                );
        })
        .await;

    let connector = WorkerConnector::from_config(&config_for(&server)).expect("connector");
    let provider = connector.as_irr_provider().expect("capability");
    let req = CalculationRequest::new("01/01/2016", "12/31/2024", "100000", "NSE:NIFTY");
    let payload = provider.calculate(&req).await.expect("payload");

    mock.assert_async().await;
    let summary = payload.irr_summary();
    assert_eq!(summary.years, 9.0);
    assert_eq!(summary.calculated_irr, 11.4);
    assert_eq!(summary.value_of_investment, 264_000.0);
}

#[tokio::test]
async fn non_2xx_status_maps_to_network_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(503).body("upstream unavailable");
        })
        .await;

    let connector = WorkerConnector::from_config(&config_for(&server)).expect("connector");
    let provider = connector.as_indices_provider().expect("capability");
    let err = provider.global_indices().await.unwrap_err();

    assert!(matches!(err, LookbackError::Network(_)), "got {err}");
}

#[tokio::test]
async fn shape_violating_body_maps_to_malformed_payload() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200)
                .header("content-type", "application/json")
                .body("{}");
        })
        .await;

    let connector = WorkerConnector::from_config(&config_for(&server)).expect("connector");
    let provider = connector.as_indices_provider().expect("capability");
    let err = provider.global_indices().await.unwrap_err();

    assert!(
        matches!(err, LookbackError::MalformedPayload { .. }),
        "got {err}"
    );
}

#[test]
fn bad_base_url_is_rejected_at_build_time() {
    let err = WorkerConnector::from_config(&EndpointConfig {
        base_url: "not a url".to_string(),
    })
    .unwrap_err();

    assert!(matches!(err, LookbackError::InvalidArg(_)));
}

#[test]
fn connector_advertises_both_capabilities() {
    let connector = WorkerConnector::new_default().expect("connector");

    assert_eq!(connector.name(), "lookback-worker");
    assert!(connector.as_indices_provider().is_some());
    assert!(connector.as_irr_provider().is_some());
}
