use std::sync::Arc;

use lookback::LookbackConnector;

/// Pick the mock connector in CI (when `LOOKBACK_EXAMPLES_USE_MOCK` is set)
/// and the live worker endpoint otherwise.
pub fn get_connector() -> Arc<dyn LookbackConnector> {
    if std::env::var("LOOKBACK_EXAMPLES_USE_MOCK").is_ok() {
        Arc::new(lookback_mock::MockConnector::new())
    } else {
        Arc::new(
            lookback_worker::WorkerConnector::new_default()
                .expect("default endpoint configuration is a valid url"),
        )
    }
}
