mod common;
use common::get_connector;
use lookback::Lookback;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    // 1. Create connector (mock in CI when LOOKBACK_EXAMPLES_USE_MOCK is set).
    let connector = get_connector();

    // 2. Build the orchestrator.
    let lookback = Lookback::builder().with_connector(connector).build()?;

    // 3. Fetch and align the full comparison chart.
    let view = lookback.overview().await?;

    println!("periods: {}", view.window.labels.len());
    for series in &view.model.series {
        let marker = if series.visible { "shown" } else { "hidden" };
        let last = series
            .values
            .iter()
            .rev()
            .find_map(|v| *v)
            .map_or_else(|| "-".to_string(), |v| format!("{v:.1}"));
        println!("  {:12} {:>8}  latest {last}", series.name, marker);
    }
    for diag in &view.diagnostics {
        println!("diagnostic: {diag}");
    }

    Ok(())
}
