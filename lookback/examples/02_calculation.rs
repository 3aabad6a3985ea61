mod common;
use common::get_connector;
use lookback::{ChartRenderer, FailureNotifier, Lookback, LookbackError, RenderModel};
use lookback_types::CalculationRequest;

/// Console stand-in for the chart collaborator.
struct ConsoleRenderer;

impl ChartRenderer for ConsoleRenderer {
    fn set_busy(&mut self, busy: bool) {
        println!("[renderer] trigger {}", if busy { "disabled" } else { "enabled" });
    }
    fn render(&mut self, model: &RenderModel) {
        let visible = model.series.iter().filter(|s| s.visible).count();
        println!(
            "[renderer] drew {} periods, {visible}/{} series visible",
            model.labels.len(),
            model.series.len()
        );
    }
    fn update(&mut self, model: &RenderModel) {
        let visible = model.series.iter().filter(|s| s.visible).count();
        println!("[renderer] visibility now {visible}/{}", model.series.len());
    }
    fn destroy(&mut self) {
        println!("[renderer] chart destroyed");
    }
}

struct ConsoleNotifier;

impl FailureNotifier for ConsoleNotifier {
    fn notify(&mut self, error: &LookbackError) {
        eprintln!("[alert] calculation failed: {error}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let lookback = Lookback::builder()
        .with_connector(get_connector())
        .build()?;
    let session = lookback.session(Box::new(ConsoleRenderer), Box::new(ConsoleNotifier));

    let req = CalculationRequest::new("01/01/2016", "12/31/2024", "100000", "NSE:NIFTY");
    let outcome = session.submit(&req).await?;

    println!("years:      {}", outcome.summary.years);
    println!("IRR:        {:.2}%", outcome.summary.calculated_irr);
    println!("exit value: {:.0}", outcome.summary.value_of_investment);
    for diag in &outcome.diagnostics {
        println!("diagnostic: {diag}");
    }

    // Toggle a comparison series off and back on.
    session.toggle_series("BSE IT", false)?;
    session.toggle_series("BSE IT", true)?;

    // Hover projection at the final base-adjusted level of the selection.
    if let Some(value) = session.projected_exit_value(outcome.summary.calculated_irr) {
        println!("hover projection at IRR%: {value:.0}");
    }

    session.dispose();
    Ok(())
}
