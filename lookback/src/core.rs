use std::sync::Arc;

use lookback_core::{
    AlignedActual, AlignedWindow, Diagnostic, LookbackConnector, LookbackError, RenderModel,
    actual_values, build_window, compute_display_model, reconcile_tables, require_base_table,
    resolve_display_selection,
};
use lookback_types::{AlignerConfig, LookbackConfig};

use crate::session::{CalculationSession, ChartRenderer, FailureNotifier};

/// Orchestrator binding a connector to the alignment engine.
pub struct Lookback {
    pub(crate) connector: Arc<dyn LookbackConnector>,
    pub(crate) cfg: LookbackConfig,
}

impl std::fmt::Debug for Lookback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lookback")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a `Lookback` orchestrator with custom
/// configuration.
pub struct LookbackBuilder {
    connector: Option<Arc<dyn LookbackConnector>>,
    cfg: LookbackConfig,
}

impl Default for LookbackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LookbackBuilder {
    /// Create a new builder with default configuration.
    ///
    /// No connector is registered; you must provide one via
    /// [`with_connector`](Self::with_connector) before `build`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: LookbackConfig::default(),
        }
    }

    /// Register the data connector. A later call replaces an earlier one;
    /// the system speaks to a single endpoint.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn LookbackConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the full configuration.
    #[must_use]
    pub fn config(mut self, cfg: LookbackConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace only the aligner configuration (default series, minimum
    /// start date).
    #[must_use]
    pub fn aligner(mut self, aligner: AlignerConfig) -> Self {
        self.cfg.aligner = aligner;
        self
    }

    /// Finalize the orchestrator.
    ///
    /// # Errors
    /// Returns `LookbackError::InvalidArg` when no connector is registered.
    pub fn build(self) -> Result<Lookback, LookbackError> {
        let connector = self
            .connector
            .ok_or_else(|| LookbackError::invalid_arg("no connector registered"))?;
        Ok(Lookback {
            connector,
            cfg: self.cfg,
        })
    }
}

/// Everything the overview chart needs for one draw, plus diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    /// The full-range aligned window (gap-preserving values).
    pub window: AlignedWindow,
    /// Render model with default-set visibility and no emphasis.
    pub model: RenderModel,
    /// Zero-filled actual-values table over the same range.
    pub actual: Vec<AlignedActual>,
    /// Non-fatal degradations observed while reconciling the payload.
    pub diagnostics: Vec<Diagnostic>,
}

impl Lookback {
    /// Entry point for the builder.
    #[must_use]
    pub fn builder() -> LookbackBuilder {
        LookbackBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &LookbackConfig {
        &self.cfg
    }

    /// Fetch and align the full global-indices overview.
    ///
    /// The whole series range is used (no exit date applies) and the
    /// display selection is exactly the configured default set.
    ///
    /// # Errors
    /// - `LookbackError::Unsupported` when the connector lacks the overview
    ///   capability.
    /// - `LookbackError::Network` / `LookbackError::MalformedPayload`
    ///   propagated from fetch and decode; no chart state is produced.
    pub async fn overview(&self) -> Result<OverviewView, LookbackError> {
        let provider = self
            .connector
            .as_indices_provider()
            .ok_or_else(|| LookbackError::unsupported("global-indices"))?;

        let payload = provider.global_indices().await?;
        require_base_table(&payload)?;
        let diagnostics = reconcile_tables(&payload);

        let base = payload.base_adjusted();
        let full_range = base
            .first()
            .map_or(0, |e| e.historical_data.len().saturating_sub(1));
        let window = build_window(&base, full_range);
        let actual = actual_values(&payload.actual(), full_range);

        let mut selection = lookback_core::DisplaySelection::default();
        for name in &self.cfg.aligner.default_series {
            selection.insert(name);
        }
        let model = compute_display_model(&window, &selection, None);

        tracing::info!(
            series = window.series.len(),
            periods = window.labels.len(),
            diagnostics = diagnostics.len(),
            "overview aligned"
        );
        Ok(OverviewView {
            window,
            model,
            actual,
            diagnostics,
        })
    }

    /// Open a disposable calculation session bound to a renderer and a
    /// failure notifier.
    ///
    /// Each session owns its display selection and most-recent window; a
    /// new submission fully replaces the prior rendered state.
    #[must_use]
    pub fn session(
        &self,
        renderer: Box<dyn ChartRenderer>,
        notifier: Box<dyn FailureNotifier>,
    ) -> CalculationSession {
        CalculationSession::new(
            Arc::clone(&self.connector),
            self.cfg.aligner.clone(),
            renderer,
            notifier,
        )
    }

    /// Resolve the initial display selection for a selected series under
    /// this configuration.
    #[must_use]
    pub fn initial_selection(&self, selected: &str) -> lookback_core::DisplaySelection {
        resolve_display_selection(selected, &self.cfg.aligner.default_series)
    }
}
