//! Per-request calculation lifecycle: `Idle → Loading → {Success | Failure}
//! → Idle`, with a single-flight guard and exactly-once failure reporting.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use lookback_core::{
    AlignedActual, AlignedWindow, Diagnostic, DisplaySelection, IrrSummary, LookbackConnector,
    LookbackError, RenderModel, actual_values, build_window, companion_index_name,
    compute_display_model, exit_value, locate_exit_index, reconcile_tables, require_base_table,
    resolve_display_selection,
};
use lookback_types::{AlignerConfig, CalculationRequest};

use crate::validate::validate_request;

/// Rendering collaborator applied imperatively by the session.
///
/// The renderer owns all presentation (colors, animation, legend DOM); the
/// session only hands it models and lifecycle signals.
pub trait ChartRenderer: Send {
    /// Mirror the in-flight state on the trigger control (disable on `true`,
    /// restore on `false`).
    fn set_busy(&mut self, busy: bool);

    /// Draw a fresh chart from the model. Only ever called after any prior
    /// chart was torn down via [`destroy`](Self::destroy).
    fn render(&mut self, model: &RenderModel);

    /// Apply visibility changes of an already-rendered chart.
    fn update(&mut self, model: &RenderModel);

    /// Tear the current chart down completely.
    fn destroy(&mut self);
}

/// Failure-reporting collaborator. Called exactly once per failed request.
pub trait FailureNotifier: Send {
    /// Surface the failure to the user.
    fn notify(&mut self, error: &LookbackError);
}

/// Observable lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No request outstanding.
    Idle,
    /// A request is in flight; re-submission is rejected.
    Loading,
}

/// Result of a successful calculation submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutcome {
    /// Display metrics echoed by the endpoint, zero-filled when absent.
    pub summary: IrrSummary,
    /// The model handed to the renderer.
    pub model: RenderModel,
    /// Non-fatal degradations observed while aligning.
    pub diagnostics: Vec<Diagnostic>,
}

struct SessionInner {
    renderer: Box<dyn ChartRenderer>,
    notifier: Box<dyn FailureNotifier>,
    rendered: bool,
    window: Option<AlignedWindow>,
    actual: Vec<AlignedActual>,
    selection: DisplaySelection,
    emphasized: Option<String>,
    summary: Option<IrrSummary>,
    amount: Option<f64>,
}

/// A disposable calculation session.
///
/// Owns the display selection and the most-recent aligned window
/// exclusively; every successful submission replaces both wholesale, tearing
/// the previous chart down before the new one is constructed. One request
/// may be in flight at a time; concurrent submission is rejected with
/// [`LookbackError::Busy`], not queued.
pub struct CalculationSession {
    connector: Arc<dyn LookbackConnector>,
    cfg: AlignerConfig,
    in_flight: AtomicBool,
    inner: Mutex<SessionInner>,
}

impl CalculationSession {
    pub(crate) fn new(
        connector: Arc<dyn LookbackConnector>,
        cfg: AlignerConfig,
        renderer: Box<dyn ChartRenderer>,
        notifier: Box<dyn FailureNotifier>,
    ) -> Self {
        Self {
            connector,
            cfg,
            in_flight: AtomicBool::new(false),
            inner: Mutex::new(SessionInner {
                renderer,
                notifier,
                rendered: false,
                window: None,
                actual: Vec::new(),
                selection: DisplaySelection::default(),
                emphasized: None,
                summary: None,
                amount: None,
            }),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        if self.in_flight.load(Ordering::SeqCst) {
            SessionState::Loading
        } else {
            SessionState::Idle
        }
    }

    /// Submit a calculation request and drive it to completion.
    ///
    /// On success the previous chart (if any) is destroyed, the new model is
    /// rendered, and the session's window, selection, and metrics are
    /// replaced. On failure nothing rendered is touched, the trigger control
    /// is restored, and the notifier fires exactly once.
    ///
    /// # Errors
    /// - `LookbackError::Busy` when a request is already in flight; the
    ///   notifier does not fire (the trigger control is already disabled).
    /// - `LookbackError::InvalidArg` for validation failures, before any
    ///   fetch.
    /// - `LookbackError::Network` / `MalformedPayload` / `Connector`
    ///   propagated from the fetch.
    pub async fn submit(
        &self,
        req: &CalculationRequest,
    ) -> Result<CalculationOutcome, LookbackError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(LookbackError::Busy);
        }
        self.with_inner(|inner| inner.renderer.set_busy(true));

        let result = self.run(req).await;

        // Finally-equivalent: restore the trigger and clear the lock on both
        // success and failure paths.
        self.with_inner(|inner| inner.renderer.set_busy(false));
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                tracing::warn!(error = %e, "calculation request failed");
                self.with_inner(|inner| inner.notifier.notify(&e));
                Err(e)
            }
        }
    }

    async fn run(&self, req: &CalculationRequest) -> Result<CalculationOutcome, LookbackError> {
        let validated = validate_request(req, &self.cfg)?;
        let provider = self
            .connector
            .as_irr_provider()
            .ok_or_else(|| LookbackError::unsupported("irr"))?;

        let payload = provider.calculate(req).await?;
        require_base_table(&payload)?;
        let mut diagnostics = reconcile_tables(&payload);

        let base = payload.base_adjusted();
        let reference = &base[0].historical_data;
        let location = locate_exit_index(reference, validated.end);
        if location.fail_open {
            let diag = Diagnostic::ExitBeforeData {
                exit_date: validated.end.to_string(),
            };
            tracing::warn!(diagnostic = %diag, "alignment degraded");
            diagnostics.push(diag);
        }

        let window = build_window(&base, location.index);
        let actual = actual_values(&payload.actual(), location.index);
        let selection = resolve_display_selection(&req.index, &self.cfg.default_series);
        let emphasized = companion_index_name(&req.index);
        let model = compute_display_model(&window, &selection, Some(&emphasized));
        let summary = payload.irr_summary();

        tracing::info!(
            exit_index = location.index,
            periods = window.labels.len(),
            irr = summary.calculated_irr,
            "calculation aligned"
        );

        self.with_inner(|inner| {
            if inner.rendered {
                inner.renderer.destroy();
            }
            inner.renderer.render(&model);
            inner.rendered = true;
            inner.window = Some(window);
            inner.actual = actual;
            inner.selection = selection;
            inner.emphasized = Some(emphasized);
            inner.summary = Some(summary);
            inner.amount = Some(validated.amount);
        });

        Ok(CalculationOutcome {
            summary,
            model,
            diagnostics,
        })
    }

    /// Toggle a series on or off and push the updated model to the renderer.
    ///
    /// # Errors
    /// Returns `LookbackError::InvalidArg` when no calculation has been
    /// rendered yet.
    pub fn toggle_series(&self, name: &str, visible: bool) -> Result<RenderModel, LookbackError> {
        self.with_inner(|inner| {
            let Some(window) = inner.window.clone() else {
                return Err(LookbackError::invalid_arg("no calculation rendered yet"));
            };
            if visible {
                inner.selection.insert(name);
            } else {
                inner.selection.remove(name);
            }
            let model = compute_display_model(&window, &inner.selection, inner.emphasized.as_deref());
            inner.renderer.update(&model);
            Ok(model)
        })
    }

    /// Project the exit value of the submitted principal at a hovered growth
    /// percentage; `None` before the first successful calculation.
    pub fn projected_exit_value(&self, hovered_pct: f64) -> Option<f64> {
        self.with_inner(|inner| inner.amount.map(|amount| exit_value(amount, hovered_pct)))
    }

    /// The most-recent aligned window, if a calculation succeeded.
    pub fn window(&self) -> Option<AlignedWindow> {
        self.with_inner(|inner| inner.window.clone())
    }

    /// The zero-filled actual-values table of the most-recent calculation.
    pub fn actual(&self) -> Vec<AlignedActual> {
        self.with_inner(|inner| inner.actual.clone())
    }

    /// The display metrics of the most-recent calculation.
    pub fn summary(&self) -> Option<IrrSummary> {
        self.with_inner(|inner| inner.summary)
    }

    /// The current display selection.
    pub fn selection(&self) -> DisplaySelection {
        self.with_inner(|inner| inner.selection.clone())
    }

    /// Tear the session down, destroying any rendered chart.
    pub fn dispose(self) {
        let mut inner = self
            .inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        if inner.rendered {
            inner.renderer.destroy();
        }
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut SessionInner) -> R) -> R {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inner)
    }
}
