// Shared across test binaries; not every binary exercises every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lookback::{
    ChartRenderer, FailureNotifier, IndicesPayload, LookbackConnector, LookbackError, RenderModel,
};
use lookback_core::connector::IrrProvider;
use lookback_types::CalculationRequest;

/// Everything the session asked of the renderer, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Busy(bool),
    Render(RenderModel),
    Update(RenderModel),
    Destroy,
}

pub struct RecordingRenderer {
    log: Arc<Mutex<Vec<RenderEvent>>>,
}

impl ChartRenderer for RecordingRenderer {
    fn set_busy(&mut self, busy: bool) {
        self.log.lock().unwrap().push(RenderEvent::Busy(busy));
    }
    fn render(&mut self, model: &RenderModel) {
        self.log
            .lock()
            .unwrap()
            .push(RenderEvent::Render(model.clone()));
    }
    fn update(&mut self, model: &RenderModel) {
        self.log
            .lock()
            .unwrap()
            .push(RenderEvent::Update(model.clone()));
    }
    fn destroy(&mut self) {
        self.log.lock().unwrap().push(RenderEvent::Destroy);
    }
}

pub fn recording_renderer() -> (Box<dyn ChartRenderer>, Arc<Mutex<Vec<RenderEvent>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    (
        Box::new(RecordingRenderer {
            log: Arc::clone(&log),
        }),
        log,
    )
}

pub struct CountingNotifier {
    log: Arc<Mutex<Vec<String>>>,
}

impl FailureNotifier for CountingNotifier {
    fn notify(&mut self, error: &LookbackError) {
        self.log.lock().unwrap().push(error.to_string());
    }
}

pub fn counting_notifier() -> (Box<dyn FailureNotifier>, Arc<Mutex<Vec<String>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    (
        Box::new(CountingNotifier {
            log: Arc::clone(&log),
        }),
        log,
    )
}

/// Wraps the mock connector and counts calculation calls.
pub struct CountingConnector {
    inner: lookback_mock::MockConnector,
    pub calls: Arc<AtomicUsize>,
}

impl CountingConnector {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner: lookback_mock::MockConnector::new(),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl LookbackConnector for CountingConnector {
    fn name(&self) -> &'static str {
        "counting"
    }
    fn as_irr_provider(&self) -> Option<&dyn IrrProvider> {
        Some(self as &dyn IrrProvider)
    }
}

#[async_trait]
impl IrrProvider for CountingConnector {
    async fn calculate(&self, req: &CalculationRequest) -> Result<IndicesPayload, LookbackError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .as_irr_provider()
            .expect("mock capability")
            .calculate(req)
            .await
    }
}

/// Serves a fixed payload for every calculation.
pub struct PayloadConnector {
    pub payload: IndicesPayload,
}

impl LookbackConnector for PayloadConnector {
    fn name(&self) -> &'static str {
        "payload"
    }
    fn as_irr_provider(&self) -> Option<&dyn IrrProvider> {
        Some(self as &dyn IrrProvider)
    }
}

#[async_trait]
impl IrrProvider for PayloadConnector {
    async fn calculate(&self, _req: &CalculationRequest) -> Result<IndicesPayload, LookbackError> {
        Ok(self.payload.clone())
    }
}

/// Fails every calculation with the supplied error constructor.
pub struct ErrConnector {
    pub make: fn() -> LookbackError,
}

impl LookbackConnector for ErrConnector {
    fn name(&self) -> &'static str {
        "err"
    }
    fn as_irr_provider(&self) -> Option<&dyn IrrProvider> {
        Some(self as &dyn IrrProvider)
    }
}

#[async_trait]
impl IrrProvider for ErrConnector {
    async fn calculate(&self, _req: &CalculationRequest) -> Result<IndicesPayload, LookbackError> {
        Err((self.make)())
    }
}

/// Succeeds once, then serves a shape-violating payload error, so tests can
/// assert that a later failure leaves earlier rendered state untouched.
pub struct FailAfterFirstConnector {
    inner: lookback_mock::MockConnector,
    calls: AtomicUsize,
}

impl FailAfterFirstConnector {
    pub fn new() -> Self {
        Self {
            inner: lookback_mock::MockConnector::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl LookbackConnector for FailAfterFirstConnector {
    fn name(&self) -> &'static str {
        "fail-after-first"
    }
    fn as_irr_provider(&self) -> Option<&dyn IrrProvider> {
        Some(self as &dyn IrrProvider)
    }
}

#[async_trait]
impl IrrProvider for FailAfterFirstConnector {
    async fn calculate(&self, req: &CalculationRequest) -> Result<IndicesPayload, LookbackError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) > 0 {
            return Err(LookbackError::malformed("payload has no `data` field"));
        }
        self.inner
            .as_irr_provider()
            .expect("mock capability")
            .calculate(req)
            .await
    }
}

/// Parks every calculation until released, so tests can observe the
/// in-flight state.
pub struct StallingConnector {
    pub started: Arc<tokio::sync::Notify>,
    pub release: Arc<tokio::sync::Notify>,
    inner: lookback_mock::MockConnector,
}

impl StallingConnector {
    pub fn new() -> (Self, Arc<tokio::sync::Notify>, Arc<tokio::sync::Notify>) {
        let started = Arc::new(tokio::sync::Notify::new());
        let release = Arc::new(tokio::sync::Notify::new());
        (
            Self {
                started: Arc::clone(&started),
                release: Arc::clone(&release),
                inner: lookback_mock::MockConnector::new(),
            },
            started,
            release,
        )
    }
}

impl LookbackConnector for StallingConnector {
    fn name(&self) -> &'static str {
        "stalling"
    }
    fn as_irr_provider(&self) -> Option<&dyn IrrProvider> {
        Some(self as &dyn IrrProvider)
    }
}

#[async_trait]
impl IrrProvider for StallingConnector {
    async fn calculate(&self, req: &CalculationRequest) -> Result<IndicesPayload, LookbackError> {
        self.started.notify_one();
        self.release.notified().await;
        self.inner
            .as_irr_provider()
            .expect("mock capability")
            .calculate(req)
            .await
    }
}

/// Advertises no capability at all.
pub struct IncapableConnector;

impl LookbackConnector for IncapableConnector {
    fn name(&self) -> &'static str {
        "incapable"
    }
}

pub fn valid_request() -> CalculationRequest {
    CalculationRequest::new("01/01/2016", "12/31/2024", "100000", "NSE:NIFTY")
}
