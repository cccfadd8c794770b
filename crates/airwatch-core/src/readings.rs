//! Live readings screen: state and fixed-interval poll loop

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use airwatch_model::Reading;

use crate::client::AirQualityApi;

/// State owned by the live readings screen
#[derive(Debug)]
pub struct ReadingsScreen {
    pub readings: Vec<Reading>,
    /// True until the first poll settles, then permanently false
    pub loading: bool,
}

impl ReadingsScreen {
    pub fn new() -> Self {
        Self {
            readings: Vec::new(),
            loading: true,
        }
    }

    /// Apply the outcome of one poll.
    ///
    /// Success replaces the collection verbatim; failure keeps the last
    /// known readings and only logs. Either way the first settle clears
    /// the loading flag for good.
    pub fn apply_poll(&mut self, result: crate::Result<Vec<Reading>>) {
        match result {
            Ok(readings) => {
                tracing::debug!("Poll returned {} readings", readings.len());
                self.readings = readings;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch air quality data: {}", e);
            }
        }
        self.loading = false;
    }
}

impl Default for ReadingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe handle to the readings screen state
pub type ReadingsHandle = Arc<RwLock<ReadingsScreen>>;

pub fn new_readings_handle() -> ReadingsHandle {
    Arc::new(RwLock::new(ReadingsScreen::new()))
}

/// Fetch once and fold the result into the screen state
pub async fn poll_once(api: &dyn AirQualityApi, state: &ReadingsHandle) {
    let result = api.list_readings().await;
    state.write().await.apply_poll(result);
}

/// Poll the readings endpoint at a fixed period until cancelled.
///
/// The first poll fires immediately; after that one request per period.
/// Cancellation wins the race against the inter-poll sleep, so no
/// request fires once the token is triggered.
pub async fn poll_loop(
    api: Arc<dyn AirQualityApi>,
    state: ReadingsHandle,
    period: Duration,
    cancel: CancellationToken,
) {
    loop {
        poll_once(api.as_ref(), &state).await;

        tokio::select! {
            _ = tokio::time::sleep(period) => {}
            _ = cancel.cancelled() => {
                tracing::debug!("Readings poll loop cancelled");
                break;
            }
        }
    }
}
