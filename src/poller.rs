//! Clipboard poller.
//!
//! Polls the relay endpoint every 300ms. When the endpoint returns
//! non-empty text, it is written verbatim to the system clipboard. Every
//! failure is fatal to its own cycle only; the cadence never changes.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use crate::clipboard::ClipboardSink;

/// Fixed poll cadence. Deliberately not configurable.
pub const POLL_INTERVAL: Duration = Duration::from_millis(300);

/// What a single poll cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Non-empty text was fetched and written to the clipboard.
    Copied,
    /// The endpoint returned an empty body; nothing to do.
    Empty,
    /// The GET failed (network error or non-2xx status).
    FetchError,
    /// Text was fetched but the clipboard write failed.
    WriteError,
}

pub struct Poller {
    endpoint: String,
    http_client: reqwest::Client,
    sink: Arc<dyn ClipboardSink>,
}

impl Poller {
    /// Create a poller for the given endpoint.
    ///
    /// The client carries no request timeout: a hung fetch only stalls
    /// its own cycle, never the tick schedule.
    pub fn new(endpoint: String, sink: Arc<dyn ClipboardSink>) -> Self {
        Self {
            endpoint,
            http_client: reqwest::Client::new(),
            sink,
        }
    }

    /// Poll the endpoint forever at the fixed cadence.
    ///
    /// Each tick runs its cycle as an independent task, so a cycle that
    /// outlives the interval overlaps the next one. Overlap is harmless:
    /// cycles share nothing and the clipboard is simply overwritten.
    pub async fn run(self) {
        let poller = Arc::new(self);
        let mut interval = time::interval(POLL_INTERVAL);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            let poller = Arc::clone(&poller);
            tokio::spawn(async move {
                poller.run_cycle().await;
            });
        }
    }

    /// One fetch -> conditional clipboard write.
    ///
    /// Never fails; every error collapses into an outcome for this cycle,
    /// and the next cycle retries unconditionally. Each cycle emits
    /// exactly one log line, with the error detail on the warn.
    pub async fn run_cycle(&self) -> CycleOutcome {
        let text = match self.fetch_text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "poll cycle failed to fetch");
                return CycleOutcome::FetchError;
            }
        };

        if text.is_empty() {
            debug!("poll cycle found nothing to do");
            return CycleOutcome::Empty;
        }

        match self.sink.write_text(&text) {
            Ok(()) => {
                debug!(bytes = text.len(), "poll cycle copied text to clipboard");
                CycleOutcome::Copied
            }
            Err(e) => {
                warn!(error = %e, "poll cycle failed to write clipboard");
                CycleOutcome::WriteError
            }
        }
    }

    async fn fetch_text(&self) -> Result<String> {
        let text = self
            .http_client
            .get(&self.endpoint)
            .send()
            .await
            .context("Failed to reach clipboard endpoint")?
            .error_for_status()
            .context("Clipboard endpoint returned an error status")?
            .text()
            .await
            .context("Failed to read clipboard endpoint response")?;
        Ok(text)
    }
}
