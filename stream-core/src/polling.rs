//! Per-stream poll loop.
//!
//! Each stream view runs its own loop: fetch, apply, sleep, repeat. Loops do
//! not coordinate. A loop stops once its [`PollHandle`] is cancelled; a
//! response that lands after cancellation is dropped without being applied.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::snapshot::StreamSnapshot;

/// Where stream contents come from.
#[async_trait(?Send)]
pub trait StreamSource {
    /// Fetch the full current contents of one stream.
    async fn fetch_stream(&self, stream_name: &str) -> Result<StreamSnapshot, FetchError>;
}

/// Shared alive flag for one poll loop.
#[derive(Debug, Clone)]
pub struct PollHandle {
    alive: Rc<Cell<bool>>,
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PollHandle {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.alive.set(false);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }
}

/// Last good snapshot plus fetch health for one stream.
#[derive(Debug, Clone)]
pub struct StreamState {
    stream_name: String,
    snapshot: Option<StreamSnapshot>,
    consecutive_failures: u32,
}

impl StreamState {
    pub fn new(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: stream_name.into(),
            snapshot: None,
            consecutive_failures: 0,
        }
    }

    /// `None` until the first successful fetch.
    pub fn snapshot(&self) -> Option<&StreamSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Apply one fetch result. Success replaces the snapshot wholesale;
    /// failure keeps whatever was there. Returns whether the snapshot was
    /// replaced.
    pub fn apply(&mut self, result: Result<StreamSnapshot, FetchError>) -> bool {
        match result {
            Ok(snapshot) => {
                if self.consecutive_failures > 0 {
                    tracing::info!(
                        stream = %self.stream_name,
                        failures = self.consecutive_failures,
                        "stream fetch recovered"
                    );
                }
                self.consecutive_failures = 0;
                self.snapshot = Some(snapshot);
                true
            }
            Err(e) => {
                self.consecutive_failures += 1;
                if self.consecutive_failures == 1 {
                    tracing::warn!(
                        stream = %self.stream_name,
                        "stream fetch failed, keeping last snapshot: {}",
                        e
                    );
                } else {
                    tracing::debug!(
                        stream = %self.stream_name,
                        failures = self.consecutive_failures,
                        "stream fetch still failing: {}",
                        e
                    );
                }
                false
            }
        }
    }
}

/// Poll `stream_name` until `handle` is cancelled.
///
/// The first fetch goes out immediately; `sleep` is awaited between ticks.
/// `on_snapshot` is called with every snapshot that replaces the previous
/// one, in completion order.
pub async fn run_poll_loop<S, Z, F, A>(
    source: &S,
    stream_name: &str,
    interval: Duration,
    handle: PollHandle,
    mut sleep: Z,
    mut on_snapshot: A,
) where
    S: StreamSource + ?Sized,
    Z: FnMut(Duration) -> F,
    F: Future<Output = ()>,
    A: FnMut(StreamSnapshot),
{
    let mut state = StreamState::new(stream_name);
    tracing::debug!(stream = %stream_name, "poll loop started");

    while handle.is_alive() {
        let result = source.fetch_stream(stream_name).await;
        if !handle.is_alive() {
            tracing::debug!(stream = %stream_name, "discarding response for stopped stream");
            break;
        }

        if state.apply(result) {
            if let Some(snapshot) = state.snapshot() {
                on_snapshot(snapshot.clone());
            }
        }

        sleep(interval).await;
    }

    tracing::debug!(stream = %stream_name, "poll loop stopped");
}
