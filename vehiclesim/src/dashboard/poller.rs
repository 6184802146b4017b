//! Dashboard poll loop.
//!
//! Fetches the position report on a fixed interval and hands each outcome to
//! a callback. A failed fetch is reported and the loop carries on; the next
//! tick is the retry.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::client::{FetchError, VehicleClient};
use crate::simulation::PositionReport;

/// Default poll interval (3 seconds), matching the simulation step.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Outcome of one poll.
#[derive(Debug)]
pub enum PollEvent {
    /// A fresh report was received.
    Report(Box<PositionReport>),
    /// The fetch failed; shown as a banner until the next success.
    FetchFailed(FetchError),
}

/// Poll loop driving the terminal dashboard.
pub struct DashboardPoller<C: VehicleClient> {
    client: C,
    interval: Duration,
}

impl<C: VehicleClient> DashboardPoller<C> {
    /// Create a poller with the default interval.
    pub fn new(client: C) -> Self {
        Self {
            client,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the poll interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// The configured poll interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch once.
    pub async fn poll_once(&self) -> PollEvent {
        match self.client.fetch_position().await {
            Ok(report) => PollEvent::Report(Box::new(report)),
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching vehicle data");
                PollEvent::FetchFailed(e)
            }
        }
    }

    /// Poll until `cancellation` fires. The first poll happens immediately.
    ///
    /// Returns the number of polls performed.
    pub async fn run<F>(&self, cancellation: CancellationToken, mut on_event: F) -> u64
    where
        F: FnMut(PollEvent),
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut polls = 0;

        tracing::info!(
            interval_ms = self.interval.as_millis() as u64,
            "Dashboard polling started"
        );

        loop {
            tokio::select! {
                biased;
                _ = cancellation.cancelled() => break,
                _ = ticker.tick() => {
                    let event = tokio::select! {
                        biased;
                        _ = cancellation.cancelled() => break,
                        event = self.poll_once() => event,
                    };
                    polls += 1;
                    on_event(event);
                }
            }
        }

        tracing::info!(polls, "Dashboard polling stopped");
        polls
    }
}
