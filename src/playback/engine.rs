use crate::core::PlayableEvent;
use crate::transport::Transport;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Counters for a finished or interrupted playback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    pub dispatched: usize,
    pub failed: usize,
}

/// Result of a single scheduler tick
#[derive(Debug, Clone, Copy, PartialEq)]
enum Tick {
    /// An event was sent; wait this long before the next tick
    Dispatched(Option<Duration>),
    Exhausted,
}

/// Convert a scaled wait into a timer delay
///
/// Timers cannot run backwards, so negative waits fire immediately. Waits too
/// long for a `Duration` (a tiny rate) are capped at `Duration::MAX`.
fn delay_from_ms(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
}

/// Playback engine for log files
///
/// Owns the event queue and consumes it front to back, one dispatch per tick.
pub struct PlaybackEngine {
    queue: VecDeque<PlayableEvent>,
    rate: f64,
    address: String,
    report: PlaybackReport,
}

impl PlaybackEngine {
    /// `rate` must be positive; it is validated with the rest of the configuration.
    pub fn new(events: Vec<PlayableEvent>, rate: f64, address: impl Into<String>) -> Self {
        Self {
            queue: events.into(),
            rate,
            address: address.into(),
            report: PlaybackReport::default(),
        }
    }

    /// Number of events still waiting to be sent
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn report(&self) -> PlaybackReport {
        self.report
    }

    /// Send the next event and work out the delay until the following one
    async fn tick<T: Transport + ?Sized>(&mut self, transport: &mut T) -> Tick {
        let Some(current) = self.queue.pop_front() else {
            return Tick::Exhausted;
        };

        let scaled = current.scaled_wait(self.rate);
        match scaled {
            Some(ms) => info!("files left: {}, next in {}ms", self.queue.len(), ms),
            None => info!("files left: {}", self.queue.len()),
        }

        // Fire and forget: a failed send never holds up the rest of the performance
        match transport.send(&self.address, &current.payload).await {
            Ok(()) => {
                self.report.dispatched += 1;
                debug!("sent {}", current.source.display());
            }
            Err(e) => {
                self.report.failed += 1;
                warn!("failed to send {}: {}", current.source.display(), e);
            }
        }

        Tick::Dispatched(scaled.map(delay_from_ms))
    }

    /// Play every queued event in order, sleeping between dispatches
    pub async fn run<T: Transport + ?Sized>(&mut self, transport: &mut T) -> PlaybackReport {
        while let Tick::Dispatched(delay) = self.tick(transport).await {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
        }

        info!("playback done!");
        self.report
    }
}
