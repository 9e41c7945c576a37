use std::path::PathBuf;

/// A single log file ready to be replayed
#[derive(Debug, Clone, PartialEq)]
pub struct PlayableEvent {
    /// File the payload was read from
    pub source: PathBuf,

    /// Verbatim file content, sent as one message
    pub payload: String,

    /// Logical timestamp in milliseconds since the Unix epoch
    pub anchor_ms: i64,

    /// Milliseconds to wait after dispatching this event (None for the last one)
    pub wait_after: Option<i64>,
}

impl PlayableEvent {
    pub fn new(source: impl Into<PathBuf>, payload: impl Into<String>, anchor_ms: i64) -> Self {
        Self {
            source: source.into(),
            payload: payload.into(),
            anchor_ms,
            wait_after: None,
        }
    }

    /// Wait scaled by the playback rate
    pub fn scaled_wait(&self, rate: f64) -> Option<f64> {
        self.wait_after.map(|ms| ms as f64 / rate)
    }
}

/// Ordered events plus the total unscaled performance time
#[derive(Debug, Clone, Default)]
pub struct ResolvedPlaylist {
    pub events: Vec<PlayableEvent>,
    pub total_ms: i64,
}

impl ResolvedPlaylist {
    /// Total runtime once the playback rate is applied
    pub fn scaled_total_ms(&self, rate: f64) -> f64 {
        self.total_ms as f64 / rate
    }
}
