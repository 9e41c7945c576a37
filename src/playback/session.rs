use crate::playback::{PlaybackEngine, PlaybackReport};
use crate::transport::Transport;
use std::future::Future;
use tracing::{info, warn};

/// How a playback session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed(PlaybackReport),
    Interrupted(PlaybackReport),
}

impl SessionOutcome {
    pub fn report(&self) -> PlaybackReport {
        match self {
            SessionOutcome::Completed(report) | SessionOutcome::Interrupted(report) => *report,
        }
    }
}

/// Run the engine until the queue is empty or `shutdown` resolves
///
/// The transport is closed exactly once on either path.
pub async fn run_session<T, F>(
    engine: &mut PlaybackEngine,
    transport: &mut T,
    shutdown: F,
) -> SessionOutcome
where
    T: Transport + ?Sized,
    F: Future<Output = ()>,
{
    let outcome = tokio::select! {
        report = engine.run(transport) => SessionOutcome::Completed(report),
        _ = shutdown => {
            info!("playback interrupted");
            SessionOutcome::Interrupted(engine.report())
        }
    };

    if let Err(e) = transport.close().await {
        warn!("failed to close {}: {}", transport.name(), e);
    }

    outcome
}
