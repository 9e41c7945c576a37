pub mod engine;
pub mod resolver;
pub mod session;

pub use engine::{PlaybackEngine, PlaybackReport};
pub use resolver::TimestampResolver;
pub use session::{run_session, SessionOutcome};

/// Where each log file's anchor time comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TimestampSource {
    /// Filesystem creation time
    #[default]
    Created,
    /// Date and time encoded in the file name
    Filename,
}

/// Timing options consumed by the resolver
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingPolicy {
    pub source: TimestampSource,
    /// Fixed total playback length in seconds, spread evenly over all files
    pub fixed_length_secs: Option<f64>,
}
