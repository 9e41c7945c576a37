use crate::core::{PlayableEvent, ResolvedPlaylist};
use crate::error::{PlayerError, Result};
use crate::input::{parse_filename_timestamp, FileSource};
use crate::playback::{TimestampSource, TimingPolicy};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Uniform wait for fixed-length playback: `floor(secs * 1000 / file_count)`
pub fn uniform_wait(fixed_length_secs: f64, file_count: usize) -> i64 {
    if file_count == 0 {
        return 0;
    }
    (fixed_length_secs * 1000.0 / file_count as f64).floor() as i64
}

/// Turns an ordered list of log files into playable events
///
/// Event order always follows the input order; the timing policy only
/// decides the waits between events.
pub struct TimestampResolver<'a, S: FileSource + ?Sized> {
    source: &'a S,
    policy: &'a TimingPolicy,
}

impl<'a, S: FileSource + ?Sized> TimestampResolver<'a, S> {
    pub fn new(source: &'a S, policy: &'a TimingPolicy) -> Self {
        Self { source, policy }
    }

    /// Anchor time of a single file in milliseconds
    fn anchor_ms(&self, path: &Path) -> Result<i64> {
        let time = match self.policy.source {
            TimestampSource::Created => self.source.created(path)?,
            TimestampSource::Filename => parse_filename_timestamp(path)?,
        };
        Ok(time.timestamp_millis())
    }

    /// Read every file and compute the wait after each one
    pub fn resolve(&self, files: &[PathBuf]) -> Result<ResolvedPlaylist> {
        let uniform = self
            .policy
            .fixed_length_secs
            .map(|secs| uniform_wait(secs, files.len()));

        let mut events: Vec<PlayableEvent> = Vec::with_capacity(files.len());
        let mut total_ms = 0i64;

        for path in files {
            let payload = self.source.read_to_string(path)?;

            // A fixed length makes per-file timestamps irrelevant, so they are not looked up
            let anchor = if uniform.is_some() {
                0
            } else {
                match self.anchor_ms(path) {
                    Ok(ms) => ms,
                    Err(PlayerError::TimestampParse(name)) => {
                        return Err(PlayerError::Config(format!(
                            "could not read a timestamp from {}, provide a total length with -l",
                            name
                        )));
                    }
                    Err(e) => return Err(e),
                }
            };

            if let Some(previous) = events.last_mut() {
                let wait = uniform.unwrap_or_else(|| anchor.saturating_sub(previous.anchor_ms));
                previous.wait_after = Some(wait);
                total_ms = total_ms.saturating_add(wait);
            }

            debug!("{} anchored at {}ms", path.display(), anchor);
            events.push(PlayableEvent::new(path.clone(), payload, anchor));
        }

        Ok(ResolvedPlaylist { events, total_ms })
    }
}
