use crate::error::{PlayerError, Result};
use crate::transport::Transport;
use async_trait::async_trait;
use tokio::time::Instant;

/// A message captured by the mock transport
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub at: Instant,
    pub address: String,
    pub payload: String,
}

/// Mock transport for testing without a network
///
/// Records every successful send with the (tokio) time it happened.
pub struct MockTransport {
    closed: bool,
    sent: Vec<SentMessage>,
    attempts: usize,
    close_count: usize,
    fail_sends: bool,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            closed: false,
            sent: Vec::new(),
            attempts: 0,
            close_count: 0,
            fail_sends: false,
        }
    }

    /// Make every send return an error
    pub fn set_fail_sends(&mut self, fail: bool) {
        self.fail_sends = fail;
    }

    pub fn sent(&self) -> &[SentMessage] {
        &self.sent
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn close_count(&self) -> usize {
        self.close_count
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send(&mut self, address: &str, payload: &str) -> Result<()> {
        self.attempts += 1;
        if self.fail_sends || self.closed {
            return Err(PlayerError::Transport("mock send failed".to_string()));
        }
        self.sent.push(SentMessage {
            at: Instant::now(),
            address: address.to_string(),
            payload: payload.to_string(),
        });
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.close_count += 1;
        self.closed = true;
        Ok(())
    }
}
