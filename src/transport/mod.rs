pub mod osc;
#[cfg(test)]
pub mod mock;

pub use osc::OscClient;

use crate::error::Result;
use async_trait::async_trait;

/// Destination for replayed payloads
///
/// Implementations:
/// - OSC over UDP to a Mercury instance
/// - Mock transport for testing
#[async_trait]
pub trait Transport: Send {
    /// Get the name/identifier of this transport
    fn name(&self) -> &str;

    /// Send one payload to `address`; never waits for acknowledgement
    async fn send(&mut self, address: &str, payload: &str) -> Result<()>;

    /// Release the connection. Calling this again is a no-op.
    async fn close(&mut self) -> Result<()>;
}
