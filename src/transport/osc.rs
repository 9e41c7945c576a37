use crate::error::{PlayerError, Result};
use crate::transport::Transport;
use async_trait::async_trait;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, info};

/// Append an OSC string: UTF-8 bytes, a NUL terminator, then NUL padding to 4 bytes
fn write_osc_string(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
    while buf.len() % 4 != 0 {
        buf.push(0);
    }
}

/// Encode an OSC message with a single string argument
pub fn encode_message(address: &str, argument: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(address.len() + argument.len() + 12);
    write_osc_string(&mut buf, address);
    write_osc_string(&mut buf, ",s");
    write_osc_string(&mut buf, argument);
    buf
}

/// OSC client sending one UDP datagram per message
pub struct OscClient {
    name: String,
    socket: Option<UdpSocket>,
}

impl OscClient {
    /// Open a UDP socket aimed at `host:port`
    ///
    /// IPv4 addresses are preferred when the host resolves to both families.
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        let name = format!("{}:{}", host, port);
        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, port))
            .await
            .map_err(|e| PlayerError::Transport(format!("failed to resolve {}: {}", name, e)))?
            .collect();

        let target = addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| PlayerError::Transport(format!("no address found for {}", name)))?;

        let bind = if target.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(bind)
            .await
            .map_err(|e| PlayerError::Transport(format!("failed to bind UDP socket: {}", e)))?;
        socket
            .connect(target)
            .await
            .map_err(|e| PlayerError::Transport(format!("failed to connect to {}: {}", target, e)))?;

        info!("sending OSC to {} ({})", name, target);
        Ok(Self {
            name,
            socket: Some(socket),
        })
    }
}

#[async_trait]
impl Transport for OscClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn send(&mut self, address: &str, payload: &str) -> Result<()> {
        let socket = self
            .socket
            .as_ref()
            .ok_or_else(|| PlayerError::Transport("socket closed".to_string()))?;

        let packet = encode_message(address, payload);
        socket
            .send(&packet)
            .await
            .map_err(|e| PlayerError::Transport(format!("send to {} failed: {}", self.name, e)))?;
        debug!("sent {} bytes to {}{}", packet.len(), self.name, address);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if self.socket.take().is_some() {
            debug!("closed OSC socket to {}", self.name);
        }
        Ok(())
    }
}
