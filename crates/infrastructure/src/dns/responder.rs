//! UDP responder that answers every standard query with the portal address.
//!
//! The socket is driven through [`AsyncFd`]: the task parks on readiness
//! instead of blocking, so the HTTP side keeps running on the same thread.

use super::{wire, wire_response};
use captive_portal_domain::config::DnsConfig;
use captive_portal_domain::{DecodedQuery, DomainError};
use std::io;
use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::time::Duration;
use tokio::io::unix::AsyncFd;
use tokio::io::Interest;
use tracing::{debug, info, warn};

/// What happened to one received datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Replied { peer: SocketAddr, domain: String },
    Dropped { peer: SocketAddr },
}

pub struct DnsResponder {
    socket: AsyncFd<UdpSocket>,
    answer_ip: Ipv4Addr,
    error_backoff: Duration,
    recv_buffer_size: usize,
}

impl DnsResponder {
    /// Takes ownership of a bound socket that is already in non-blocking
    /// mode. Must be called inside a tokio runtime.
    pub fn new(socket: UdpSocket, answer_ip: Ipv4Addr, config: &DnsConfig) -> io::Result<Self> {
        Ok(Self {
            socket: AsyncFd::with_interest(socket, Interest::READABLE | Interest::WRITABLE)?,
            answer_ip,
            error_backoff: config.error_backoff(),
            recv_buffer_size: config.recv_buffer_size,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.get_ref().local_addr()
    }

    /// Serves datagrams until the task is dropped.
    ///
    /// Any error is logged and followed by the configured back-off, which
    /// throttles a storm of bad packets without ending the task.
    pub async fn run(self) {
        info!(
            bind_address = ?self.local_addr().ok(),
            answer_ip = %self.answer_ip,
            "DNS responder started"
        );

        let mut recv_buf = vec![0u8; self.recv_buffer_size];

        loop {
            if let Err(e) = self.serve_one(&mut recv_buf).await {
                warn!(
                    error = %e,
                    backoff_ms = self.error_backoff.as_millis() as u64,
                    "DNS server error"
                );
                tokio::time::sleep(self.error_backoff).await;
            }
        }
    }

    /// Waits for one datagram, answers it if it is a standard query.
    pub async fn serve_one(&self, recv_buf: &mut [u8]) -> Result<Outcome, DomainError> {
        let (len, peer) = self.recv_from(recv_buf).await?;
        debug!(peer = %peer, bytes = len, "Incoming DNS request");

        match wire::decode(&recv_buf[..len])? {
            DecodedQuery::Answerable(question) => {
                let reply = wire_response::encode_reply(&question, self.answer_ip);
                self.send_to(&reply, peer).await?;

                info!(
                    peer = %peer,
                    "Replying: {} -> {}",
                    question.domain_name(),
                    self.answer_ip
                );
                Ok(Outcome::Replied {
                    peer,
                    domain: question.domain_name().to_string(),
                })
            }
            DecodedQuery::Unanswerable(reason) => {
                debug!(peer = %peer, reason = ?reason, "DNS query not answered");
                Ok(Outcome::Dropped { peer })
            }
        }
    }

    async fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        loop {
            let mut guard = self.socket.readable().await?;

            match guard.try_io(|inner| inner.get_ref().recv_from(buf)) {
                Ok(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Ok(result) => return result,
                Err(_would_block) => continue,
            }
        }
    }

    async fn send_to(&self, buf: &[u8], peer: SocketAddr) -> io::Result<usize> {
        loop {
            let mut guard = self.socket.writable().await?;

            match guard.try_io(|inner| inner.get_ref().send_to(buf, peer)) {
                Ok(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Ok(result) => return result,
                Err(_would_block) => continue,
            }
        }
    }
}
