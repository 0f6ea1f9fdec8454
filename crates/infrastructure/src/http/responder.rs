//! One-page HTTP/1.0 responder.
//!
//! Every request line gets `200 OK` and the portal page, then the
//! connection is closed. No routing, no keep-alive, no length header: the
//! client reads the body until close.

use bytes::Bytes;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

pub const STATUS_LINE: &[u8] = b"HTTP/1.0 200 OK\r\n\r\n";

/// Longest request or header line accepted before the connection is dropped.
const MAX_LINE_LEN: u64 = 8 * 1024;

const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub struct HttpResponder {
    listener: TcpListener,
    body: Bytes,
}

impl HttpResponder {
    pub fn new(listener: TcpListener, body: Bytes) -> Self {
        Self { listener, body }
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, each served by its own local task.
    ///
    /// Must run inside a [`tokio::task::LocalSet`].
    pub async fn run(self) {
        info!(
            bind_address = ?self.local_addr().ok(),
            page_bytes = self.body.len(),
            "HTTP responder started"
        );

        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    let body = self.body.clone();
                    tokio::task::spawn_local(handle_connection(stream, peer, body));
                }
                Err(e) => {
                    warn!(error = %e, "HTTP accept error");
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                }
            }
        }
    }
}

/// Serves a single exchange on `stream`. The stream is owned here and
/// dropped, which closes it, on every path out.
async fn handle_connection<S>(stream: S, peer: SocketAddr, body: Bytes)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    match serve(stream, peer, &body).await {
        Ok(true) => debug!(peer = %peer, "HTTP response sent"),
        Ok(false) => debug!(peer = %peer, "HTTP connection closed without request"),
        Err(e) => debug!(peer = %peer, error = %e, "HTTP connection failed"),
    }
}

async fn serve<S>(stream: S, peer: SocketAddr, body: &[u8]) -> io::Result<bool>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(stream);

    let request_line = read_line(&mut reader).await?;
    if request_line.is_empty() {
        return Ok(false);
    }
    info!(
        peer = %peer,
        "Received {}",
        String::from_utf8_lossy(&request_line).trim_end()
    );

    // Drain the headers so the client is done sending before we close;
    // some clients report an error otherwise.
    loop {
        let line = read_line(&mut reader).await?;
        if line.is_empty() || line == b"\r\n" || line == b"\n" {
            break;
        }
    }

    let stream = reader.get_mut();
    stream.write_all(STATUS_LINE).await?;
    stream.write_all(body).await?;
    stream.shutdown().await?;

    Ok(true)
}

/// Reads through the next `\n`. An empty result means end of stream.
async fn read_line<R>(reader: &mut R) -> io::Result<Vec<u8>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    let n = reader.take(MAX_LINE_LEN).read_until(b'\n', &mut line).await?;

    if n as u64 == MAX_LINE_LEN && !line.ends_with(b"\n") {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "HTTP line exceeds limit",
        ));
    }
    Ok(line)
}
