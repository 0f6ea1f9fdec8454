use bytes::Bytes;
use captive_portal_domain::config::DnsConfig;
use captive_portal_infrastructure::dns::DnsResponder;
use captive_portal_infrastructure::http::HttpResponder;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};

pub fn dns_config(error_backoff_ms: u64) -> DnsConfig {
    DnsConfig {
        error_backoff_ms,
        ..Default::default()
    }
}

pub fn loopback_dns_responder(answer_ip: Ipv4Addr, error_backoff_ms: u64) -> DnsResponder {
    let socket = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
    socket.set_nonblocking(true).unwrap();
    DnsResponder::new(socket, answer_ip, &dns_config(error_backoff_ms)).unwrap()
}

pub async fn loopback_http_responder(body: &'static str) -> HttpResponder {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    HttpResponder::new(listener, Bytes::from_static(body.as_bytes()))
}

/// Sends `query` from a fresh socket and waits up to `wait` for a reply.
pub async fn query_once(server: SocketAddr, query: &[u8], wait: Duration) -> Option<Vec<u8>> {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(query, server).await.unwrap();

    let mut buf = vec![0u8; 1024];
    match tokio::time::timeout(wait, client.recv_from(&mut buf)).await {
        Ok(Ok((len, from))) => {
            assert_eq!(from, server, "reply must come from the responder socket");
            buf.truncate(len);
            Some(buf)
        }
        Ok(Err(e)) => panic!("recv failed: {}", e),
        Err(_) => None,
    }
}
