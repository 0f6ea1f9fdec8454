use captive_portal_domain::config::DnsConfig;
use captive_portal_infrastructure::dns::DnsResponder;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::task::JoinHandle;
use tracing::info;

/// Binds the DNS socket and schedules the responder on the current
/// `LocalSet`.
pub fn start_dns_server(
    bind_addr: SocketAddr,
    answer_ip: Ipv4Addr,
    config: &DnsConfig,
) -> anyhow::Result<JoinHandle<()>> {
    info!(bind_address = %bind_addr, answer_ip = %answer_ip, "Starting DNS server");

    let socket = create_udp_socket(bind_addr)?;
    let responder = DnsResponder::new(socket, answer_ip, config)?;

    Ok(tokio::task::spawn_local(responder.run()))
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<std::net::UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    Ok(socket.into())
}
