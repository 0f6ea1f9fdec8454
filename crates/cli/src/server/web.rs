use bytes::Bytes;
use captive_portal_infrastructure::http::HttpResponder;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

const LISTEN_BACKLOG: i32 = 128;

/// Binds the web listener and schedules the responder on the current
/// `LocalSet`.
pub fn start_web_server(bind_addr: SocketAddr, page: Bytes) -> anyhow::Result<JoinHandle<()>> {
    info!(
        bind_address = %bind_addr,
        portal_url = %format!("http://{}", bind_addr),
        "Starting web server"
    );

    let listener = create_tcp_listener(bind_addr)?;
    let responder = HttpResponder::new(listener, page);

    Ok(tokio::task::spawn_local(responder.run()))
}

fn create_tcp_listener(socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
