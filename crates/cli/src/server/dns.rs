use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::time::Duration;
use sundial_dns_infrastructure::dns::server::DnsServerHandler;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

/// Bind UDP and TCP on the configured address and serve queries until the
/// runtime shuts down. hickory's ServerFuture owns the listener loops; every
/// accepted query lands in the handler, which runs the dispatcher.
pub async fn start_dns_server(
    bind_addr: String,
    handler: DnsServerHandler,
    tcp_timeout: Duration,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    let tcp_listener = TcpListener::bind(socket_addr).await?;

    info!(addr = %socket_addr, "DNS server listening (UDP + TCP)");

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, tcp_timeout);
    server.block_until_done().await?;

    Ok(())
}
