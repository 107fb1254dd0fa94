use clap::Parser;
use std::time::Duration;
use sundial_dns_domain::config::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "sundial-dns")]
#[command(version)]
#[command(about = "Authoritative DNS responder with synthesized time and whoami services")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Sundial DNS v{}", env!("CARGO_PKG_VERSION"));

    let handler = bootstrap::build_handler(&config)?;

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let tcp_timeout = Duration::from_secs(config.server.tcp_timeout_secs);

    tokio::spawn(async move {
        if let Err(e) = server::start_dns_server(dns_addr, handler, tcp_timeout).await {
            error!(error = %e, "DNS server error");
        }
    });

    wait_for_shutdown().await?;
    Ok(())
}

#[cfg(unix)]
async fn wait_for_shutdown() -> anyhow::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigint.recv() => info!("SIGINT received, stopping"),
        _ = sigterm.recv() => info!("SIGTERM received, stopping"),
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_shutdown() -> anyhow::Result<()> {
    tokio::signal::ctrl_c().await?;
    info!("Interrupt received, stopping");
    Ok(())
}
