use std::sync::Arc;
use sundial_dns_application::use_cases::HandleDnsQueryUseCase;
use sundial_dns_domain::config::{CliOverrides, Config};
use sundial_dns_domain::{Zone, ZoneTable};
use sundial_dns_infrastructure::dns::server::DnsServerHandler;
use sundial_dns_infrastructure::SystemClock;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Initialize logging. RUST_LOG takes precedence over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the zone table from configuration and wire it to the dispatcher.
pub fn build_handler(config: &Config) -> anyhow::Result<DnsServerHandler> {
    let zones = config
        .zones
        .iter()
        .map(Zone::from_config)
        .collect::<Result<Vec<_>, _>>()?;
    let table = Arc::new(ZoneTable::new(zones)?);

    info!(zones = table.len(), "Zone table loaded");

    let use_case = Arc::new(HandleDnsQueryUseCase::new(table, Arc::new(SystemClock)));
    Ok(DnsServerHandler::new(use_case))
}
