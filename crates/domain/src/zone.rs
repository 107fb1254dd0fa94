use super::config::ZoneConfig;
use super::dns_reply::{RecordData, ReplyRecord};
use super::errors::DomainError;
use super::name;
use std::sync::Arc;

/// One zone this server is authoritative for: the SOA contents plus the
/// nameserver set used for NS answers.
///
/// Constructed once from configuration, immutable afterwards. The name is
/// stored lowercased because it is the containment-compare key.
#[derive(Debug, Clone)]
pub struct Zone {
    name: Arc<str>,
    ttl: u32,
    mname: Arc<str>,
    rname: Arc<str>,
    serial: u32,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
    nameservers: Vec<Arc<str>>,
}

impl Zone {
    pub fn from_config(config: &ZoneConfig) -> Result<Self, DomainError> {
        let zone_name = config.name.to_ascii_lowercase();
        if !name::is_valid_fqdn(&zone_name) {
            return Err(DomainError::InvalidZoneName(config.name.clone()));
        }
        if config.nameservers.is_empty() {
            return Err(DomainError::EmptyNameservers(config.name.clone()));
        }
        for host in [&config.mname, &config.rname]
            .into_iter()
            .chain(config.nameservers.iter())
        {
            if !name::is_valid_fqdn(host) {
                return Err(DomainError::InvalidDomainName(host.clone()));
            }
        }

        Ok(Self {
            name: zone_name.into(),
            ttl: config.ttl,
            mname: config.mname.as_str().into(),
            rname: config.rname.as_str().into(),
            serial: config.serial,
            refresh: config.refresh,
            retry: config.retry,
            expire: config.expire,
            minimum: config.minimum,
            nameservers: config
                .nameservers
                .iter()
                .map(|ns| Arc::from(ns.as_str()))
                .collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn nameservers(&self) -> &[Arc<str>] {
        &self.nameservers
    }

    /// The first configured nameserver. The non-empty invariant is enforced
    /// at construction.
    pub fn first_nameserver(&self) -> &Arc<str> {
        &self.nameservers[0]
    }

    /// SOA record for the authority section of negative answers, carrying
    /// this zone's fields verbatim.
    pub fn soa_authority(&self, owner: Arc<str>) -> ReplyRecord {
        ReplyRecord {
            name: owner,
            ttl: self.ttl,
            data: RecordData::Soa {
                mname: Arc::clone(&self.mname),
                rname: Arc::clone(&self.rname),
                serial: self.serial,
                refresh: self.refresh,
                retry: self.retry,
                expire: self.expire,
                minimum: self.minimum,
            },
        }
    }
}
