use serde::{Deserialize, Serialize};

/// SOA contents and nameserver list for one configured zone.
///
/// Timer defaults follow common operator practice for a zone whose contents
/// never change between restarts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Fully-qualified, dot-terminated zone name.
    pub name: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// SOA MNAME: the primary nameserver of record.
    pub mname: String,

    /// SOA RNAME: the responsible mailbox, encoded as a domain name.
    pub rname: String,

    #[serde(default)]
    pub serial: u32,

    #[serde(default = "default_refresh")]
    pub refresh: u32,

    #[serde(default = "default_retry")]
    pub retry: u32,

    #[serde(default = "default_expire")]
    pub expire: u32,

    #[serde(default = "default_minimum")]
    pub minimum: u32,

    /// Nameservers answered for NS queries, in order. Must be non-empty.
    pub nameservers: Vec<String>,
}

fn default_ttl() -> u32 {
    300
}

fn default_refresh() -> u32 {
    14400
}

fn default_retry() -> u32 {
    3600
}

fn default_expire() -> u32 {
    2_419_200
}

fn default_minimum() -> u32 {
    300
}
