#![allow(dead_code)]
use chrono::{DateTime, TimeZone, Utc};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use sundial_dns_application::ports::Clock;
use sundial_dns_application::use_cases::HandleDnsQueryUseCase;
use sundial_dns_domain::config::ZoneConfig;
use sundial_dns_domain::{DnsRequest, Question, RecordType, Zone, ZoneTable};

/// Clock pinned to 2024-01-02T03:04:05Z.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The zone table from the reference deployment: one example.com. zone.
pub fn example_zone_config() -> ZoneConfig {
    ZoneConfig {
        name: "example.com.".to_string(),
        ttl: 300,
        mname: "mname.example.com.".to_string(),
        rname: "hostmaster.example.com.".to_string(),
        serial: 0,
        refresh: 14400,
        retry: 3600,
        expire: 2_419_200,
        minimum: 300,
        nameservers: vec![
            "ns1.example.com.".to_string(),
            "ns2.example.com.".to_string(),
        ],
    }
}

pub fn zone_config(name: &str) -> ZoneConfig {
    let mut config = example_zone_config();
    config.name = name.to_string();
    config
}

pub fn table(configs: &[ZoneConfig]) -> Arc<ZoneTable> {
    let zones = configs
        .iter()
        .map(|c| Zone::from_config(c).unwrap())
        .collect();
    Arc::new(ZoneTable::new(zones).unwrap())
}

pub fn dispatcher(configs: &[ZoneConfig]) -> HandleDnsQueryUseCase {
    HandleDnsQueryUseCase::new(table(configs), Arc::new(FixedClock::new()))
}

pub fn example_dispatcher() -> HandleDnsQueryUseCase {
    dispatcher(&[example_zone_config()])
}

pub const CLIENT: &str = "203.0.113.7:54321";

pub fn client_addr() -> SocketAddr {
    SocketAddr::from_str(CLIENT).unwrap()
}

pub fn request(name: &str, record_type: RecordType) -> DnsRequest {
    DnsRequest::new(Question::new(name, record_type), client_addr())
}

pub fn request_from(name: &str, record_type: RecordType, client: &str) -> DnsRequest {
    DnsRequest::new(
        Question::new(name, record_type),
        SocketAddr::from_str(client).unwrap(),
    )
}
