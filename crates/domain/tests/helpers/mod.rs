#![allow(dead_code)]
use sundial_dns_domain::config::ZoneConfig;
use sundial_dns_domain::Zone;

pub struct ZoneConfigBuilder {
    name: String,
    ttl: u32,
    mname: String,
    rname: String,
    serial: u32,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
    nameservers: Vec<String>,
}

impl ZoneConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
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

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn mname(mut self, mname: &str) -> Self {
        self.mname = mname.to_string();
        self
    }

    pub fn rname(mut self, rname: &str) -> Self {
        self.rname = rname.to_string();
        self
    }

    pub fn serial(mut self, serial: u32) -> Self {
        self.serial = serial;
        self
    }

    pub fn nameservers(mut self, nameservers: &[&str]) -> Self {
        self.nameservers = nameservers.iter().map(|ns| ns.to_string()).collect();
        self
    }

    pub fn build(self) -> ZoneConfig {
        ZoneConfig {
            name: self.name,
            ttl: self.ttl,
            mname: self.mname,
            rname: self.rname,
            serial: self.serial,
            refresh: self.refresh,
            retry: self.retry,
            expire: self.expire,
            minimum: self.minimum,
            nameservers: self.nameservers,
        }
    }
}

pub fn zone(name: &str) -> Zone {
    Zone::from_config(&ZoneConfigBuilder::new(name).build()).unwrap()
}
