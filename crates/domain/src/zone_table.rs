use super::errors::DomainError;
use super::name;
use super::zone::Zone;
use std::collections::HashSet;

/// The process-wide set of configured zones.
///
/// Built once at startup and shared read-only across concurrent queries, so
/// lookups need no locking. Zones are held most-specific-first (label count
/// descending) and the first containing zone wins, which makes ownership
/// deterministic when zones nest.
#[derive(Debug)]
pub struct ZoneTable {
    zones: Vec<Zone>,
}

impl ZoneTable {
    pub fn new(mut zones: Vec<Zone>) -> Result<Self, DomainError> {
        let mut seen: HashSet<String> = HashSet::new();
        for zone in &zones {
            if !seen.insert(zone.name().to_string()) {
                return Err(DomainError::DuplicateZone(zone.name().to_string()));
            }
        }
        zones.sort_by(|a, b| name::label_count(b.name()).cmp(&name::label_count(a.name())));
        Ok(Self { zones })
    }

    /// The most specific zone owning `name`, if any. Absence is a normal
    /// outcome (the dispatcher answers REFUSED), not an error.
    ///
    /// `name` must already be lowercased.
    pub fn lookup_owning_zone(&self, name: &str) -> Option<&Zone> {
        self.zones
            .iter()
            .find(|zone| name::is_subdomain(zone.name(), name))
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
