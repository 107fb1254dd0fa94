use crate::ports::Clock;
use crate::services::{time_service, whoami_service};
use std::sync::Arc;
use sundial_dns_domain::{DnsReply, DnsRequest, VirtualService, ZoneTable};
use tracing::debug;

/// Dispatches one decoded query against the zone table.
///
/// Stateless per query: the reply is fully determined by the question, the
/// owning zone and (for whoami) the client address. The zone table is
/// injected at construction and shared read-only, so concurrent invocations
/// need no synchronization.
pub struct HandleDnsQueryUseCase {
    zones: Arc<ZoneTable>,
    clock: Arc<dyn Clock>,
}

impl HandleDnsQueryUseCase {
    pub fn new(zones: Arc<ZoneTable>, clock: Arc<dyn Clock>) -> Self {
        Self { zones, clock }
    }

    /// Produce the reply for one request. Total: every reachable input maps
    /// to a well-formed reply, so there is no error path.
    pub fn execute(&self, request: &DnsRequest) -> DnsReply {
        let Some(question) = request.question.as_ref() else {
            debug!(client = %request.client_addr, "Query without question section");
            return DnsReply::format_error();
        };

        // Matching and routing are case-insensitive; answer records echo the
        // original casing from the question.
        let normalized = question.name.to_ascii_lowercase();

        let Some(zone) = self.zones.lookup_owning_zone(&normalized) else {
            debug!(name = %question.name, "Name outside configured zones");
            return DnsReply::refused();
        };

        match VirtualService::from_name(&normalized) {
            Some(VirtualService::Time) => {
                let (answers, authority) =
                    time_service::answer(zone, question, self.clock.now_utc());
                DnsReply::answer(answers, authority)
            }
            Some(VirtualService::Whoami) => {
                let (answers, authority) =
                    whoami_service::answer(zone, question, request.client_addr);
                DnsReply::answer(answers, authority)
            }
            None => {
                debug!(name = %question.name, zone = %zone.name(), "No service for name");
                DnsReply::nxdomain(vec![zone.soa_authority(Arc::clone(&question.name))])
            }
        }
    }
}
