//! Record synthesis for the `whoami.<zone>` virtual service.

use super::NS_RECORD_TTL;
use std::net::SocketAddr;
use std::sync::Arc;
use sundial_dns_domain::{Question, RecordData, RecordType, ReplyRecord, Zone};

/// Answer one whoami-service question. Returns (answers, authority).
///
/// TXT carries the client's transport address as observed by the server,
/// which is the only per-connection input query handling depends on. NS
/// answers list every zone nameserver in configured order.
pub fn answer(
    zone: &Zone,
    question: &Question,
    client_addr: SocketAddr,
) -> (Vec<ReplyRecord>, Vec<ReplyRecord>) {
    match question.record_type {
        RecordType::TXT => (
            vec![ReplyRecord {
                name: Arc::clone(&question.name),
                ttl: 0,
                data: RecordData::Txt(client_addr.to_string()),
            }],
            Vec::new(),
        ),
        RecordType::NS => (
            zone.nameservers()
                .iter()
                .map(|ns| ReplyRecord {
                    name: Arc::clone(&question.name),
                    ttl: NS_RECORD_TTL,
                    data: RecordData::Ns(Arc::clone(ns)),
                })
                .collect(),
            Vec::new(),
        ),
        _ => (
            Vec::new(),
            vec![zone.soa_authority(Arc::clone(&question.name))],
        ),
    }
}
