//! Record synthesis for the `time.<zone>` virtual service.

use super::NS_RECORD_TTL;
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;
use sundial_dns_domain::{Question, RecordData, RecordType, ReplyRecord, Zone};

/// Answer one time-service question. Returns (answers, authority).
///
/// TXT carries the current UTC instant in RFC 3339 with TTL 0, NS the zone's
/// first nameserver; every other query type gets the zone's SOA as a
/// "no data, but authoritative" authority section.
pub fn answer(
    zone: &Zone,
    question: &Question,
    now: DateTime<Utc>,
) -> (Vec<ReplyRecord>, Vec<ReplyRecord>) {
    match question.record_type {
        RecordType::TXT => (
            vec![ReplyRecord {
                name: Arc::clone(&question.name),
                ttl: 0,
                data: RecordData::Txt(now.to_rfc3339_opts(SecondsFormat::Secs, true)),
            }],
            Vec::new(),
        ),
        RecordType::NS => (
            vec![ReplyRecord {
                name: Arc::clone(&question.name),
                ttl: NS_RECORD_TTL,
                data: RecordData::Ns(Arc::clone(zone.first_nameserver())),
            }],
            Vec::new(),
        ),
        _ => (
            Vec::new(),
            vec![zone.soa_authority(Arc::clone(&question.name))],
        ),
    }
}
