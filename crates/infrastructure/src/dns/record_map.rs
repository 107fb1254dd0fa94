//! Centralized mapping between `sundial_dns_domain` record values and
//! hickory wire types.
//!
//! The type mapping must be total: every query type has an answer (at
//! minimum the SOA fallback), so unknown codes travel through as `Other`
//! instead of being rejected at the boundary.

use hickory_proto::op::ResponseCode as WireResponseCode;
use hickory_proto::rr::rdata::{NS, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType as WireRecordType};
use std::str::FromStr;
use sundial_dns_domain::{RecordData, RecordType, ReplyRecord, ResponseCode};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert a wire query type to the domain type. Total.
    pub fn from_wire(rtype: WireRecordType) -> RecordType {
        match rtype {
            WireRecordType::A => RecordType::A,
            WireRecordType::AAAA => RecordType::AAAA,
            WireRecordType::CNAME => RecordType::CNAME,
            WireRecordType::MX => RecordType::MX,
            WireRecordType::TXT => RecordType::TXT,
            WireRecordType::PTR => RecordType::PTR,
            WireRecordType::SRV => RecordType::SRV,
            WireRecordType::SOA => RecordType::SOA,
            WireRecordType::NS => RecordType::NS,
            WireRecordType::ANY => RecordType::ANY,
            other => RecordType::Other(u16::from(other)),
        }
    }

    pub fn to_wire_response_code(code: ResponseCode) -> WireResponseCode {
        match code {
            ResponseCode::NoError => WireResponseCode::NoError,
            ResponseCode::FormErr => WireResponseCode::FormErr,
            ResponseCode::NxDomain => WireResponseCode::NXDomain,
            ResponseCode::Refused => WireResponseCode::Refused,
        }
    }

    /// Build a wire record from a synthesized reply record.
    ///
    /// Returns `None` when a name fails to parse; record names come from the
    /// validated zone table or the query itself, so a `None` here means the
    /// record is dropped from the response and logged by the caller.
    pub fn to_wire_record(record: &ReplyRecord) -> Option<Record> {
        let name = Name::from_str(&record.name).ok()?;
        let rdata = match &record.data {
            RecordData::Txt(content) => RData::TXT(TXT::new(vec![content.clone()])),
            RecordData::Ns(target) => RData::NS(NS(Name::from_str(target).ok()?)),
            RecordData::Soa {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => RData::SOA(SOA::new(
                Name::from_str(mname).ok()?,
                Name::from_str(rname).ok()?,
                *serial,
                *refresh as i32,
                *retry as i32,
                *expire as i32,
                *minimum,
            )),
        };
        Some(Record::from_rdata(name, record.ttl, rdata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_from_wire_known_types() {
        assert_eq!(RecordTypeMapper::from_wire(WireRecordType::TXT), RecordType::TXT);
        assert_eq!(RecordTypeMapper::from_wire(WireRecordType::NS), RecordType::NS);
        assert_eq!(RecordTypeMapper::from_wire(WireRecordType::SOA), RecordType::SOA);
        assert_eq!(RecordTypeMapper::from_wire(WireRecordType::A), RecordType::A);
    }

    #[test]
    fn test_from_wire_is_total() {
        let unknown = WireRecordType::from(64999u16);
        assert_eq!(
            RecordTypeMapper::from_wire(unknown),
            RecordType::Other(64999)
        );
    }

    #[test]
    fn test_txt_record_building() {
        let record = ReplyRecord {
            name: "time.example.com.".into(),
            ttl: 0,
            data: RecordData::Txt("2024-01-02T03:04:05Z".to_string()),
        };

        let wire = RecordTypeMapper::to_wire_record(&record).unwrap();
        assert_eq!(wire.record_type(), WireRecordType::TXT);
        assert_eq!(wire.ttl(), 0);
        assert_eq!(wire.name().to_utf8(), "time.example.com.");
    }

    #[test]
    fn test_ns_record_building() {
        let record = ReplyRecord {
            name: "whoami.example.com.".into(),
            ttl: 3600,
            data: RecordData::Ns("ns1.example.com.".into()),
        };

        let wire = RecordTypeMapper::to_wire_record(&record).unwrap();
        assert_eq!(wire.record_type(), WireRecordType::NS);
        assert_eq!(wire.ttl(), 3600);
    }

    #[test]
    fn test_soa_record_building() {
        let record = ReplyRecord {
            name: "a.example.com.".into(),
            ttl: 300,
            data: RecordData::Soa {
                mname: Arc::from("mname.example.com."),
                rname: Arc::from("hostmaster.example.com."),
                serial: 7,
                refresh: 14400,
                retry: 3600,
                expire: 2_419_200,
                minimum: 300,
            },
        };

        let wire = RecordTypeMapper::to_wire_record(&record).unwrap();
        assert_eq!(wire.record_type(), WireRecordType::SOA);
        match wire.data() {
            RData::SOA(soa) => {
                assert_eq!(soa.serial(), 7);
                assert_eq!(soa.refresh(), 14400);
                assert_eq!(soa.minimum(), 300);
            }
            other => panic!("Expected SOA rdata, got {:?}", other),
        }
    }

    #[test]
    fn test_unparsable_name_is_dropped() {
        let record = ReplyRecord {
            name: format!("{}.example.com.", "a".repeat(64)).into(),
            ttl: 0,
            data: RecordData::Txt("x".to_string()),
        };
        assert!(RecordTypeMapper::to_wire_record(&record).is_none());
    }
}
