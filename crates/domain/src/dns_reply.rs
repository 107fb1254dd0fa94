use std::sync::Arc;

/// Response codes this server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    NxDomain,
    Refused,
}

/// Record data for the three record types the server synthesizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Txt(String),
    Ns(Arc<str>),
    Soa {
        mname: Arc<str>,
        rname: Arc<str>,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
}

/// One synthesized resource record, class INET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRecord {
    pub name: Arc<str>,
    pub ttl: u32,
    pub data: RecordData,
}

/// The complete reply for one query, built fresh per request.
///
/// Ownership moves to the transport boundary for encoding; nothing here is
/// shared between in-flight requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsReply {
    pub response_code: ResponseCode,
    pub authoritative: bool,
    pub answers: Vec<ReplyRecord>,
    pub authority: Vec<ReplyRecord>,
}

impl DnsReply {
    /// Authoritative answer for a query inside a configured zone. An empty
    /// answer section with a SOA in `authority` is the NOERROR/NODATA shape.
    pub fn answer(answers: Vec<ReplyRecord>, authority: Vec<ReplyRecord>) -> Self {
        Self {
            response_code: ResponseCode::NoError,
            authoritative: true,
            answers,
            authority,
        }
    }

    /// Definitive "no such name" inside a zone we are authoritative for.
    pub fn nxdomain(authority: Vec<ReplyRecord>) -> Self {
        Self {
            response_code: ResponseCode::NxDomain,
            authoritative: true,
            answers: Vec::new(),
            authority,
        }
    }

    /// The queried name is in no configured zone.
    pub fn refused() -> Self {
        Self {
            response_code: ResponseCode::Refused,
            authoritative: false,
            answers: Vec::new(),
            authority: Vec::new(),
        }
    }

    /// The message carried no question section.
    pub fn format_error() -> Self {
        Self {
            response_code: ResponseCode::FormErr,
            authoritative: false,
            answers: Vec::new(),
            authority: Vec::new(),
        }
    }
}
