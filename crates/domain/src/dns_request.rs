use super::RecordType;
use std::net::SocketAddr;
use std::sync::Arc;

/// One decoded question, exactly as it appeared on the wire.
///
/// `name` keeps the original casing from the query; matching always works on
/// a lowercased copy so answer records can echo the name untouched.
#[derive(Debug, Clone)]
pub struct Question {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}

/// One inbound query as seen by the dispatcher.
///
/// The client address is carried explicitly because the whoami service
/// answers with it; the transport response sink never crosses this boundary.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    /// `None` when the wire message carried no usable question section.
    pub question: Option<Question>,
    pub client_addr: SocketAddr,
}

impl DnsRequest {
    pub fn new(question: Question, client_addr: SocketAddr) -> Self {
        Self {
            question: Some(question),
            client_addr,
        }
    }

    pub fn without_question(client_addr: SocketAddr) -> Self {
        Self {
            question: None,
            client_addr,
        }
    }
}
