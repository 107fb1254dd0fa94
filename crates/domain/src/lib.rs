//! Sundial DNS Domain Layer
pub mod config;
pub mod dns_reply;
pub mod dns_request;
pub mod errors;
pub mod name;
pub mod record_type;
pub mod virtual_service;
pub mod zone;
pub mod zone_table;

pub use config::Config;
pub use dns_reply::{DnsReply, RecordData, ReplyRecord, ResponseCode};
pub use dns_request::{DnsRequest, Question};
pub use errors::DomainError;
pub use record_type::RecordType;
pub use virtual_service::VirtualService;
pub use zone::Zone;
pub use zone_table::ZoneTable;
