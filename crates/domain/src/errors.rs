use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid zone name: {0}")]
    InvalidZoneName(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Zone {0} has no nameservers")]
    EmptyNameservers(String),

    #[error("Duplicate zone: {0}")]
    DuplicateZone(String),
}
