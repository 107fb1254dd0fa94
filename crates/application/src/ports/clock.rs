use chrono::{DateTime, Utc};

/// Wall-clock access for record synthesis.
///
/// The time service is the only part of query handling with a side effect;
/// putting the read behind a port lets tests pin the instant.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}
