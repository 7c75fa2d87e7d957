use async_trait::async_trait;
use pdns2unbound_application::ports::RecordSource;
use pdns2unbound_domain::{DomainError, RawRecord};

pub struct MockRecordSource {
    rows: Vec<RawRecord>,
}

impl MockRecordSource {
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, DomainError> {
        Ok(self.rows.clone())
    }
}

pub fn row(
    name: &str,
    record_type: &str,
    ttl: u32,
    content: &str,
    priority: u32,
    zone: &str,
    zone_kind: &str,
) -> RawRecord {
    RawRecord {
        name: name.to_string(),
        record_type: record_type.to_string(),
        ttl,
        content: content.to_string(),
        priority,
        zone: zone.to_string(),
        zone_kind: zone_kind.to_string(),
    }
}
