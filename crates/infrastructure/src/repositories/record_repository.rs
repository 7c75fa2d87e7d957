use async_trait::async_trait;
use pdns2unbound_application::ports::RecordSource;
use pdns2unbound_domain::{DomainError, RawRecord};
use sqlx::MySqlPool;
use tracing::{error, instrument};

/// (record name, record type, ttl, content, prio, domain name, domain type).
/// The `records` columns are all nullable in the PowerDNS schema.
pub type RecordRow = (
    Option<String>,
    Option<String>,
    Option<i32>,
    Option<String>,
    Option<i32>,
    String,
    String,
);

pub struct MySqlRecordRepository {
    pool: MySqlPool,
}

impl MySqlRecordRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn row_to_raw(row: RecordRow) -> RawRecord {
        let (name, record_type, ttl, content, priority, zone, zone_kind) = row;
        RawRecord {
            name: name.unwrap_or_default(),
            record_type: record_type.unwrap_or_default(),
            ttl: ttl.unwrap_or(0).max(0) as u32,
            content: content.unwrap_or_default(),
            priority: priority.unwrap_or(0).max(0) as u32,
            zone,
            zone_kind,
        }
    }
}

#[async_trait]
impl RecordSource for MySqlRecordRepository {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT r.name, r.type, r.ttl, r.content, r.prio, d.name, d.type
             FROM records r
             INNER JOIN domains d ON d.id = r.domain_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_raw).collect())
    }
}
