use async_trait::async_trait;
use pdns2unbound_domain::{DomainError, RawRecord};

/// Source of the full record snapshot, each row joined to its owning domain.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, DomainError>;
}
