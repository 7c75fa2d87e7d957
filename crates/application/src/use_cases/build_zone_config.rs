use std::sync::Arc;

use pdns2unbound_domain::{unbound, DnsRecord, DomainError, DomainTree, RawRecord, ZoneKind};
use tracing::{debug, info};

use crate::ports::RecordSource;

/// Builds the unbound zone-config text from a full database snapshot.
///
/// Three sequential passes over a single tree: feed every usable row in,
/// propagate classifications, render. The tree lives only for the run.
pub struct BuildZoneConfigUseCase {
    source: Arc<dyn RecordSource>,
}

impl BuildZoneConfigUseCase {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> Result<String, DomainError> {
        let rows = self.source.fetch_all().await?;
        let total = rows.len();

        let mut tree = DomainTree::new();
        let mut skipped = 0usize;
        for row in &rows {
            if !Self::add_row(&mut tree, row) {
                skipped += 1;
            }
        }
        tree.propagate_classes();

        info!(rows = total, skipped, "Domain tree built");
        Ok(unbound::render(&tree))
    }

    /// Feeds one row into the tree. Returns false when the row's domain kind
    /// is not one the converter handles.
    ///
    /// A row with an unsupported record type contributes no record but still
    /// establishes its owning domain's node and classification.
    fn add_row(tree: &mut DomainTree, row: &RawRecord) -> bool {
        let Some(kind) = ZoneKind::from_str(&row.zone_kind) else {
            debug!(zone = %row.zone, kind = %row.zone_kind, "Skipping row for unhandled domain kind");
            return false;
        };

        if let Some(record) = DnsRecord::normalize(row) {
            tree.insert(&row.name, record);
        }
        tree.find_or_create(&row.zone).set_class_if_unset(kind.into());
        true
    }
}
