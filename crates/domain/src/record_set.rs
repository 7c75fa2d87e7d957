use std::collections::BTreeMap;

use crate::record::{DnsRecord, RecordType};

/// Records attached to one tree node, bucketed by type.
///
/// Buckets iterate in lexical type order and keep insertion order inside a
/// bucket, which is what makes serialization stable for any row order.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    by_type: BTreeMap<RecordType, Vec<DnsRecord>>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record` to its type bucket. A record with the same data and ttl
    /// already present makes this a no-op.
    pub fn insert(&mut self, record: DnsRecord) {
        let bucket = self.by_type.entry(record.record_type).or_default();
        if bucket
            .iter()
            .any(|r| r.data == record.data && r.ttl == record.ttl)
        {
            return;
        }
        bucket.push(record);
    }

    pub fn get(&self, record_type: RecordType) -> &[DnsRecord] {
        self.by_type
            .get(&record_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DnsRecord> {
        self.by_type.values().flatten()
    }
}
