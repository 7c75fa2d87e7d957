use pdns2unbound_domain::{DnsRecord, RecordSet, RecordType};

fn record(record_type: RecordType, ttl: u32, data: &str) -> DnsRecord {
    DnsRecord::new(record_type, ttl, data)
}

#[test]
fn test_duplicate_insert_is_noop() {
    let mut set = RecordSet::new();
    set.insert(record(RecordType::A, 300, "192.0.2.1"));
    set.insert(record(RecordType::A, 300, "192.0.2.1"));

    assert_eq!(set.len(), 1);
    assert_eq!(set.get(RecordType::A).len(), 1);
}

#[test]
fn test_same_data_different_ttl_are_distinct() {
    let mut set = RecordSet::new();
    set.insert(record(RecordType::A, 300, "192.0.2.1"));
    set.insert(record(RecordType::A, 600, "192.0.2.1"));

    assert_eq!(set.get(RecordType::A).len(), 2);
}

#[test]
fn test_same_data_different_type_are_distinct() {
    let mut set = RecordSet::new();
    set.insert(record(RecordType::A, 300, "example.org."));
    set.insert(record(RecordType::PTR, 300, "example.org."));

    assert_eq!(set.len(), 2);
}

#[test]
fn test_iteration_by_type_then_insertion_order() {
    let mut set = RecordSet::new();
    set.insert(record(RecordType::SRV, 60, "10 0 5060 sip.example.com."));
    set.insert(record(RecordType::A, 300, "192.0.2.2"));
    set.insert(record(RecordType::A, 300, "192.0.2.1"));
    set.insert(record(RecordType::MX, 3600, "10 mail.example.com."));

    let order: Vec<(RecordType, &str)> = set
        .iter()
        .map(|r| (r.record_type, r.data.as_str()))
        .collect();

    assert_eq!(
        order,
        [
            (RecordType::A, "192.0.2.2"),
            (RecordType::A, "192.0.2.1"),
            (RecordType::MX, "10 mail.example.com."),
            (RecordType::SRV, "10 0 5060 sip.example.com."),
        ]
    );
}

#[test]
fn test_get_missing_type_is_empty() {
    let set = RecordSet::new();
    assert!(set.is_empty());
    assert!(set.get(RecordType::SOA).is_empty());
}
