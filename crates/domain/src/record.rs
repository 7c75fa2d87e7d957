use crate::name::normalize_fqdn;

/// Resource record types the converter handles.
///
/// Declaration order matches the lexical order of the type names, so the
/// derived `Ord` sorts record buckets the same way the emitted text does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordType {
    A,
    AAAA,
    MX,
    PTR,
    SOA,
    SRV,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::MX => "MX",
            RecordType::PTR => "PTR",
            RecordType::SOA => "SOA",
            RecordType::SRV => "SRV",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A" => Some(RecordType::A),
            "AAAA" => Some(RecordType::AAAA),
            "MX" => Some(RecordType::MX),
            "PTR" => Some(RecordType::PTR),
            "SOA" => Some(RecordType::SOA),
            "SRV" => Some(RecordType::SRV),
            _ => None,
        }
    }
}

/// Serving mode of the owning domain as tagged in the source database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    Master,
    Native,
}

impl ZoneKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MASTER" => Some(ZoneKind::Master),
            "NATIVE" => Some(ZoneKind::Native),
            _ => None,
        }
    }
}

/// One flat row of the records/domains join, before normalization.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub name: String,
    pub record_type: String,
    pub ttl: u32,
    pub content: String,
    pub priority: u32,
    /// Name of the domain that owns this row.
    pub zone: String,
    /// The owning domain's kind tag, e.g. `MASTER` or `NATIVE`.
    pub zone_kind: String,
}

/// A canonical record attached to a tree node. Immutable once built;
/// two records are equal for dedup purposes when type, data and ttl match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub record_type: RecordType,
    pub ttl: u32,
    pub data: String,
}

impl DnsRecord {
    pub fn new(record_type: RecordType, ttl: u32, data: impl Into<String>) -> Self {
        Self {
            record_type,
            ttl,
            data: data.into(),
        }
    }

    /// Canonicalizes one raw row, or returns `None` when the row's type is
    /// not one the converter handles. The only rejection path in the core.
    pub fn normalize(raw: &RawRecord) -> Option<Self> {
        let record_type = RecordType::from_str(&raw.record_type)?;
        let data = match record_type {
            RecordType::A | RecordType::AAAA | RecordType::PTR => raw.content.clone(),
            RecordType::SOA => repair_soa(&raw.content, &raw.zone),
            RecordType::MX | RecordType::SRV => format!("{} {}", raw.priority, raw.content),
        };
        Some(Self::new(record_type, raw.ttl, data))
    }
}

/// Some poweradmin-managed rows store SOA content without the leading
/// mname/rname pair. A complete value has exactly five fields; anything
/// else gets `<zone> admin.<zone>` prepended.
fn repair_soa(content: &str, zone: &str) -> String {
    if content.split_whitespace().count() == 5 {
        content.to_string()
    } else {
        let zone = normalize_fqdn(zone);
        format!("{zone} admin.{zone} {content}")
    }
}
