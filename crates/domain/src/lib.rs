//! pdns2unbound Domain Layer
pub mod config;
pub mod errors;
pub mod name;
pub mod record;
pub mod record_set;
pub mod tree;
pub mod unbound;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use name::{normalize_fqdn, split_labels};
pub use record::{DnsRecord, RawRecord, RecordType, ZoneKind};
pub use record_set::RecordSet;
pub use tree::{DomainNode, DomainTree, ZoneClass};
