use compact_str::CompactString;
use smallvec::SmallVec;

/// Labels of one DNS name. Inline capacity covers any realistic depth.
pub type Labels = SmallVec<[CompactString; 8]>;

/// Lower-cases `name` and guarantees a trailing dot. `""` becomes `"."`.
pub fn normalize_fqdn(name: &str) -> String {
    let mut fqdn = name.to_ascii_lowercase();
    if !fqdn.ends_with('.') {
        fqdn.push('.');
    }
    fqdn
}

/// Splits a DNS name into lower-cased labels in natural (leftmost-first)
/// order. Surrounding dots and empty labels are dropped, so `"."` and `""`
/// both yield no labels.
pub fn split_labels(name: &str) -> Labels {
    name.trim_matches('.')
        .split('.')
        .filter(|label| !label.is_empty())
        .map(|label| CompactString::from(label.to_ascii_lowercase()))
        .collect()
}
