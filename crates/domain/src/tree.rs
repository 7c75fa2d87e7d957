use std::collections::BTreeMap;

use compact_str::CompactString;

use crate::name::{split_labels, Labels};
use crate::record::{DnsRecord, ZoneKind};
use crate::record_set::RecordSet;

/// Serving mode of a domain node in the emitted config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneClass {
    #[default]
    None,
    Static,
    Transparent,
    Redirect,
}

impl ZoneClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneClass::None => "",
            ZoneClass::Static => "static",
            ZoneClass::Transparent => "transparent",
            ZoneClass::Redirect => "redirect",
        }
    }
}

impl From<ZoneKind> for ZoneClass {
    fn from(kind: ZoneKind) -> Self {
        match kind {
            ZoneKind::Master => ZoneClass::Static,
            ZoneKind::Native => ZoneClass::Transparent,
        }
    }
}

/// One label's node in the reversed-label domain trie.
#[derive(Debug)]
pub struct DomainNode {
    label: CompactString,
    children: BTreeMap<CompactString, DomainNode>,
    records: RecordSet,
    class: ZoneClass,
}

impl DomainNode {
    fn new(label: CompactString) -> Self {
        Self {
            label,
            children: BTreeMap::new(),
            records: RecordSet::new(),
            class: ZoneClass::None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn class(&self) -> ZoneClass {
        self.class
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Children in lexical label order.
    pub fn children(&self) -> impl Iterator<Item = &DomainNode> {
        self.children.values()
    }

    /// First writer wins: an explicit classification is set at most once,
    /// later attempts are ignored.
    pub fn set_class_if_unset(&mut self, class: ZoneClass) {
        if self.class == ZoneClass::None {
            self.class = class;
        }
    }

    fn insert(&mut self, labels: &[CompactString], record: DnsRecord) {
        let Some((first, rest)) = labels.split_first() else {
            self.records.insert(record);
            return;
        };
        if first.as_str() == "*" {
            // A wildcard flips this node into catch-all mode and carries no
            // data of its own.
            self.class = ZoneClass::Redirect;
            return;
        }
        self.children
            .entry(first.clone())
            .or_insert_with(|| DomainNode::new(first.clone()))
            .insert(rest, record);
    }

    fn find(&self, labels: &[CompactString]) -> Option<&DomainNode> {
        let Some((first, rest)) = labels.split_first() else {
            return Some(self);
        };
        self.children.get(first.as_str())?.find(rest)
    }

    fn find_or_create(&mut self, labels: &[CompactString]) -> &mut DomainNode {
        let Some((first, rest)) = labels.split_first() else {
            return self;
        };
        self.children
            .entry(first.clone())
            .or_insert_with(|| DomainNode::new(first.clone()))
            .find_or_create(rest)
    }

    fn propagate(&mut self, inherited: ZoneClass) {
        // A redirect one level up implicitly makes every undeclared child a
        // resolvable zone of its own.
        if self.class == ZoneClass::None && inherited == ZoneClass::Redirect {
            self.class = ZoneClass::Transparent;
        }
        let next = if self.class == ZoneClass::None {
            inherited
        } else {
            self.class
        };
        for child in self.children.values_mut() {
            child.propagate(next);
        }
    }
}

/// Label-reversed domain trie. The root represents the DNS root `"."`;
/// descent is in reversed label order (com, then example, then www).
///
/// The tree owns all of its nodes through the child maps and is built once
/// per run: insert everything, propagate classifications, then only read.
#[derive(Debug)]
pub struct DomainTree {
    root: DomainNode,
}

impl Default for DomainTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainTree {
    pub fn new() -> Self {
        Self {
            root: DomainNode::new(CompactString::const_new(".")),
        }
    }

    pub fn root(&self) -> &DomainNode {
        &self.root
    }

    /// Inserts `record` at `name`, creating intermediate nodes on demand.
    ///
    /// A `*` label marks the node reached so far as `redirect` and ends the
    /// descent; the record itself is discarded.
    pub fn insert(&mut self, name: &str, record: DnsRecord) {
        let labels = reversed_labels(name);
        self.root.insert(&labels, record);
    }

    /// Exact lookup; `None` when any label along the path is missing.
    pub fn find_exact(&self, name: &str) -> Option<&DomainNode> {
        let labels = reversed_labels(name);
        self.root.find(&labels)
    }

    /// Exact lookup that creates missing nodes along the way. Used to
    /// establish a zone-root node that may not have any records yet.
    pub fn find_or_create(&mut self, name: &str) -> &mut DomainNode {
        let labels = reversed_labels(name);
        self.root.find_or_create(&labels)
    }

    /// Longest-suffix lookup: tries `name` itself, then drops leading labels
    /// one at a time, returning the first node that exists. `None` when no
    /// suffix of the name resolves.
    pub fn find_longest_suffix(&self, name: &str) -> Option<&DomainNode> {
        let labels = reversed_labels(name);
        (1..=labels.len())
            .rev()
            .find_map(|end| self.root.find(&labels[..end]))
    }

    /// Infers the effective class of every node from its nearest classified
    /// ancestor. Runs once, after all inserts and before emission; the pass
    /// is root-to-leaves because a node's result depends on its ancestors.
    pub fn propagate_classes(&mut self) {
        self.root.propagate(ZoneClass::None);
    }
}

fn reversed_labels(name: &str) -> Labels {
    let mut labels = split_labels(name);
    labels.reverse();
    labels
}
