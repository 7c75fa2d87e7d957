//! Serialization of a classified domain tree into unbound `local-zone:` /
//! `local-data:` declarations.

use std::fmt::Write;

use crate::tree::{DomainNode, DomainTree, ZoneClass};

/// Renders the whole tree. Children are walked in lexical label order, so
/// equal trees render byte-identically no matter the insertion order; the
/// file-diff skip at the output boundary relies on this.
pub fn render(tree: &DomainTree) -> String {
    let mut out = String::new();
    render_node(tree.root(), ".", &mut out);
    out
}

fn child_fqdn(label: &str, parent: &str) -> String {
    if parent == "." {
        format!("{label}.")
    } else {
        format!("{label}.{parent}")
    }
}

fn render_node(node: &DomainNode, fqdn: &str, out: &mut String) {
    if node.class() != ZoneClass::None {
        let _ = write!(out, "\nlocal-zone: \"{}\" {}\n", fqdn, node.class().as_str());
        render_records(node, fqdn, out);
        for child in node.children() {
            render_folded(child, &child_fqdn(child.label(), fqdn), out);
        }
    }
    for child in node.children() {
        render_node(child, &child_fqdn(child.label(), fqdn), out);
    }
}

/// Folds an unclassified descendant's records into the enclosing zone block.
/// Stops at the first descendant that opens a block of its own; the outer
/// walk emits that one separately.
fn render_folded(node: &DomainNode, fqdn: &str, out: &mut String) {
    if node.class() != ZoneClass::None {
        return;
    }
    render_records(node, fqdn, out);
    for child in node.children() {
        render_folded(child, &child_fqdn(child.label(), fqdn), out);
    }
}

fn render_records(node: &DomainNode, fqdn: &str, out: &mut String) {
    for record in node.records().iter() {
        let _ = writeln!(
            out,
            "  local-data: \"{} {} IN {} {}\"",
            fqdn,
            record.ttl,
            record.record_type.as_str(),
            record.data
        );
    }
}
