//! TOC markup.
//!
//! The whole outline is emitted so the browser script can move the active
//! path without re-rendering. Entries on the active path get `toc-active`;
//! child lists of inactive entries get `hidden`.

use std::fmt::Write;

use super::is_active;
use crate::outline::OutlineNode;
use crate::utils::html::{escape, escape_attr};

pub const LIST_CLASS: &str = "toc";
pub const ACTIVE_CLASS: &str = "toc-active";

/// Nested `<ul class="toc">` lists for the forest, or an empty string.
pub fn toc_html(nodes: &[OutlineNode], active_id: Option<&str>) -> String {
    let mut out = String::new();
    write_list(&mut out, nodes, active_id, false);
    out
}

fn write_list(out: &mut String, nodes: &[OutlineNode], active_id: Option<&str>, hidden: bool) {
    if nodes.is_empty() {
        return;
    }

    let _ = write!(out, r#"<ul class="{LIST_CLASS}""#);
    if hidden {
        out.push_str(" hidden");
    }
    out.push('>');

    for node in nodes {
        let active = is_active(node, active_id);
        let id = escape_attr(node.id());

        let _ = write!(out, r#"<li data-toc-id="{id}""#);
        if active {
            let _ = write!(out, r#" class="{ACTIVE_CLASS}""#);
        }
        let _ = write!(
            out,
            r##"><a href="#{id}">{}</a>"##,
            escape(node.title())
        );
        write_list(out, &node.children, active_id, !active);
        out.push_str("</li>");
    }

    out.push_str("</ul>");
}
