use std::fmt::Write;

use super::is_active;
use crate::outline::OutlineNode;

/// Indented plain-text outline, one entry per line.
///
/// Entries on the active path are marked `*`, the rest `-`. Unlike the
/// rendered TOC nothing is collapsed.
pub fn outline_text(nodes: &[OutlineNode], active_id: Option<&str>) -> String {
    let mut out = String::new();
    write_level(&mut out, nodes, active_id, 0);
    out
}

fn write_level(out: &mut String, nodes: &[OutlineNode], active_id: Option<&str>, level: usize) {
    for node in nodes {
        let marker = if is_active(node, active_id) { '*' } else { '-' };
        let _ = writeln!(
            out,
            "{:indent$}{marker} {} (#{})",
            "",
            node.title(),
            node.id(),
            indent = level * 2
        );
        write_level(out, &node.children, active_id, level + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::{HeadingEntry, build_outline};

    #[test]
    fn test_outline_text() {
        let forest = build_outline(&[
            HeadingEntry::new("a", 1, "Alpha"),
            HeadingEntry::new("b", 2, "Beta"),
            HeadingEntry::new("c", 1, "Gamma"),
        ]);

        assert_eq!(
            outline_text(&forest, Some("b")),
            "* Alpha (#a)\n  * Beta (#b)\n- Gamma (#c)\n"
        );
        assert_eq!(
            outline_text(&forest, None),
            "- Alpha (#a)\n  - Beta (#b)\n- Gamma (#c)\n"
        );
    }

    #[test]
    fn test_empty_outline_text() {
        assert_eq!(outline_text(&[], None), "");
    }
}
