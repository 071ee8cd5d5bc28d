use crate::domain::graph::DependencyGraph;

/// Serialise the graph as DOT source.
///
/// Boxes for issues, `vee` arrowheads for dependencies. Bare nodes are left
/// undeclared; Graphviz creates them from the edge statements.
pub fn to_dot(graph: &DependencyGraph) -> String {
    let mut lines = Vec::new();
    lines.push("digraph {".to_string());
    lines.push("\tnode [shape=box]".to_string());
    lines.push("\tedge [arrowhead=vee]".to_string());

    for node in graph.declared_nodes() {
        let title = node.title.as_deref().unwrap_or_default();
        lines.push(format!("\t\"{}\" [label=\"{}\"]", node.number, escape(title)));
    }

    for (from, to) in graph.edges() {
        lines.push(format!("\t\"{}\" -> \"{}\"", from, to));
    }

    lines.push("}".to_string());
    let mut dot = lines.join("\n");
    dot.push('\n');
    dot
}

fn escape(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}
