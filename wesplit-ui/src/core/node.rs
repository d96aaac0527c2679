//! Serializable description of a built widget tree

use serde::Serialize;
use std::fmt::Write as _;

/// How a navigation title is displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleDisplayMode {
    /// Compact title centred in the bar
    Inline,
    /// Large leading title below the bar
    #[default]
    Large,
}

/// Description of one widget; produced by [`Widget::describe`](crate::core::Widget::describe)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    NavigationStack {
        title: String,
        display_mode: TitleDisplayMode,
        children: Vec<Node>,
    },
    Form {
        children: Vec<Node>,
    },
    Section {
        children: Vec<Node>,
    },
    ForEach {
        keys: Vec<String>,
        children: Vec<Node>,
    },
    Button {
        label: String,
    },
    TextField {
        placeholder: String,
        value: String,
    },
    Text {
        content: String,
    },
    Picker {
        label: String,
        selection: String,
        options: Vec<String>,
    },
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::NavigationStack { children, .. }
            | Node::Form { children }
            | Node::Section { children, .. }
            | Node::ForEach { children, .. } => children,
            _ => &[],
        }
    }

    /// First node, in document order, matching `predicate`
    pub fn find(&self, predicate: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        if predicate(self) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(predicate))
    }

    /// Every visible string, in document order
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts(&self, out: &mut Vec<String>) {
        match self {
            Node::NavigationStack { title, .. } => out.push(title.clone()),
            Node::Button { label } => out.push(label.clone()),
            Node::TextField { placeholder, value } => {
                out.push(if value.is_empty() { placeholder.clone() } else { value.clone() })
            }
            Node::Text { content } => out.push(content.clone()),
            Node::Picker { label, options, .. } => {
                out.push(label.clone());
                out.extend(options.iter().cloned());
            }
            _ => {}
        }
        for child in self.children() {
            child.collect_texts(out);
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Indented plain-text rendering of the tree
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        // Writing into a String cannot fail.
        let _ = match self {
            Node::NavigationStack { title, display_mode, .. } => {
                writeln!(out, "{indent}NavigationStack \"{title}\" ({display_mode:?})")
            }
            Node::Form { .. } => writeln!(out, "{indent}Form"),
            Node::Section { .. } => writeln!(out, "{indent}Section"),
            Node::ForEach { keys, .. } => writeln!(out, "{indent}ForEach ({} items)", keys.len()),
            Node::Button { label } => writeln!(out, "{indent}[{label}]"),
            Node::TextField { placeholder, value } if value.is_empty() => {
                writeln!(out, "{indent}<{placeholder}>")
            }
            Node::TextField { value, .. } => writeln!(out, "{indent}<{value}>"),
            Node::Text { content } => writeln!(out, "{indent}{content}"),
            Node::Picker { label, selection, options } => {
                let _ = writeln!(out, "{indent}{label}");
                for option in options {
                    let mark = if option == selection { "(*)" } else { "( )" };
                    let _ = writeln!(out, "{indent}  {mark} {option}");
                }
                Ok(())
            }
        };
        for child in self.children() {
            child.write_outline(out, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::NavigationStack {
            title: "Title".into(),
            display_mode: TitleDisplayMode::Inline,
            children: vec![
                Node::Button { label: "Go".into() },
                Node::Form {
                    children: vec![
                        Node::TextField { placeholder: "Name".into(), value: String::new() },
                        Node::Picker {
                            label: "Pick".into(),
                            selection: "b".into(),
                            options: vec!["a".into(), "b".into()],
                        },
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_texts_in_document_order() {
        assert_eq!(sample().texts(), vec!["Title", "Go", "Name", "Pick", "a", "b"]);
    }

    #[test]
    fn test_find() {
        let tree = sample();
        let picker = tree.find(&|n| matches!(n, Node::Picker { .. }));
        assert!(matches!(picker, Some(Node::Picker { selection, .. }) if selection == "b"));
        assert!(tree.find(&|n| matches!(n, Node::Section { .. })).is_none());
    }

    #[test]
    fn test_json_is_tagged() {
        let json = Node::Button { label: "Go".into() }.to_json().unwrap();
        assert!(json.contains("\"kind\": \"button\""));
        assert!(json.contains("\"label\": \"Go\""));
    }

    #[test]
    fn test_outline_marks_selection() {
        let outline = sample().outline();
        assert!(outline.starts_with("NavigationStack \"Title\" (Inline)\n"));
        assert!(outline.contains("  [Go]\n"));
        assert!(outline.contains("    <Name>\n"));
        assert!(outline.contains("      (*) b\n"));
        assert!(outline.contains("      ( ) a\n"));
    }
}
