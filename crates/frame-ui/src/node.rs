//! Compiled node tree and HTML markup
//!
//! [`Node`] is the output of rendering an [`Element`](crate::element::Element)
//! tree: every primitive has been reduced to a `div` or `img` with a
//! concrete [`Style`]. The image renderer consumes this tree directly; the
//! markup form is served for debugging and previews.

use crate::style::Style;
use serde::{Deserialize, Serialize};

/// Tag of a compiled node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Container
    Div,
    /// Image
    Img,
}

impl Tag {
    /// HTML tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Img => "img",
        }
    }
}

/// Child of a compiled node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeChild {
    /// Nested node
    Node(Node),
    /// Text run
    Text(String),
}

/// A compiled node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Tag
    pub tag: Tag,
    /// Compiled style
    pub style: Style,
    /// Image source for `img` nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Children in order
    #[serde(default)]
    pub children: Vec<NodeChild>,
}

impl Node {
    /// Create a `div` with the given style
    pub fn div(style: Style) -> Self {
        Self {
            tag: Tag::Div,
            style,
            src: None,
            children: Vec::new(),
        }
    }

    /// Create an `img` with the given style and source
    pub fn img(style: Style, src: impl Into<String>) -> Self {
        Self {
            tag: Tag::Img,
            style,
            src: Some(src.into()),
            children: Vec::new(),
        }
    }

    /// Append a child, merging adjacent text runs
    pub fn push(&mut self, child: NodeChild) {
        if let NodeChild::Text(text) = &child {
            if let Some(NodeChild::Text(last)) = self.children.last_mut() {
                last.push_str(text);
                return;
            }
        }
        self.children.push(child);
    }

    /// Child nodes, skipping text
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|child| match child {
            NodeChild::Node(node) => Some(node),
            NodeChild::Text(_) => None,
        })
    }

    /// Depth-first search for the first node whose text contains `needle`
    pub fn find_text(&self, needle: &str) -> Option<&Node> {
        let direct = self.children.iter().any(|child| match child {
            NodeChild::Text(text) => text.contains(needle),
            NodeChild::Node(_) => false,
        });
        if direct {
            return Some(self);
        }
        self.child_nodes().find_map(|node| node.find_text(needle))
    }

    /// Serialize as HTML markup
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_html(self, &mut out);
        out
    }
}

fn write_html(node: &Node, out: &mut String) {
    out.push('<');
    out.push_str(node.tag.as_str());
    if !node.style.is_empty() {
        out.push_str(" style=\"");
        out.push_str(&escape_html(&node.style.to_css()));
        out.push('"');
    }
    match node.tag {
        Tag::Img => {
            if let Some(src) = &node.src {
                out.push_str(" src=\"");
                out.push_str(&escape_html(src));
                out.push('"');
            }
            out.push_str(" />");
        }
        Tag::Div => {
            out.push('>');
            for child in &node.children {
                match child {
                    NodeChild::Node(child) => write_html(child, out),
                    NodeChild::Text(text) => out.push_str(&escape_html(text)),
                }
            }
            out.push_str("</div>");
        }
    }
}

/// Escape text for HTML content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
