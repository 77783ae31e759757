//! HTML parsing support.
//!
//! This module parses HTML strings with scraper/html5ever and converts the
//! result to the parser-neutral Node structure used by the converter.

use scraper::node::Element;
use scraper::{ElementRef, Html, Node as ScraperNode};
use tracing::trace;

use crate::node::Node;
use crate::utilities::is_raw_text;

/// The two subtrees of a fully parsed document that produce output
#[derive(Debug, Clone)]
pub struct Document {
    pub head: Node,
    pub body: Node,
}

/// Parse HTML as a body fragment and return its top-level nodes.
///
/// No implicit `<html>`/`<body>` structure shows up in the result.
///
/// # Example
///
/// ```rust
/// use html2kara::parse_fragment;
///
/// let nodes = parse_fragment("<p>Hello</p> world");
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[0].tag_name(), "p");
/// ```
pub fn parse_fragment(html: &str) -> Vec<Node> {
    let fragment = Html::parse_fragment(html);
    let mut root = element_to_node(fragment.root_element());
    std::mem::take(&mut root.children)
}

/// Parse HTML as a full document and return its head and body.
pub fn parse_document(html: &str) -> Document {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let mut head = None;
    let mut body = None;
    for child in root.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "head" if head.is_none() => head = Some(element_to_node(child)),
            "body" if body.is_none() => body = Some(element_to_node(child)),
            _ => {}
        }
    }

    // html5ever always synthesizes both, the fallbacks only guard odd trees
    Document {
        head: head.unwrap_or_else(|| Node::element("head")),
        body: body.unwrap_or_else(|| Node::element("body")),
    }
}

/// Convert a scraper element and its subtree to our Node structure.
///
/// Walks with an explicit stack of open elements, so nesting depth is bounded
/// by the heap rather than the call stack. Text inside script/style becomes
/// raw data.
fn element_to_node(element: ElementRef) -> Node {
    let mut root = None;
    let mut stack = vec![open_element(element.value(), element.children())];

    while let Some((node, raw, children)) = stack.last_mut() {
        let Some(child) = children.next() else {
            let finished = stack.pop().map(|(node, _, _)| node);
            match stack.last_mut() {
                Some((parent, _, _)) => parent.children.extend(finished),
                None => root = finished,
            }
            continue;
        };

        match child.value() {
            ScraperNode::Text(text) if *raw => node.add_child(Node::data(&text.text)),
            ScraperNode::Text(text) => node.add_child(Node::text(&text.text)),
            ScraperNode::Comment(comment) => node.add_child(Node::comment(&comment.comment)),
            ScraperNode::Doctype(_) => node.add_child(Node::doctype()),
            ScraperNode::Element(child_element) => {
                stack.push(open_element(child_element, child.children()));
            }
            other => trace!(?other, "skipping unsupported node"),
        }
    }

    root.unwrap_or_else(|| Node::element(element.value().name()))
}

fn open_element<I>(element: &Element, children: I) -> (Node, bool, I) {
    let name = element.name();
    (
        Node::element_with_attrs(name, element.attrs()),
        is_raw_text(name),
        children,
    )
}
