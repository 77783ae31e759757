//! Parser-neutral DOM node structure for HTML to Kara conversion.
//!
//! Any HTML parser can convert its output to this structure to use the
//! converter. Node kinds are derived from DOM node names (`#text`,
//! `#comment`, ...) so the mapping lives in exactly one place.

use indexmap::IndexMap;

/// Semantic node kinds the converter distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Document root (`#document`)
    Document,
    /// Document type declaration (`#doctype`)
    Doctype,
    /// Character data (`#text`)
    Text,
    /// Comment (`#comment`)
    Comment,
    /// Verbatim script/style content (`#data`)
    RawData,
    /// Any named element
    Element,
}

impl NodeKind {
    /// Map a DOM node name to its kind. Anything not starting with one of the
    /// reserved `#` names is an element.
    pub fn from_node_name(name: &str) -> Self {
        match name {
            "#document" => NodeKind::Document,
            "#doctype" => NodeKind::Doctype,
            "#text" => NodeKind::Text,
            "#comment" => NodeKind::Comment,
            "#data" => NodeKind::RawData,
            _ => NodeKind::Element,
        }
    }
}

impl From<&str> for NodeKind {
    fn from(name: &str) -> Self {
        NodeKind::from_node_name(name)
    }
}

/// A DOM node.
///
/// Attributes keep the order in which the parser reported them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Node kind, derived from `node_name`
    pub kind: NodeKind,

    /// Node name (lowercase tag for elements, e.g. "div", "#text" for text nodes)
    pub node_name: String,

    /// Content for text, comment and raw data nodes
    pub node_value: Option<String>,

    /// Attributes in document order (element nodes only)
    pub attributes: IndexMap<String, String>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    fn named(node_name: &str, node_value: Option<&str>) -> Self {
        Self {
            kind: NodeKind::from_node_name(node_name),
            node_name: node_name.to_string(),
            node_value: node_value.map(str::to_string),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node.
    ///
    /// Tag names are lowercased (`foreignObject` becomes `foreignobject`), so
    /// every element maps to a lowercase builder call. Attribute names are
    /// kept as given.
    pub fn element(tag_name: &str) -> Self {
        Self::named(&tag_name.to_lowercase(), None)
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs<'a, I>(tag_name: &str, attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::named("#text", Some(content))
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self::named("#comment", Some(content))
    }

    /// Create a raw data node (script/style body)
    pub fn data(content: &str) -> Self {
        Self::named("#data", Some(content))
    }

    /// Create a doctype node
    pub fn doctype() -> Self {
        Self::named("#doctype", None)
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::named("#document", None)
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Get the tag name (meaningful for elements only)
    pub fn tag_name(&self) -> &str {
        &self.node_name
    }

    /// Text carried by text, comment and raw data nodes
    pub fn value(&self) -> &str {
        self.node_value.as_deref().unwrap_or("")
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node> {
        self.children.iter()
    }

    /// Check if the node has any child, including whitespace-only text
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Set an attribute. An existing key keeps its original position.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

impl Drop for Node {
    // Unlinks descendants one at a time so dropping a deep tree does not recurse
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
