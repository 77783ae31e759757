//! KaraConverter - the main entry point for HTML to Kara conversion.

#[cfg(feature = "html")]
use tracing::debug;
use tracing::trace;

use crate::attributes::{Rule, Rules};
use crate::node::{Node, NodeKind};
use crate::options::{ConversionOptions, FormatterConfig};
use crate::traverse::{traverse, Visitor};
use crate::utilities::{escape_string, trim_lines, TRIPLE_QUOTE};
use crate::Result;

/// The main service for converting HTML to Kara DSL source
pub struct KaraConverter {
    options: ConversionOptions,
    formatter: FormatterConfig,
    rules: Rules,
}

impl KaraConverter {
    /// Create a new KaraConverter with default options and formatting
    pub fn new() -> Self {
        Self {
            options: ConversionOptions::default(),
            formatter: FormatterConfig::default(),
            rules: Rules::new(),
        }
    }

    /// Create a KaraConverter with custom options and formatting
    pub fn with_options(options: ConversionOptions, formatter: FormatterConfig) -> Result<Self> {
        formatter.validate()?;
        Ok(Self {
            options,
            formatter,
            rules: Rules::new(),
        })
    }

    /// Add a custom attribute rule, consulted before the built-in ones
    pub fn add_rule(&mut self, name: &str, rule: Rule) -> &mut Self {
        self.rules.add(name, rule);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Get the current formatter config
    pub fn formatter(&self) -> &FormatterConfig {
        &self.formatter
    }

    /// Convert an HTML string.
    ///
    /// Text with a `<body>` tag is parsed as a full document and its head and
    /// body are emitted. Anything else is parsed as a fragment and each
    /// top-level node is emitted on its own.
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str) -> String {
        if crate::detect::has_body_tag(html) {
            debug!("body tag found, converting as full document");
            let document = crate::html::parse_document(html);
            self.convert_nodes([&document.head, &document.body])
        } else {
            debug!("converting as fragment");
            let nodes = crate::html::parse_fragment(html);
            self.convert_nodes(&nodes)
        }
    }

    /// Convert a node tree, starting at `base_indent_depth`
    pub fn convert_node(&self, node: &Node) -> String {
        self.convert_nodes([node])
    }

    /// Convert sibling trees into one output
    pub fn convert_nodes<'a, I>(&self, nodes: I) -> String
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let mut emitter = Emitter {
            output: String::new(),
            converter: self,
        };
        for node in nodes {
            traverse(node, &mut emitter);
        }
        emitter.output
    }

    /// Attribute argument list for an element, empty if it has none
    pub fn convert_attributes(&self, node: &Node) -> String {
        self.rules.convert(&node.attributes, &self.options)
    }
}

impl Default for KaraConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Traversal callbacks writing DSL text into a single buffer
struct Emitter<'a> {
    output: String,
    converter: &'a KaraConverter,
}

impl Emitter<'_> {
    fn line(&mut self, depth: usize, content: &str) {
        let formatter = &self.converter.formatter;
        self.output.push_str(&formatter.indent_for(depth));
        self.output.push_str(content);
        self.output.push_str(&formatter.line_break);
    }

    fn text(&mut self, text: &str, depth: usize) {
        let lines = trim_lines(text, &self.converter.formatter.line_break);
        match lines.as_slice() {
            [] => {}
            [line] => self.line(depth, &format!("+\"{}\"", escape_string(line))),
            lines => {
                self.line(depth, TRIPLE_QUOTE);
                for line in lines {
                    self.line(depth + 1, &escape_string(line));
                }
                self.line(depth, TRIPLE_QUOTE);
            }
        }
    }

    /// Comment and raw data lines are copied verbatim
    fn verbatim(&mut self, text: &str, depth: usize) {
        for line in trim_lines(text, &self.converter.formatter.line_break) {
            self.line(depth, line);
        }
    }

    fn open_element(&mut self, node: &Node, depth: usize) {
        trace!(tag = node.tag_name(), depth, "element");
        let mut head = node.tag_name().to_string();

        let attributes = self.converter.convert_attributes(node);
        if !attributes.is_empty() {
            head.push('(');
            head.push_str(&attributes);
            head.push(')');
        }
        if node.has_children() {
            head.push_str(" {");
        }

        self.line(depth, &head);
    }
}

impl Visitor for Emitter<'_> {
    fn enter(&mut self, node: &Node, depth: usize) {
        let depth = depth + self.converter.formatter.base_indent_depth;
        match node.kind {
            NodeKind::Document | NodeKind::Doctype => {}
            NodeKind::Text => self.text(node.value(), depth),
            NodeKind::Comment => {
                self.line(depth, "/*");
                self.verbatim(node.value(), depth + 1);
            }
            NodeKind::RawData => {
                self.line(depth, TRIPLE_QUOTE);
                self.verbatim(node.value(), depth + 1);
            }
            NodeKind::Element => self.open_element(node, depth),
        }
    }

    fn exit(&mut self, node: &Node, depth: usize) {
        let depth = depth + self.converter.formatter.base_indent_depth;
        match node.kind {
            NodeKind::Document | NodeKind::Doctype | NodeKind::Text => {}
            NodeKind::Comment => self.line(depth, "*/"),
            NodeKind::RawData => self.line(depth, TRIPLE_QUOTE),
            NodeKind::Element if node.has_children() => self.line(depth, "}"),
            NodeKind::Element => {}
        }
    }
}
