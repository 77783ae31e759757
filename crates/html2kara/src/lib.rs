//! # html2kara
//!
//! Convert HTML markup to Kara builder DSL source.
//!
//! Tags become builder calls with named arguments, nested children become
//! block bodies, and text, comments and script/style content become string
//! literals or comments:
//!
//! ```text
//! <div class="btn-info">Hello</div>      div(c = btn_info) {
//!                                  ──▶       +"Hello"
//!                                        }
//! ```
//!
//! ## Design
//!
//! The converter works on a parser-neutral [`Node`] tree and walks it once,
//! depth first, through the [`Visitor`] callbacks of [`traverse`]. HTML string
//! parsing (scraper/html5ever) is behind the default `html` feature, so the
//! core can be driven by any parser that produces [`Node`] values.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use html2kara::{convert, ConversionOptions, FormatterConfig};
//!
//! let source = convert(
//!     "<div> text </div>",
//!     &ConversionOptions::default(),
//!     &FormatterConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(source, "div {\n\t+\"text\"\n}\n");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use html2kara::{KaraConverter, Node};
//!
//! let link = Node::element_with_attrs("a", [("href", "#")]).with_child(Node::text("Link"));
//!
//! let source = KaraConverter::new().convert_node(&link);
//! assert_eq!(source, "a(href = \"#\") {\n\t+\"Link\"\n}\n");
//! ```

mod attributes;
mod detect;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod service;
pub mod traverse;
mod utilities;

pub use attributes::{Filter, Rule, Rules};
#[cfg(feature = "html")]
pub use detect::contains_html;
pub use detect::has_body_tag;
#[cfg(feature = "html")]
pub use html::{parse_document, parse_fragment, Document};
pub use node::{Node, NodeKind};
pub use options::{ConversionOptions, FormatterConfig};
pub use service::KaraConverter;
pub use traverse::{traverse, Visitor};
pub use utilities::{escape_string, TRIPLE_QUOTE};

/// Error type for html2kara operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid formatter config: {0}")]
    InvalidFormatter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convert an HTML string to Kara DSL source.
///
/// Fails only when `formatter` is invalid; HTML parsing itself recovers from
/// malformed markup.
#[cfg(feature = "html")]
pub fn convert(
    html: &str,
    options: &ConversionOptions,
    formatter: &FormatterConfig,
) -> Result<String> {
    let converter = KaraConverter::with_options(options.clone(), formatter.clone())?;
    Ok(converter.convert(html))
}
