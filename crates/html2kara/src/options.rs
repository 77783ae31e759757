//! Configuration options for Kara DSL generation

use crate::{Error, Result};

/// Feature toggles for attribute conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Rewrite `href` values into `DirectLink("...")` calls instead of plain
    /// string literals
    pub href_to_direct_link: bool,
}

/// Layout of the generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// String repeated once per nesting level
    pub indent: String,

    /// Line separator, also used to split multi-line text
    pub line_break: String,

    /// Nesting level of top-level nodes
    pub base_indent_depth: usize,
}

impl FormatterConfig {
    /// Create a validated formatter config
    pub fn new(indent: &str, line_break: &str, base_indent_depth: usize) -> Result<Self> {
        let config = Self {
            indent: indent.to_string(),
            line_break: line_break.to_string(),
            base_indent_depth,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the config can drive a conversion
    pub fn validate(&self) -> Result<()> {
        if self.line_break.is_empty() {
            return Err(Error::InvalidFormatter(
                "line break must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Indentation for an absolute nesting depth
    pub fn indent_for(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            line_break: "\n".to_string(),
            base_indent_depth: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let formatter = FormatterConfig::default();
        assert_eq!(formatter.indent, "\t");
        assert_eq!(formatter.line_break, "\n");
        assert_eq!(formatter.base_indent_depth, 0);
        assert!(!ConversionOptions::default().href_to_direct_link);
    }

    #[test]
    fn test_empty_line_break_rejected() {
        let err = FormatterConfig::new("  ", "", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidFormatter(_)));
    }

    #[test]
    fn test_indent_for() {
        let formatter = FormatterConfig::new("  ", "\n", 1).unwrap();
        assert_eq!(formatter.indent_for(0), "");
        assert_eq!(formatter.indent_for(3), "      ");
    }
}
