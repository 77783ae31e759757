//! Rule system for converting element attributes to DSL arguments.

mod kara;
mod rule;

pub use kara::kara_rules;
pub use rule::{Filter, Rule};

use indexmap::IndexMap;

use crate::options::ConversionOptions;
use crate::utilities::escape_string;

/// Collection of rules for attribute conversion
pub struct Rules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<String, Rule>,
    /// Built-in Kara rules
    kara_rules: Vec<Rule>,
}

impl Rules {
    /// Create a new Rules instance with the Kara rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            kara_rules: kara_rules(),
        }
    }

    /// Add a custom rule. Re-using a name replaces the earlier rule.
    pub fn add(&mut self, name: &str, rule: Rule) {
        self.custom_rules.insert(name.to_string(), rule);
    }

    /// Find the first rule matching an attribute key
    pub fn for_key<'a>(&'a self, key: &str, options: &ConversionOptions) -> Option<&'a Rule> {
        self.custom_rules
            .values()
            .chain(&self.kara_rules)
            .find(|rule| rule.filter.matches(key, options))
    }

    /// Convert one attribute to a `name = value` argument
    pub fn convert_attribute(&self, key: &str, value: &str, options: &ConversionOptions) -> String {
        match self.for_key(key, options) {
            Some(rule) => rule.replace(value, options),
            None => format!("{} = \"{}\"", key, escape_string(value)),
        }
    }

    /// Convert an element's attributes to a comma-separated argument list.
    ///
    /// Returns an empty string for an empty attribute list.
    pub fn convert<'a, I>(&self, attributes: I, options: &ConversionOptions) -> String
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        attributes
            .into_iter()
            .map(|(key, value)| self.convert_attribute(key, value, options))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
