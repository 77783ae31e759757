//! Rule and Filter types for attribute conversion.

use crate::options::ConversionOptions;
use crate::utilities::escape_string;

/// Type alias for replacement functions. Takes the attribute value and returns
/// a complete `name = value` argument.
pub type ReplacementFn = Box<dyn Fn(&str, &ConversionOptions) -> String + Send + Sync>;

/// A filter determines which attributes a rule applies to
pub enum Filter {
    /// Match a single attribute key
    Key(String),
    /// Match any of multiple attribute keys
    Keys(Vec<String>),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&str, &ConversionOptions) -> bool + Send + Sync>),
}

impl Filter {
    /// Create a filter for a single key
    pub fn key(name: &str) -> Self {
        Filter::Key(name.to_string())
    }

    /// Create a filter for multiple keys
    pub fn keys(names: &[&str]) -> Self {
        Filter::Keys(names.iter().map(|s| s.to_string()).collect())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str, &ConversionOptions) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches an attribute key. Keys match exactly.
    pub fn matches(&self, key: &str, options: &ConversionOptions) -> bool {
        match self {
            Filter::Key(k) => key == k,
            Filter::Keys(keys) => keys.iter().any(|k| k == key),
            Filter::Predicate(f) => f(key, options),
        }
    }
}

/// A rule defines how to convert a matched attribute to a DSL argument
pub struct Rule {
    /// Filter to determine which attributes this rule applies to
    pub filter: Filter,
    /// Replacement function that generates the argument
    pub replacement: ReplacementFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&str, &ConversionOptions) -> String + Send + Sync + 'static,
    {
        Self {
            filter,
            replacement: Box::new(replacement),
        }
    }

    /// Create a rule that matches a single key
    pub fn for_key<F>(key: &str, replacement: F) -> Self
    where
        F: Fn(&str, &ConversionOptions) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::key(key), replacement)
    }

    /// Create a rule that emits the value as a quoted string under another
    /// argument name
    pub fn renamed(key: &str, argument: &str) -> Self {
        let argument = argument.to_string();
        Self::for_key(key, move |value, _| {
            format!("{} = \"{}\"", argument, escape_string(value))
        })
    }

    /// Apply this rule's replacement
    pub fn replace(&self, value: &str, options: &ConversionOptions) -> String {
        (self.replacement)(value, options)
    }
}
