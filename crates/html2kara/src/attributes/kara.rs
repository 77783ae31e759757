//! Built-in rules mapping HTML attributes to Kara builder arguments.

use super::Rule;
use crate::utilities::{class_identifier, escape_string};

/// Create all built-in rules, in priority order
pub fn kara_rules() -> Vec<Rule> {
    vec![
        class_rule(),
        input_type_rule(),
        href_rule(),
        label_for_rule(),
    ]
}

/// `class="main1 btn-info"` becomes `c = main1 + btn_info`.
///
/// An empty or all-space value still yields the `c = ` prefix with nothing
/// after it, one segment per attribute like every other rule.
fn class_rule() -> Rule {
    Rule::for_key("class", |value, _| {
        let classes: Vec<String> = value
            .split(' ')
            .filter(|class| !class.is_empty())
            .map(class_identifier)
            .collect();
        format!("c = {}", classes.join(" + "))
    })
}

fn input_type_rule() -> Rule {
    Rule::for_key("type", |value, _| format!("inputType = InputType.{}", value))
}

fn href_rule() -> Rule {
    Rule::for_key("href", |value, options| {
        if options.href_to_direct_link {
            format!("href = DirectLink(\"{}\")", escape_string(value))
        } else {
            format!("href = \"{}\"", escape_string(value))
        }
    })
}

fn label_for_rule() -> Rule {
    Rule::renamed("for", "forId")
}
