//! Plain-text form rendering for the CLI.
//!
//! One line per field in form order, with the merged help text shown above
//! each field and an error banner when validation failed. HTML rendering is
//! left to whatever front end embeds the library.

use crate::config::{ADVANCED_KEYS, BASIC_KEYS};
use crate::models::ParameterSet;
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Descriptions are keyed by config-group-prefixed option name, which does
/// not always match the form field name.
fn description_key(field: &str) -> String {
    match field {
        "hostname" => "DEFAULT_undercloud_hostname".to_string(),
        "inspection_start" | "inspection_end" => "DEFAULT_inspection_iprange".to_string(),
        _ => format!("DEFAULT_{field}"),
    }
}

/// Render the editable form context as plain text.
pub fn render_form(values: &ParameterSet) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !values.error().is_empty() {
        lines.push(format!("{}", values.error().red()));
        lines.push(String::new());
    }

    for key in BASIC_KEYS.iter().chain(ADVANCED_KEYS.iter()) {
        let help = values.get(&description_key(key)).unwrap_or("");
        if !help.is_empty() {
            lines.push(format!("# {help}"));
        }
        lines.push(format!(
            "{key} = {}",
            format_field(values.get(key).unwrap_or(""), 0)
        ));
    }

    lines.iter().join("\n")
}
