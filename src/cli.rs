//! Command-line argument handling for the wizard binary.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;

lazy_static! {
    static ref KV_RE: Regex =
        Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)=(.*)$").expect("Invalid Regex?");
}

/// Parse `key=value` arguments into the raw pair list the request pipeline
/// consumes. Quoting around the value is stripped.
pub fn parse_kv_args<I>(args: I) -> Result<Vec<(String, String)>, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut pairs = Vec::new();
    for arg in args {
        let arg = arg.trim();
        match KV_RE.captures(arg) {
            Some(caps) => {
                let value = caps[2].trim_matches('\'').trim_matches('"').to_string();
                pairs.push((caps[1].to_string(), value));
            }
            None => {
                return Err(format!("Expected key=value argument, got '{arg}'").into());
            }
        }
    }
    Ok(pairs)
}
