//! Consistency validation of the resolved address ranges.

use crate::models::ParameterSet;
use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;

/// User-facing validation failure. Recoverable at the request boundary,
/// where it is folded into the parameter set's `error` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> ValidationError {
        ValidationError {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ValidationError {}

fn get_addr(values: &ParameterSet, key: &str) -> Result<Ipv4Addr, Box<dyn Error>> {
    let value = values
        .get(key)
        .ok_or_else(|| format!("Missing address field {key}"))?;
    value
        .parse()
        .map_err(|_| format!("Invalid address '{value}' for {key}").into())
}

/// Check that the DHCP and introspection pools are ordered.
///
/// Addresses are compared numerically, not as strings. Both violations
/// report the dhcp pair in the message; the original tool never mentioned
/// the inspection pair and callers depend on the exact wording.
pub fn validate_ranges(values: &ParameterSet) -> Result<(), Box<dyn Error>> {
    let dhcp_start = get_addr(values, "dhcp_start")?;
    let dhcp_end = get_addr(values, "dhcp_end")?;
    let inspection_start = get_addr(values, "inspection_start")?;
    let inspection_end = get_addr(values, "inspection_end")?;

    if dhcp_start >= dhcp_end || inspection_start > inspection_end {
        return Err(Box::new(ValidationError::new(format!(
            "Invalid dhcp range specified, dhcp_start \"{}\" does not come before dhcp_end \"{}\"",
            values.get("dhcp_start").unwrap_or(""),
            values.get("dhcp_end").unwrap_or(""),
        ))));
    }
    Ok(())
}
