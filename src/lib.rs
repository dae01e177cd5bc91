//! Undercloud installer configuration wizard.
//!
//! Given a provisioning CIDR and a node count, derives every network
//! parameter an undercloud.conf needs (local IP, gateway, VIPs, DHCP and
//! introspection pools) and renders either an editable form context or the
//! final config text. Stateless: each request gets a fresh [`ParameterSet`].

pub mod cli;
pub mod config;
pub mod descriptions;
pub mod models;
pub mod output;
pub mod processing;

use models::ParameterSet;
use processing::{allocate, normalize, Mode, ValidationError};
use std::error::Error;

/// Which response a request asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// The editable form, pre-filled with current values.
    Form,
    /// The generated configuration text.
    Generate,
}

fn flag_set(raw: &[(String, String)], name: &str) -> bool {
    raw.iter().any(|(k, v)| k == name && !v.is_empty())
}

/// Process one request end to end.
///
/// # Arguments
/// * `raw` - key/value pairs as submitted, control flags included
/// * `descriptions_file` - Optional path to the descriptions asset. If None,
///   uses the default file in the working directory.
///
/// # Returns
/// The response kind (from the `generate` flag) and the populated parameter
/// set. Validation failures land in the set's `error` field; malformed CIDR
/// or numeric input propagates as a request failure.
pub fn process_request(
    raw: &[(String, String)],
    descriptions_file: Option<&str>,
) -> Result<(ResponseKind, ParameterSet), Box<dyn Error>> {
    let kind = if flag_set(raw, "generate") {
        ResponseKind::Generate
    } else {
        ResponseKind::Form
    };
    let mode = if flag_set(raw, "genadv") {
        Mode::RegenerateAdvanced
    } else {
        Mode::Normal
    };
    log::info!("Processing request: kind={kind:?} mode={mode:?} pairs={}", raw.len());

    let mut values = normalize(raw, mode);
    let loaded = descriptions::load_descriptions(descriptions_file)?;
    descriptions::merge_descriptions(&mut values, &loaded);

    match allocate(&mut values) {
        Ok(()) => {}
        Err(e) => match e.downcast::<ValidationError>() {
            Ok(validation) => {
                log::warn!("Request failed validation: {validation}");
                values.set_error(validation.to_string());
            }
            Err(fatal) => return Err(fatal),
        },
    }

    Ok((kind, values))
}
