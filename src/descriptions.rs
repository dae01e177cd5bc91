//! Option description loading.
//!
//! The wizard ships a static JSON mapping of installer option names to their
//! human-readable help text (regenerated offline from the installer's option
//! registry). It is read-only and merged into every response so the form can
//! show help next to each field.

use crate::models::ParameterSet;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

use crate::config::DEFAULT_DESCRIPTIONS_FILE;

/// Load the option descriptions mapping.
///
/// # Arguments
/// * `path` - Optional path to a specific descriptions file. If None, uses
///   `opt-descriptions.json` in the working directory.
///
/// # Returns
/// * `Ok(map)` - option name to help text (missing help becomes empty)
/// * `Err` - file missing, unreadable, or not a flat string mapping
pub fn load_descriptions(path: Option<&str>) -> Result<BTreeMap<String, String>, Box<dyn Error>> {
    let path = path.unwrap_or(DEFAULT_DESCRIPTIONS_FILE);
    if !Path::new(path).exists() {
        return Err(format!("Descriptions file does not exist: {path}").into());
    }
    log::debug!("Reading descriptions from {path}");

    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading descriptions file {path}: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let parsed: Result<BTreeMap<String, Option<String>>, _> =
        serde_path_to_error::deserialize(&mut deserializer);
    let descriptions = match parsed {
        Ok(map) => map,
        Err(e) => {
            let json_path = e.path().to_string();
            return Err(format!("Error parsing descriptions file {path} at {json_path}: {e}").into());
        }
    };

    Ok(descriptions
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or_default()))
        .collect())
}

/// Merge descriptions into a parameter set. Description keys carry the
/// config-group prefix (`DEFAULT_...`) so they never collide with form keys.
pub fn merge_descriptions(values: &mut ParameterSet, descriptions: &BTreeMap<String, String>) {
    for (key, text) in descriptions {
        values.insert(key, text.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_descriptions() {
        let descriptions =
            load_descriptions(Some("src/tests/test_data/opt_descriptions_test.json"))
                .expect("Error reading descriptions");
        assert!(!descriptions.is_empty(), "Descriptions should not be empty");
        assert_eq!(
            descriptions.get("DEFAULT_local_interface").map(|s| s.as_str()),
            Some("Network interface on the Undercloud that will be handling the PXE boots and DHCP for Overcloud instances."),
        );
        // Null help text collapses to an empty string.
        assert_eq!(
            descriptions.get("DEFAULT_undocumented_option").map(|s| s.as_str()),
            Some(""),
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_descriptions(Some("src/tests/test_data/no_such_file.json"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_bad_json_reports_path() {
        let result = load_descriptions(Some("src/tests/test_data/opt_descriptions_bad.json"));
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains("DEFAULT_local_mtu"),
            "error should name the offending key: {err}"
        );
    }

    #[test]
    fn test_merge_into_parameter_set() {
        let mut values = ParameterSet::new();
        values.insert("local_interface", "eth1");
        let descriptions =
            load_descriptions(Some("src/tests/test_data/opt_descriptions_test.json"))
                .expect("Error reading descriptions");
        merge_descriptions(&mut values, &descriptions);
        assert_eq!(values.get("local_interface"), Some("eth1"));
        assert!(values.contains("DEFAULT_local_interface"));
    }
}
