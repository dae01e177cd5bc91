//! Request normalization.
//!
//! Merges raw form input with the built-in basic defaults, dropping unknown
//! and empty keys. In advanced-regeneration mode every advanced key is
//! stripped first so the allocator derives it from scratch.

use crate::config::{ADVANCED_KEYS, DEFAULT_BASIC, KNOWN_KEYS};
use crate::models::ParameterSet;

/// How a request wants its advanced fields handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keep whatever advanced values were supplied.
    Normal,
    /// Discard supplied advanced values and re-derive them.
    RegenerateAdvanced,
}

/// Build the working [`ParameterSet`] for one request.
///
/// # Arguments
/// * `raw` - key/value pairs as submitted
/// * `mode` - advanced-field handling, from the `genadv` flag
///
/// Always succeeds; the result may be incomplete and is finished by the
/// allocator.
pub fn normalize(raw: &[(String, String)], mode: Mode) -> ParameterSet {
    let mut values = ParameterSet::new();
    for (key, default) in DEFAULT_BASIC.iter() {
        values.insert(key, *default);
    }
    values.set_error("");

    for (key, value) in raw {
        if value.is_empty() {
            continue;
        }
        if !KNOWN_KEYS.contains(&key.as_str()) {
            log::debug!("Dropping unknown form key '{key}'");
            continue;
        }
        if mode == Mode::RegenerateAdvanced && ADVANCED_KEYS.contains(&key.as_str()) {
            log::debug!("Regenerating advanced key '{key}', supplied value ignored");
            continue;
        }
        values.insert(key, value.clone());
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_no_input() {
        let values = normalize(&[], Mode::Normal);
        assert_eq!(values.get("local_interface"), Some("eth1"));
        assert_eq!(values.get("network_cidr"), Some("192.168.0.0/24"));
        assert_eq!(values.get("node_count"), Some("2"));
        assert_eq!(values.error(), "");
        // Nothing else sneaks in.
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let input = raw(&[
            ("local_interface", "p9p1"),
            ("network_cidr", "10.0.0.0/24"),
            ("node_count", "25"),
            ("dhcp_start", "10.0.0.20"),
        ]);
        let values = normalize(&input, Mode::Normal);
        assert_eq!(values.get("local_interface"), Some("p9p1"));
        assert_eq!(values.get("network_cidr"), Some("10.0.0.0/24"));
        assert_eq!(values.get("node_count"), Some("25"));
        assert_eq!(values.get("dhcp_start"), Some("10.0.0.20"));
    }

    #[test]
    fn test_unknown_keys_dropped() {
        let input = raw(&[("foo", "bar"), ("node_count", "3")]);
        let values = normalize(&input, Mode::Normal);
        assert!(!values.contains("foo"));
        assert_eq!(values.get("node_count"), Some("3"));
    }

    #[test]
    fn test_empty_values_dropped() {
        let input = raw(&[("dhcp_start", ""), ("local_interface", "")]);
        let values = normalize(&input, Mode::Normal);
        assert!(!values.contains("dhcp_start"));
        // Empty override must not clobber the default.
        assert_eq!(values.get("local_interface"), Some("eth1"));
    }

    #[test]
    fn test_regenerate_advanced_strips_advanced_keys() {
        let input = raw(&[
            ("local_interface", "p9p1"),
            ("dhcp_start", "10.0.0.20"),
            ("undercloud_admin_vip", "10.0.0.12"),
        ]);
        let values = normalize(&input, Mode::RegenerateAdvanced);
        assert_eq!(values.get("local_interface"), Some("p9p1"));
        assert!(!values.contains("dhcp_start"));
        assert!(!values.contains("undercloud_admin_vip"));
    }
}
