//! Immutable configuration tables.
//!
//! Defaults and key lists for the wizard. These are process-wide constants,
//! never mutated at runtime.

use lazy_static::lazy_static;

/// Extra DHCP pool addresses beyond the node count, reserved for overcloud
/// virtual IPs. May be generous for some setups.
pub const VIRTUAL_IP_RESERVE: u64 = 10;

/// Addresses used by the undercloud itself: local_ip, public_vip, admin_vip.
pub const UNDERCLOUD_IP_RESERVE: u64 = 3;

/// Default undercloud hostname when none is supplied.
pub const DEFAULT_HOSTNAME: &str = "undercloud.localdomain";

/// Default MTU on the provisioning interface.
pub const DEFAULT_MTU: &str = "1500";

/// Name of the descriptions asset loaded when no path is given.
pub const DEFAULT_DESCRIPTIONS_FILE: &str = "opt-descriptions.json";

/// Form keys that belong to the advanced section. These are stripped from
/// the request when advanced regeneration is requested so they get derived
/// from scratch.
pub const ADVANCED_KEYS: [&str; 11] = [
    "hostname",
    "local_ip",
    "dhcp_start",
    "dhcp_end",
    "inspection_start",
    "inspection_end",
    "network_gateway",
    "undercloud_public_vip",
    "undercloud_admin_vip",
    "local_mtu",
    "undercloud_service_certificate",
];

/// Form keys that belong to the basic section.
pub const BASIC_KEYS: [&str; 3] = ["local_interface", "network_cidr", "node_count"];

lazy_static! {
    /// Defaults for the basic fields of a fresh form.
    pub static ref DEFAULT_BASIC: Vec<(&'static str, &'static str)> = vec![
        ("local_interface", "eth1"),
        ("network_cidr", "192.168.0.0/24"),
        ("node_count", "2"),
    ];

    /// Every key a caller may supply. Anything else is dropped.
    pub static ref KNOWN_KEYS: Vec<&'static str> = {
        let mut keys: Vec<&'static str> = Vec::new();
        keys.extend(BASIC_KEYS);
        keys.extend(ADVANCED_KEYS);
        keys
    };
}
