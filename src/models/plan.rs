//! Allocation plan: fixed offsets carved out of the provisioning CIDR.

use crate::config::{UNDERCLOUD_IP_RESERVE, VIRTUAL_IP_RESERVE};

/// Offsets from the network base for every derivable address, for one node
/// count. Offsets are only defaults; user-supplied values take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPlan {
    /// Undercloud local IP (also the default gateway).
    pub local_ip: u64,
    /// Network gateway, same address as `local_ip` unless overridden.
    pub gateway: u64,
    /// Public service virtual IP.
    pub public_vip: u64,
    /// Admin service virtual IP.
    pub admin_vip: u64,
    /// First address of the DHCP pool.
    pub dhcp_start: u64,
    /// Last address of the DHCP pool.
    pub dhcp_end: u64,
    /// First address of the introspection pool.
    pub inspection_start: u64,
    /// Last address of the introspection pool.
    pub inspection_end: u64,
}

impl AllocationPlan {
    /// Lay out the pools for `node_count` nodes.
    ///
    /// The DHCP pool is padded with [`VIRTUAL_IP_RESERVE`] extra addresses
    /// beyond the node count to leave room for overcloud virtual IPs.
    ///
    /// Offsets saturate instead of overflowing for absurd node counts;
    /// callers must check [`AllocationPlan::required_addresses`] against the
    /// CIDR first, which rejects any count the offsets cannot represent.
    /// Zero nodes inverts the introspection pool (start past end); the range
    /// validation downstream rejects that layout.
    pub fn for_nodes(node_count: u64) -> AllocationPlan {
        let dhcp_start = 1 + UNDERCLOUD_IP_RESERVE;
        let dhcp_end = dhcp_start
            .saturating_add(node_count)
            .saturating_add(VIRTUAL_IP_RESERVE)
            - 1;
        let inspection_start = dhcp_end.saturating_add(1);
        let inspection_end = inspection_start.saturating_add(node_count) - 1;
        AllocationPlan {
            local_ip: 1,
            gateway: 1,
            public_vip: 2,
            admin_vip: 3,
            dhcp_start,
            dhcp_end,
            inspection_start,
            inspection_end,
        }
    }

    /// Smallest CIDR size that can hold the layout for `node_count` nodes:
    /// node_count doubled for the DHCP and introspection pools, plus the
    /// virtual IP reserve and the undercloud-internal addresses.
    ///
    /// None when the count overflows the arithmetic; no CIDR can hold such
    /// a layout.
    pub fn required_addresses(node_count: u64) -> Option<u64> {
        node_count
            .checked_mul(2)?
            .checked_add(VIRTUAL_IP_RESERVE + UNDERCLOUD_IP_RESERVE)
    }
}
