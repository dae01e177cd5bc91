//! Address allocation.
//!
//! Fills every derivable field of a normalized [`ParameterSet`] from the
//! provisioning CIDR, renders the config text, and validates the resolved
//! ranges. User-supplied values are never overwritten; only missing fields
//! are derived.

use crate::config::{DEFAULT_HOSTNAME, DEFAULT_MTU};
use crate::models::{AllocationPlan, Ipv4, ParameterSet};
use crate::output::render_config;
use crate::processing::validate::{validate_ranges, ValidationError};
use std::error::Error;

/// Complete a normalized parameter set.
///
/// Validation failures come back as a boxed [`ValidationError`] and leave
/// whatever fields were derived before the failing step in place. Anything
/// else (malformed CIDR, unparseable node count, out-of-range offset) is
/// fatal for the request and propagates as-is.
pub fn allocate(values: &mut ParameterSet) -> Result<(), Box<dyn Error>> {
    let network_cidr = values
        .get("network_cidr")
        .ok_or("Missing network_cidr")?
        .to_string();
    let cidr = Ipv4::new(&network_cidr)?;
    let node_count: u64 = values
        .get("node_count")
        .ok_or("Missing node_count")?
        .trim()
        .parse()
        .map_err(|e| format!("Invalid node_count: {e}"))?;

    // A node count big enough to overflow the requirement arithmetic
    // cannot fit in any CIDR either.
    let sufficient = AllocationPlan::required_addresses(node_count)
        .map_or(false, |required| cidr.addr_count() >= required);
    if !sufficient {
        log::warn!(
            "CIDR {cidr} holds {} addresses, too few for {node_count} nodes",
            cidr.addr_count()
        );
        return Err(Box::new(ValidationError::new(
            "Insufficient addresses available in provisioning CIDR",
        )));
    }

    let plan = AllocationPlan::for_nodes(node_count);
    log::debug!("Allocation plan for {node_count} nodes in {cidr}: {plan:?}");

    values.fill("hostname", || Ok(DEFAULT_HOSTNAME.to_string()))?;
    values.fill("local_ip", || {
        Ok(format!("{}/{}", cidr.nth(plan.local_ip)?, cidr.mask))
    })?;
    values.fill("local_mtu", || Ok(DEFAULT_MTU.to_string()))?;
    values.fill("network_gateway", || {
        Ok(cidr.nth(plan.gateway)?.to_string())
    })?;
    values.fill("undercloud_public_vip", || {
        Ok(cidr.nth(plan.public_vip)?.to_string())
    })?;
    values.fill("undercloud_admin_vip", || {
        Ok(cidr.nth(plan.admin_vip)?.to_string())
    })?;
    values.fill("dhcp_start", || Ok(cidr.nth(plan.dhcp_start)?.to_string()))?;
    values.fill("dhcp_end", || Ok(cidr.nth(plan.dhcp_end)?.to_string()))?;
    values.fill("inspection_start", || {
        Ok(cidr.nth(plan.inspection_start)?.to_string())
    })?;
    values.fill("inspection_end", || {
        Ok(cidr.nth(plan.inspection_end)?.to_string())
    })?;
    values.insert("masquerade_network", network_cidr);
    values.fill("undercloud_service_certificate", || Ok(String::new()))?;

    // Rendered before validation so a failed request still carries the
    // text it had resolved so far, matching the original tool.
    let config = render_config(values)?;
    values.insert("config", config.replace('\n', "<br>"));

    validate_ranges(values)?;
    Ok(())
}
