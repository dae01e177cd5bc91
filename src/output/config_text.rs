//! Rendering of the generated undercloud.conf text.

use crate::models::ParameterSet;
use std::error::Error;

/// Substitute every resolved value into the fixed config template.
///
/// `discovery_iprange` repeats the inspection range under its deprecated
/// name for compatibility with older installer versions.
pub fn render_config(values: &ParameterSet) -> Result<String, Box<dyn Error>> {
    let get = |key: &str| -> Result<&str, Box<dyn Error>> {
        values
            .get(key)
            .ok_or_else(|| format!("Missing config field {key}").into())
    };

    Ok(format!(
        "[DEFAULT]\n\
         undercloud_hostname = {hostname}\n\
         local_interface = {local_interface}\n\
         local_mtu = {local_mtu}\n\
         network_cidr = {network_cidr}\n\
         masquerade_network = {masquerade_network}\n\
         local_ip = {local_ip}\n\
         network_gateway = {network_gateway}\n\
         undercloud_public_vip = {undercloud_public_vip}\n\
         undercloud_admin_vip = {undercloud_admin_vip}\n\
         undercloud_service_certificate = {undercloud_service_certificate}\n\
         dhcp_start = {dhcp_start}\n\
         dhcp_end = {dhcp_end}\n\
         inspection_iprange = {inspection_start},{inspection_end}\n\
         discovery_iprange = {inspection_start},{inspection_end}\n",
        hostname = get("hostname")?,
        local_interface = get("local_interface")?,
        local_mtu = get("local_mtu")?,
        network_cidr = get("network_cidr")?,
        masquerade_network = get("masquerade_network")?,
        local_ip = get("local_ip")?,
        network_gateway = get("network_gateway")?,
        undercloud_public_vip = get("undercloud_public_vip")?,
        undercloud_admin_vip = get("undercloud_admin_vip")?,
        undercloud_service_certificate = get("undercloud_service_certificate")?,
        dhcp_start = get("dhcp_start")?,
        dhcp_end = get("dhcp_end")?,
        inspection_start = get("inspection_start")?,
        inspection_end = get("inspection_end")?,
    ))
}
