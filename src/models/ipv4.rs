//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for representing a provisioning network as an address
//! plus prefix length, along with the offset arithmetic the allocator uses
//! to carve addresses out of the block.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// IPv4 network block with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err("Invalid address/mask".into());
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let mask: u8 = parts[1].parse()?;
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Total number of addresses in the block, network and broadcast included.
    pub fn addr_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// Get the lowest (network) address in the block.
    pub fn network(&self) -> Result<Ipv4Addr, Box<dyn Error>> {
        cut_addr(self.addr, self.mask)
    }

    /// Address at `offset` from the network base.
    ///
    /// Offsets past the broadcast address are an error.
    pub fn nth(&self, offset: u64) -> Result<Ipv4Addr, Box<dyn Error>> {
        if offset >= self.addr_count() {
            return Err(format!("Address offset {} out of range for {}", offset, self).into());
        }
        let base = u32::from(self.network()?) as u64;
        Ok(Ipv4Addr::from((base + offset) as u32))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_addr_count() {
        assert_eq!(Ipv4::new("192.0.2.0/24").unwrap().addr_count(), 256);
        assert_eq!(Ipv4::new("10.0.0.0/16").unwrap().addr_count(), 65536);
        assert_eq!(Ipv4::new("10.0.0.4/30").unwrap().addr_count(), 4);
        assert_eq!(Ipv4::new("10.0.0.1/32").unwrap().addr_count(), 1);
        assert_eq!(Ipv4::new("0.0.0.0/0").unwrap().addr_count(), 1u64 << 32);
    }

    #[test]
    fn test_nth() {
        let cidr = Ipv4::new("192.0.2.0/24").unwrap();
        assert_eq!(cidr.nth(0).unwrap(), Ipv4Addr::new(192, 0, 2, 0));
        assert_eq!(cidr.nth(1).unwrap(), Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(cidr.nth(4).unwrap(), Ipv4Addr::new(192, 0, 2, 4));
        assert_eq!(cidr.nth(255).unwrap(), Ipv4Addr::new(192, 0, 2, 255));
        assert!(cidr.nth(256).is_err());

        // Offsets are relative to the network base even when the address
        // part of the CIDR is not the base itself.
        let cidr = Ipv4::new("10.0.0.42/24").unwrap();
        assert_eq!(cidr.nth(1).unwrap(), Ipv4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn test_new_rejects_garbage() {
        assert!(Ipv4::new("not-a-cidr").is_err());
        assert!(Ipv4::new("10.0.0.0").is_err());
        assert!(Ipv4::new("10.0.0.0/33").is_err());
        assert!(Ipv4::new("300.0.0.0/24").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let cidr = Ipv4::new(" 192.168.0.0/24 ").unwrap();
        assert_eq!(cidr.to_string(), "192.168.0.0/24");
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
        assert!(ip2 >= ip3);
    }
}
