//! Domain models for the undercloud wizard.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 provisioning network with CIDR notation support
//! - [`ParameterSet`] - ordered field mapping for one request
//! - [`AllocationPlan`] - address offsets carved out of the CIDR

mod ipv4;
mod params;
mod plan;

// Re-export public types
pub use ipv4::Ipv4;
pub use params::{ParameterSet, ERROR_KEY};
pub use plan::AllocationPlan;
