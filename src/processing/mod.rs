//! Request processing logic.
//!
//! This module contains the business logic for one allocation request:
//! - [`normalize`] - defaults merge and key filtering
//! - [`allocate`] - address derivation from the provisioning CIDR
//! - [`validate`] - range ordering checks

mod allocate;
mod normalize;
mod validate;

// Re-export public functions
pub use allocate::allocate;
pub use normalize::{normalize, Mode};
pub use validate::{validate_ranges, ValidationError};
