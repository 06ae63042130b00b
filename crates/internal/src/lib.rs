//! Internal utilities shared by the kemseal crates
//!
//! Nothing in here is part of the public API contract; the helpers are
//! re-exported by the crates that need them.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_eq_choice};
pub use endian::{copy_be_padded, u32_to_be_bytes};
