//! Constant values for kemseal cryptographic operations
//!
//! This crate provides the parameters shared across the kemseal crates.

#![no_std]

pub mod traditional;
pub mod utils;

pub use traditional::rsa::*;
pub use utils::symmetric::*;
