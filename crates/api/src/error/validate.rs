//! Validation utilities shared by all kemseal crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate seed material
#[inline(always)]
pub fn seed(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidSeed { context });
    }
    Ok(())
}

/// Validate a public key property
#[inline(always)]
pub fn public_key(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::public_key(context, reason));
    }
    Ok(())
}

/// Validate a key generation step
#[inline(always)]
pub fn key_generation(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::key_generation(context, reason));
    }
    Ok(())
}

/// Validate decapsulation input
#[inline(always)]
pub fn decapsulation(condition: bool) -> Result<()> {
    if !condition {
        return Err(Error::DecapsulationFailed);
    }
    Ok(())
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool) -> Result<()> {
    if !is_valid {
        return Err(Error::AuthenticationFailed);
    }
    Ok(())
}

/// Validate a wire-format property
#[inline(always)]
pub fn serialization(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::serialization(context, reason));
    }
    Ok(())
}
