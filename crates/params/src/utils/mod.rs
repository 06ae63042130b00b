//! Constant values shared by the symmetric layer

pub mod symmetric;
