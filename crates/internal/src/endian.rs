//! Big-endian encoding helpers

/// Convert a u32 from native byte order to big-endian bytes
#[inline]
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Copy a big-endian integer into `dst`, left-padding with zeros.
///
/// Leading zero bytes of `src` are ignored. Returns `false` (leaving `dst`
/// zeroed) when the significant part of `src` does not fit.
pub fn copy_be_padded(src: &[u8], dst: &mut [u8]) -> bool {
    let first_nonzero = src.iter().position(|&b| b != 0).unwrap_or(src.len());
    let significant = &src[first_nonzero..];

    dst.iter_mut().for_each(|b| *b = 0);
    if significant.len() > dst.len() {
        return false;
    }

    let offset = dst.len() - significant.len();
    dst[offset..].copy_from_slice(significant);
    true
}
