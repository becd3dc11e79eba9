//! Conversion between subset values and their fixed-width bitstrings.
//!
//! A bitstring of width `n` describes a subset of the vertices of the path graph on `n`
//! nodes: the character at position `i` is `'1'` iff vertex `i` is selected. The value of a
//! bitstring is its base-2 interpretation, i.e. position `0` is the most significant bit.

use crate::errors::{PathSetError, Result};

/// Largest supported width; ensures that `2^width` fits into a `u64`.
pub const MAX_WIDTH: u32 = 63;

/// Returns the number of bitstrings of the given width, i.e. `2^width`.
pub fn number_of_subsets(width: u32) -> Result<u64> {
    check_width(width)?;
    Ok(1u64 << width)
}

pub(crate) fn check_width(width: u32) -> Result<()> {
    if width == 0 {
        return Err(PathSetError::InvalidArgument(
            "width must be positive".to_string(),
        ));
    }
    if width > MAX_WIDTH {
        return Err(PathSetError::InvalidArgument(format!(
            "width {width} exceeds the maximum of {MAX_WIDTH}"
        )));
    }
    Ok(())
}

/// Checks that `bits` is a non-empty string over `{'0', '1'}`.
///
/// # Example
/// ```
/// use pathdom::encoding::validate_bitstring;
/// assert!(validate_bitstring("0110").is_ok());
/// assert!(validate_bitstring("01a0").is_err());
/// assert!(validate_bitstring("").is_err());
/// ```
pub fn validate_bitstring(bits: &str) -> Result<()> {
    if bits.is_empty() {
        return Err(PathSetError::empty_input());
    }

    match bits.chars().enumerate().find(|&(_, c)| c != '0' && c != '1') {
        Some((position, c)) => Err(PathSetError::InvalidFormat {
            position,
            found: Some(c),
        }),
        None => Ok(()),
    }
}

/// Returns the base-2 representation of `value` left-padded with `'0'` to exactly `width`
/// characters.
///
/// # Example
/// ```
/// use pathdom::encoding::encode;
/// assert_eq!(encode(18, 5).unwrap(), "10010");
/// assert_eq!(encode(0, 3).unwrap(), "000");
/// assert!(encode(8, 3).is_err());
/// ```
pub fn encode(value: u64, width: u32) -> Result<String> {
    check_width(width)?;
    if value >> width != 0 {
        return Err(PathSetError::OutOfRange { value, width });
    }

    Ok(encode_unchecked(value, width))
}

/// Caller guarantees `value < 2^width`.
pub(crate) fn encode_unchecked(value: u64, width: u32) -> String {
    debug_assert!(width <= MAX_WIDTH && value >> width == 0);
    format!("{value:0width$b}", width = width as usize)
}

/// Parses a bitstring as a base-2 number.
///
/// # Example
/// ```
/// use pathdom::encoding::decode;
/// assert_eq!(decode("10010").unwrap(), 18);
/// assert_eq!(decode("0000").unwrap(), 0);
/// assert!(decode("102").is_err());
/// ```
pub fn decode(bits: &str) -> Result<u64> {
    validate_bitstring(bits)?;
    if bits.len() > MAX_WIDTH as usize {
        return Err(PathSetError::InvalidArgument(format!(
            "bitstring of length {} exceeds the maximum width of {MAX_WIDTH}",
            bits.len()
        )));
    }

    Ok(bits
        .bytes()
        .fold(0u64, |acc, b| (acc << 1) | (b == b'1') as u64))
}
