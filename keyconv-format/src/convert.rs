use crate::types::util::decode_hex;
use crate::{ConvertConfig, Error, NormalizedHex, Result, UInt256, KEY_HEX_LEN};

/// Converts a hex encoded 256 bit key into its integer value using the
/// default [`ConvertConfig`].
///
/// The input is not trimmed. Case is ignored and "0x" is stripped anywhere
/// in the string.
pub fn convert(input: &str) -> Result<UInt256> {
    convert_with(input, &ConvertConfig::default())
}

/// Converts a hex encoded 256 bit key into its integer value.
///
/// Fails with [`Error::InvalidLength`] unless the normalized input is exactly
/// 64 characters, and with [`Error::DecodeHex`] if any of them is not a hex digit.
pub fn convert_with(input: &str, config: &ConvertConfig) -> Result<UInt256> {
    let normalized = NormalizedHex::new(input, config.prefix_policy);
    let len = normalized.len();

    log::trace!(
        "normalized {} input characters to {} using prefix policy \"{}\"",
        input.chars().count(),
        len,
        config.prefix_policy
    );

    if len != KEY_HEX_LEN {
        log::debug!("rejecting key input of {} characters", len);
        return Err(Error::InvalidLength { got: len });
    }

    let bytes = decode_hex::<32>(normalized.as_str()).map_err(Error::DecodeHex)?;

    Ok(UInt256::from_be_bytes(bytes))
}
