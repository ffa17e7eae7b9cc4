/// Decodes exactly `2 * N` hex digits into `N` big-endian bytes.
///
/// Non-ASCII input is reported as an invalid character rather than a length
/// mismatch, since callers validate the character count beforehand.
pub fn decode_hex<const N: usize>(hex: &str) -> Result<[u8; N], faster_hex::Error> {
    if !hex.is_ascii() {
        return Err(faster_hex::Error::InvalidChar);
    }
    if hex.len() != N * 2 {
        return Err(faster_hex::Error::InvalidLength(hex.len()));
    }

    let mut dst = [0; N];

    faster_hex::hex_decode(hex.as_bytes(), &mut dst)?;

    Ok(dst)
}

pub fn encode_hex(buf: &[u8]) -> String {
    format!("0x{}", faster_hex::hex_string(buf))
}
