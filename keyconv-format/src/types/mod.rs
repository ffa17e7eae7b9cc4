mod hex;
mod normalized_hex;
mod uint256;
pub(crate) mod util;

pub use hex::Hex;
pub use normalized_hex::{NormalizedHex, PrefixPolicy};
pub use uint256::UInt256;

/// Number of hex digits in a 256 bit key.
pub const KEY_HEX_LEN: usize = 64;
