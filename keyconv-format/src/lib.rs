//! # keyconv format
//!
//! Conversion of hex encoded 256 bit private keys into unsigned integers.
//!
//! Input is lowercased and stripped of its "0x" marker (see [`PrefixPolicy`]),
//! checked to be exactly 64 characters and then decoded as a big-endian base 16
//! number into a [`UInt256`].
//!
//! ## Example
//!
//! ```
//! use keyconv_format::convert;
//!
//! let value = convert("0x00000000000000000000000000000000000000000000000000000000000000ff")?;
//! assert_eq!(value.to_string(), "255");
//! # Ok::<(), keyconv_format::Error>(())
//! ```

mod config;
mod convert;
mod error;
mod types;

pub use config::ConvertConfig;
pub use convert::{convert, convert_with};
pub use error::{Error, Result};
pub use types::{Hex, NormalizedHex, PrefixPolicy, UInt256, KEY_HEX_LEN};
