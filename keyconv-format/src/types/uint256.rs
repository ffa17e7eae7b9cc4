use super::util::encode_hex;
use crate::{convert, Error, Hex};
use ruint::aliases::U256;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

/// Unsigned 256-bit integer decoded from a hex private key.
///
/// `Display` prints the value in base 10. Serde and [`Hex`] use the
/// zero-padded `0x` form with 64 digits.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
    derive_more::Display,
)]
pub struct UInt256(U256);

impl UInt256 {
    pub const ZERO: Self = Self(U256::ZERO);
    pub const MAX: Self = Self(U256::MAX);

    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(U256::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes::<32>()
    }
}

impl FromStr for UInt256 {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        convert(value)
    }
}

struct UInt256Visitor;

impl<'de> Visitor<'de> for UInt256Visitor {
    type Value = UInt256;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("hex string for a 256 bit integer")
    }

    fn visit_str<E>(self, value: &str) -> StdResult<Self::Value, E>
    where
        E: de::Error,
    {
        UInt256::from_str(value).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(UInt256Visitor)
    }
}

impl Serialize for UInt256 {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode_hex())
    }
}

impl Hex for UInt256 {
    fn encode_hex(&self) -> String {
        encode_hex(&self.to_be_bytes())
    }

    fn decode_hex(hex: &str) -> crate::Result<Self> {
        Self::from_str(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::UInt256;
    use crate::Hex;
    use hex_literal::hex;
    use ruint::aliases::U256;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    const ZERO_HEX: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";
    const MAX_HEX: &str = "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

    #[test]
    fn test_serde_zero() {
        assert_eq!(UInt256::default(), UInt256::ZERO);

        assert_tokens(&UInt256::ZERO, &[Token::Str(ZERO_HEX)]);
    }

    #[test]
    fn test_serde_max() {
        assert_tokens(&UInt256::MAX, &[Token::Str(MAX_HEX)]);
    }

    #[test]
    fn test_deserialize_uppercase() {
        assert_de_tokens(
            &UInt256::from(U256::from(19u64)),
            &[Token::Str(
                "0X0000000000000000000000000000000000000000000000000000000000000013",
            )],
        );
    }

    #[test]
    #[should_panic(expected = "Invalid private key length")]
    fn test_deserialize_short() {
        assert_de_tokens(&UInt256::ZERO, &[Token::Str("0x13")]);
    }

    #[test]
    fn test_display_is_decimal() {
        assert_eq!(UInt256::from(U256::from(255u64)).to_string(), "255");
        assert_eq!(
            UInt256::MAX.to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }

    #[test]
    fn test_be_bytes() {
        let bytes = hex!("00000000000000000000000000000000000000000000000000000000deadbeef");
        let value = UInt256::from_be_bytes(bytes);

        assert_eq!(*value, U256::from(0xdeadbeefu64));
        assert_eq!(value.to_be_bytes(), bytes);
    }

    #[test]
    fn test_hex_pads_to_64_digits() {
        let value = UInt256::from(U256::from(0x42u64));
        assert_eq!(
            value.encode_hex(),
            "0x0000000000000000000000000000000000000000000000000000000000000042"
        );
        assert_eq!(UInt256::decode_hex(&value.encode_hex()).unwrap(), value);
    }
}
