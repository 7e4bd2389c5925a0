//! Positional encoders for identifier values.
//!
//! Each encoder renders the identifier's big-endian integer value in a
//! fixed alphabet, most significant digit first, with no padding. Zero
//! encodes as the alphabet's first digit.

use num_bigint::BigUint;
use std::fmt;
use std::str::FromStr;

use crate::error::{IdError, Result};

const BASE16_DIGITS: &[u8] = b"0123456789abcdef";
const BASE62_DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const BASE94_DIGITS: &[u8] = b"!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// A textual encoding for identifier values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Hexadecimal, lower case.
    Base16,
    /// Digits, then upper case, then lower case letters.
    Base62,
    /// Every printable ASCII character except space.
    Base94,
}

impl Encoding {
    /// The numeric base.
    pub const fn base(&self) -> u32 {
        self.digits().len() as u32
    }

    /// The alphabet, in digit order.
    pub const fn digits(&self) -> &'static [u8] {
        match self {
            Encoding::Base16 => BASE16_DIGITS,
            Encoding::Base62 => BASE62_DIGITS,
            Encoding::Base94 => BASE94_DIGITS,
        }
    }

    /// Name accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Encoding::Base16 => "base16",
            Encoding::Base62 => "base62",
            Encoding::Base94 => "base94",
        }
    }

    /// Encode `value` in this alphabet.
    pub fn encode(&self, value: &BigUint) -> String {
        let digits = self.digits();
        value
            .to_radix_be(self.base())
            .into_iter()
            .map(|d| digits[d as usize] as char)
            .collect()
    }

    /// Decode a string produced by [`Encoding::encode`].
    ///
    /// Base16 input is accepted in either case.
    pub fn decode(&self, s: &str) -> Result<BigUint> {
        if s.is_empty() {
            return Err(IdError::InvalidEncoding(format!(
                "empty {} string",
                self.name()
            )));
        }

        let digits = self.digits();
        let mut values = Vec::with_capacity(s.len());
        for c in s.chars() {
            let c = match self {
                Encoding::Base16 => c.to_ascii_lowercase(),
                _ => c,
            };
            let position = u8::try_from(c)
                .ok()
                .and_then(|b| digits.iter().position(|&d| d == b))
                .ok_or_else(|| {
                    IdError::InvalidEncoding(format!("{c:?} is not a {} digit", self.name()))
                })?;
            values.push(position as u8);
        }

        BigUint::from_radix_be(&values, self.base())
            .ok_or_else(|| IdError::InvalidEncoding(format!("malformed {} string", self.name())))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base16" | "hex" => Ok(Encoding::Base16),
            "base62" => Ok(Encoding::Base62),
            "base94" => Ok(Encoding::Base94),
            other => Err(IdError::InvalidEncoding(format!("unknown encoding: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Encoding::Base16.base(), 16);
        assert_eq!(Encoding::Base62.base(), 62);
        assert_eq!(Encoding::Base94.base(), 94);
        assert_eq!(Encoding::Base94.digits()[0], b'!');
        assert_eq!(Encoding::Base94.digits()[93], b'~');
    }

    #[test]
    fn test_base16_small_values() {
        let enc = Encoding::Base16;
        assert_eq!(enc.encode(&BigUint::from(0u32)), "0");
        assert_eq!(enc.encode(&BigUint::from(15u32)), "f");
        assert_eq!(enc.encode(&BigUint::from(255u32)), "ff");

        assert_eq!(enc.decode("0").unwrap(), BigUint::from(0u32));
        assert_eq!(enc.decode("f").unwrap(), BigUint::from(15u32));
        assert_eq!(enc.decode("FF").unwrap(), BigUint::from(255u32));
    }

    #[test]
    fn test_base62_values() {
        let enc = Encoding::Base62;
        assert_eq!(enc.encode(&BigUint::from(61u32)), "z");
        assert_eq!(enc.encode(&BigUint::from(62u32)), "10");
        assert_eq!(enc.decode("Z").unwrap(), BigUint::from(35u32));
    }

    #[test]
    fn test_decode_rejects_foreign_digits() {
        assert!(matches!(
            Encoding::Base16.decode("fg"),
            Err(IdError::InvalidEncoding(_))
        ));
        assert!(matches!(
            Encoding::Base62.decode("a-b"),
            Err(IdError::InvalidEncoding(_))
        ));
        assert!(matches!(
            Encoding::Base94.decode("a b"),
            Err(IdError::InvalidEncoding(_))
        ));
        assert!(Encoding::Base62.decode("").is_err());
    }

    #[test]
    fn test_large_value_roundtrip() {
        let value = BigUint::from_bytes_be(&[0xff; 20]);
        for enc in [Encoding::Base16, Encoding::Base62, Encoding::Base94] {
            let text = enc.encode(&value);
            assert_eq!(enc.decode(&text).unwrap(), value, "{enc}");
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("hex".parse::<Encoding>().unwrap(), Encoding::Base16);
        assert_eq!("Base62".parse::<Encoding>().unwrap(), Encoding::Base62);
        assert!("base64".parse::<Encoding>().is_err());
    }
}
