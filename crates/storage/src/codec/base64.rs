//! Base64 value codec.
//!
//! Values are stored as the standard-alphabet, padded base64 encoding of
//! their UTF-8 bytes. Decoding is lenient so files written by other tools
//! still read back:
//!
//! - URL-safe `-` and `_` are read as `+` and `/`
//! - whitespace and other characters outside the alphabet are skipped
//! - input ends at the first `=`, and padding is optional
//! - a dangling final character (fewer than 8 bits) is dropped
//! - bytes that are not UTF-8 decode to U+FFFD
//!
//! Decoding therefore never fails.

use ::base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

use super::traits::ValueCodec;

/// Engine for normalized input: no padding left, stray trailing bits allowed.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

const PADDED: GeneralPurpose = ::base64::engine::general_purpose::STANDARD;

/// Base64 codec.
///
/// # Example
///
/// ```
/// use jsonstore_storage::codec::{Base64Codec, ValueCodec};
///
/// let codec = Base64Codec;
/// assert_eq!(codec.encode("1"), "MQ==");
/// assert_eq!(codec.decode("MQ=="), "1");
/// assert_eq!(codec.decode("MQ"), "1");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl ValueCodec for Base64Codec {
    fn encode(&self, value: &str) -> String {
        PADDED.encode(value.as_bytes())
    }

    fn decode(&self, encoded: &str) -> String {
        let mut symbols = normalize(encoded);
        if symbols.len() % 4 == 1 {
            symbols.pop();
        }
        // Only alphabet symbols remain and the length is never 1 mod 4.
        let bytes = LENIENT.decode(&symbols).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// Keep the standard-alphabet symbols of `encoded` up to the first `=`.
fn normalize(encoded: &str) -> String {
    encoded
        .chars()
        .take_while(|&c| c != '=')
        .filter_map(|c| match c {
            '-' => Some('+'),
            '_' => Some('/'),
            'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => Some(c),
            _ => None,
        })
        .collect()
}
