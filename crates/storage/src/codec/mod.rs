//! Value codec abstraction.
//!
//! Every value passing between callers and the store file goes through a
//! codec. Callers hand in logical UTF-8 text; the file holds the encoded form.
//!
//! Uses `Base64Codec` (standard alphabet, padded), so the file is always a
//! JSON object of plain ASCII strings regardless of what the values contain.
//!
//! # Usage
//!
//! ```
//! use jsonstore_storage::codec::{Base64Codec, ValueCodec};
//!
//! let codec = Base64Codec;
//! let encoded = codec.encode("hello world");
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//!
//! let decoded = codec.decode(&encoded);
//! assert_eq!(decoded, "hello world");
//! ```

mod base64;
mod traits;

pub use self::base64::Base64Codec;
pub use self::traits::ValueCodec;
