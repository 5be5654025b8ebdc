//! A 128-bit MD5 digest value type.
//!
//! [`Md5Digest`] converts losslessly between the raw 16 bytes, lowercase hex,
//! URL-safe and standard base64 (both unpadded) and a pair of little-endian
//! 64-bit integers. The [`codec`] module adapts it to binary, text and JSON
//! wire forms, including serde.
//!
//! ```
//! use md5_digest::codec::JsonCodec;
//! use md5_digest::Md5Digest;
//!
//! let digest = Md5Digest::sum_of("HelloWorld.\n");
//! assert_eq!(digest.to_hex(), "902f2e789968b3984efdd2b66bc8e7e0");
//! assert_eq!(digest.to_base64_url(), "kC8ueJlos5hO_dK2a8jn4A");
//! assert_eq!(digest.marshal_json().unwrap(), b"\"kC8ueJlos5hO_dK2a8jn4A\"");
//!
//! let parsed: Md5Digest = "kC8ueJlos5hO_dK2a8jn4A".parse().unwrap();
//! assert_eq!(parsed, digest);
//! ```

pub mod codec;
pub mod digest;
pub mod error;
pub mod strong_hash;

pub use digest::Md5Digest;
pub use error::{Error, Result};
