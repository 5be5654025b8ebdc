//! Boundary adapters mapping an [`Md5Digest`](crate::Md5Digest) to and from
//! wire representations.
//!
//! Each adapter checks the input length before decoding anything and only
//! assigns to the target once the whole input has been validated.

use crate::error::Result;

pub mod binary;
pub mod json;
pub mod text;

/// Raw 16-byte form, no header or length prefix.
pub trait BinaryCodec {
    fn marshal_binary(&self) -> Vec<u8>;
    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()>;
}

/// Unquoted URL-safe base64 without padding.
pub trait TextCodec {
    fn marshal_text(&self) -> Vec<u8>;
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()>;
}

/// The text form as a quoted JSON string literal.
pub trait JsonCodec {
    fn marshal_json(&self) -> Result<Vec<u8>>;
    fn unmarshal_json(&mut self, data: &[u8]) -> Result<()>;
}
