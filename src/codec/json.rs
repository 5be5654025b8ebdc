//! Structured-data adapters: [`JsonCodec`] and the serde impls.
//!
//! Human-readable serializers see the 22-character URL-safe base64 string,
//! binary ones (bincode2 and friends) see the 16 raw bytes as a fixed-size
//! tuple, so a digest costs no length prefix there.

use std::fmt::Formatter;

use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{JsonCodec, TextCodec};
use crate::digest::{Md5Digest, DIGEST_SIZE};
use crate::error::{Error, Result};

impl JsonCodec for Md5Digest {
    fn marshal_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_base64_url())?)
    }

    fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        if data.len() != Md5Digest::JSON_SIZE {
            return Err(Error::incorrect_size(Md5Digest::JSON_SIZE, data.len()));
        }
        if data[0] != b'"' || data[Md5Digest::JSON_SIZE - 1] != b'"' {
            return Err(Error::NotQuoted);
        }
        self.unmarshal_text(&data[1..Md5Digest::JSON_SIZE - 1])
    }
}

impl Serialize for Md5Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_base64_url())
        } else {
            self.as_bytes().serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Md5Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(TextVisitor)
        } else {
            <[u8; DIGEST_SIZE]>::deserialize(deserializer).map(Md5Digest::from_checksum)
        }
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = Md5Digest;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "a {}-character url-safe base64 md5 digest", Md5Digest::TEXT_SIZE)
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        self.visit_bytes(v.as_bytes())
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> std::result::Result<Self::Value, E> {
        let mut digest = Md5Digest::EMPTY;
        digest.unmarshal_text(v).map_err(E::custom)?;
        Ok(digest)
    }
}
