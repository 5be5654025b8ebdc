use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::codec::TextCodec;
use crate::digest::Md5Digest;
use crate::error::{Error, Result};

impl TextCodec for Md5Digest {
    fn marshal_text(&self) -> Vec<u8> {
        self.to_base64_url().into_bytes()
    }

    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        // reject before running the decoder
        if text.len() != Md5Digest::TEXT_SIZE {
            return Err(Error::incorrect_size(Md5Digest::TEXT_SIZE, text.len()));
        }
        self.set_from_slice(&URL_SAFE_NO_PAD.decode(text)?)
    }
}
