use crate::codec::BinaryCodec;
use crate::digest::Md5Digest;
use crate::error::Result;

impl BinaryCodec for Md5Digest {
    fn marshal_binary(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
        self.set_from_slice(data)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::error::Error;

    use super::*;

    #[test]
    fn test_marshal_binary_is_the_raw_digest() {
        let digest = Md5Digest::sum_of("HelloWorld.\n");
        let data = digest.marshal_binary();

        assert_eq!(data.len(), Md5Digest::SIZE);
        assert_eq!(data.as_slice(), digest.as_bytes());

        let mut decoded = Md5Digest::default();
        decoded.unmarshal_binary(&data).unwrap();
        assert_eq!(decoded, digest);
    }

    #[test_case(0; "when empty")]
    #[test_case(15; "when one byte short")]
    #[test_case(17; "when one byte over")]
    #[test_case(32; "when given a hex sized buffer")]
    fn test_unmarshal_binary_rejects_wrong_size(len: usize) {
        let original = Md5Digest::sum_of("x");
        let mut digest = original;

        let err = digest.unmarshal_binary(&vec![0xab; len]).unwrap_err();

        assert!(matches!(err, Error::IncorrectSize { expected: 16, received } if received == len));
        assert_eq!(digest, original);
    }
}
