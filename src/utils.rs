use base64ct::{Base64UrlUnpadded, Encoding};

/// Encode a share as base64url (unpadded) for transport through textual
/// channels.
///
/// The encoding covers the full wire form, tag byte included; decoding
/// with [`decode_share_b64u`] restores it byte-for-byte.
pub fn encode_share_b64u(share: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(share)
}

/// Decode a share from base64url (unpadded).
///
/// No share validation happens here; a decoded byte string is only known
/// to be a well-formed share once `join_bytes` accepts it.
pub fn decode_share_b64u(s: &str) -> Result<Vec<u8>, base64ct::Error> {
    Base64UrlUnpadded::decode_vec(s)
}
