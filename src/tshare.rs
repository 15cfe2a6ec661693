//! (2,3) threshold secret sharing over byte strings.
//!
//! A secret is split into three tagged shares so that any two of them
//! recover the secret exactly, while a single share reveals nothing about
//! the content (only its length). Per secret byte `x` and fresh random
//! mask byte `y`:
//!
//! ```text
//! x  = [x7 x6 x5 x4 x3 x2 x1 x0]
//! s0 = [ 0  0  0  0 x7 x6 x5 x4] ^ y
//! s1 = [x3 x2 x1 x0  0  0  0  0] ^ y
//! s2 = [x7 x6 x5 x4 x3 x2 x1 x0] ^ y
//! ```
//!
//! XOR-ing the payloads of any two shares cancels `y`, and each pairwise
//! recovery routine undoes the remaining nibble rearrangement.
//!
//! The first byte of each share is a tag denoting which share it is.

use getrandom::getrandom;
use zeroize::Zeroizing;

use crate::config::SHARE_TAG_LEN;
use crate::error::TshareError;

/// Identifies which of the three split outputs a share is.
///
/// The discriminant is the tag byte on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ShareTag {
    /// Payload holds the masked high nibble of each secret byte.
    High = 0x00,
    /// Payload holds the masked low nibble of each secret byte.
    Low = 0x01,
    /// Payload holds the masked full secret byte.
    Full = 0x02,
}

impl ShareTag {
    /// Parse a wire tag byte. Returns `None` for anything outside {0, 1, 2}.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(ShareTag::High),
            0x01 => Some(ShareTag::Low),
            0x02 => Some(ShareTag::Full),
            _ => None,
        }
    }

    /// The wire tag byte.
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Split a secret into three tagged shares.
///
/// Accepts any byte sequence, including empty; `&str` input is treated as
/// its UTF-8 bytes. The mask is drawn fresh from the operating system
/// CSPRNG on every call and wiped once the shares are built.
///
/// Returns the shares in tag order `[s0, s1, s2]`, each of length
/// `secret.len() + 1`. Fails only if the CSPRNG fails.
pub fn split_bytes(secret: impl AsRef<[u8]>) -> Result<[Vec<u8>; 3], TshareError> {
    let secret = secret.as_ref();
    let n = secret.len();

    let mut mask = vec![0u8; n];
    getrandom(&mut mask).map_err(|_| TshareError::RandomGenerationFailed)?;
    let mask = Zeroizing::new(mask);

    let mut s0 = Vec::with_capacity(n + SHARE_TAG_LEN);
    let mut s1 = Vec::with_capacity(n + SHARE_TAG_LEN);
    let mut s2 = Vec::with_capacity(n + SHARE_TAG_LEN);
    s0.push(ShareTag::High.as_byte());
    s1.push(ShareTag::Low.as_byte());
    s2.push(ShareTag::Full.as_byte());

    for (&x, &y) in secret.iter().zip(mask.iter()) {
        s0.push(((x & 0xf0) >> 4) ^ y);
        s1.push(((x & 0x0f) << 4) ^ y);
        s2.push(x ^ y);
    }

    Ok([s0, s1, s2])
}

/// Recover the secret from any two tagged shares.
///
/// Argument order does not matter; the shares are reordered by tag before
/// dispatch. Validation happens before any byte-level processing, so the
/// result is either the exact original secret or an error, never partial
/// output.
///
/// # Errors
///
/// * [`TshareError::SizeMismatch`] if the shares differ in length.
/// * [`TshareError::InvalidShare`] if either share lacks a tag byte, a tag
///   is outside {0, 1, 2}, or both shares carry the same tag.
pub fn join_bytes(a: &[u8], b: &[u8]) -> Result<Vec<u8>, TshareError> {
    if a.len() < SHARE_TAG_LEN || b.len() < SHARE_TAG_LEN {
        return Err(TshareError::InvalidShare("missing tag byte".to_string()));
    }
    if a.len() != b.len() {
        return Err(TshareError::SizeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let tag_a = parse_tag(a[0])?;
    let tag_b = parse_tag(b[0])?;

    // Reorder so the numerically smaller tag comes first.
    let (tag_a, tag_b, a, b) = if tag_a.as_byte() <= tag_b.as_byte() {
        (tag_a, tag_b, a, b)
    } else {
        (tag_b, tag_a, b, a)
    };

    let recover: fn(u8) -> u8 = match (tag_a, tag_b) {
        (ShareTag::High, ShareTag::Low) => recover_high_low,
        (ShareTag::High, ShareTag::Full) => recover_high_full,
        (ShareTag::Low, ShareTag::Full) => recover_low_full,
        _ => {
            return Err(TshareError::InvalidShare(
                "shares carry the same tag".to_string(),
            ))
        }
    };

    let secret = a[SHARE_TAG_LEN..]
        .iter()
        .zip(&b[SHARE_TAG_LEN..])
        .map(|(&pa, &pb)| recover(pa ^ pb))
        .collect();

    Ok(secret)
}

fn parse_tag(byte: u8) -> Result<ShareTag, TshareError> {
    ShareTag::from_byte(byte)
        .ok_or_else(|| TshareError::InvalidShare(format!("unknown tag byte {:#04x}", byte)))
}

/// Recovery for the (s0, s1) pair.
///
/// ```text
/// c = s0 ^ s1 = [x3 x2 x1 x0 x7 x6 x5 x4]
/// x = [c3 c2 c1 c0 0 0 0 0] | [0 0 0 0 c7 c6 c5 c4]
/// ```
fn recover_high_low(c: u8) -> u8 {
    ((c << 4) & 0xf0) | ((c >> 4) & 0x0f)
}

/// Recovery for the (s0, s2) pair.
///
/// ```text
/// c = s0 ^ s2 = [x7 x6 x5 x4 x3 x2 x1 x0] ^ [0 0 0 0 x7 x6 x5 x4]
/// x = [0 0 0 0 c7 c6 c5 c4] ^ c
/// ```
fn recover_high_full(c: u8) -> u8 {
    ((c & 0xf0) >> 4) ^ c
}

/// Recovery for the (s1, s2) pair.
///
/// ```text
/// c = s1 ^ s2 = [x7 x6 x5 x4 x3 x2 x1 x0] ^ [x3 x2 x1 x0 0 0 0 0]
/// x = [c3 c2 c1 c0 0 0 0 0] ^ c
/// ```
fn recover_low_full(c: u8) -> u8 {
    ((c & 0x0f) << 4) ^ c
}
