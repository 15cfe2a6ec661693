//! (2,3) threshold secret sharing library.
//!
//! This crate contains a small, self-contained implementation of (2,3)
//! threshold secret sharing for splitting secrets into three shares. None of
//! the shares alone give away any information about the secret (other than
//! the length) but any combination of two shares is able to fully recover it.

pub mod config;
pub mod error;
pub mod tshare;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use crate::error::TshareError;
pub use crate::tshare::{join_bytes, split_bytes, ShareTag};
pub use crate::utils::{decode_share_b64u, encode_share_b64u};
