//! Library configuration and scheme parameters.

/// Number of shares produced by a split.
pub const SHARE_COUNT: usize = 3;

/// Number of shares required to recover a secret.
pub const RECOVERY_THRESHOLD: usize = 2;

/// Length (in bytes) of the tag prefix on every share.
pub const SHARE_TAG_LEN: usize = 1;
