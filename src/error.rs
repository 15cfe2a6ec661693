#[derive(Debug)]
pub enum TshareError {
    SizeMismatch { left: usize, right: usize },
    InvalidShare(String),
    RandomGenerationFailed,
}

impl std::error::Error for TshareError {}

impl core::fmt::Display for TshareError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TshareError::SizeMismatch { left, right } => {
                write!(f, "share size mismatch (left={}, right={})", left, right)
            }
            TshareError::InvalidShare(msg) => write!(f, "invalid share: {}", msg),
            TshareError::RandomGenerationFailed => write!(f, "random generation failed"),
        }
    }
}
