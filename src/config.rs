use crate::DEFAULT_MAX_DEPTH;

/// Options for a decode session.
///
/// ```
/// use na_marshal::DecodeConfig;
///
/// let config = DecodeConfig::default().max_depth(32).strict_dicts(true);
/// assert_eq!(config.max_depth, 32);
/// assert!(config.strict_dicts);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// How many dictionaries may be open at once before decoding fails with
    /// [`Error::RecursionLimitExceeded`](crate::Error::RecursionLimitExceeded).
    pub max_depth: usize,
    /// When set, running out of input inside a dictionary is reported as
    /// [`Error::UnterminatedDict`](crate::Error::UnterminatedDict) instead of
    /// a plain end of input.
    pub strict_dicts: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_dicts: false,
        }
    }
}

impl DecodeConfig {
    #[inline]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub const fn strict_dicts(mut self, strict_dicts: bool) -> Self {
        self.strict_dicts = strict_dicts;
        self
    }
}
