#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Nesting limit applied when no [`DecodeConfig`](crate::DecodeConfig) is given.
pub const DEFAULT_MAX_DEPTH: usize = 512;
