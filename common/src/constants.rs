/// Tolerance, in seconds, for accepting a candidate block.
pub const DEFAULT_ACCURACY: f64 = 10.0;

/// Refinement rounds allowed before a search is abandoned.
pub const DEFAULT_MAX_RETRIES: u64 = 15;
