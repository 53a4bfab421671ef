// ============================================================================
// chore-list - Constants
// ============================================================================

/// Longest chore text (in characters, after trimming) accepted by
/// [`validate_text`](crate::validate_text).
pub const MAX_TEXT_LEN: usize = 100;

/// Capacity reserved by a list built without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 0;
