// ============================================================================
// chore-list - Reactivity Module
// Entry wrapping and notification dispatch
// ============================================================================

pub mod dispatch;
pub mod wrapping;

// Re-export commonly used items
pub use dispatch::Observer;
pub use wrapping::{Clock, FixedClock, SystemClock};
