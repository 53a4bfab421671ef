// ============================================================================
// chore-list - Core Module
// Entry types, errors, constants, and caller-side validation
// ============================================================================

pub mod constants;
pub mod error;
pub mod types;
pub mod validate;

// Re-export commonly used items
pub use constants::*;
pub use error::{ListError, ListResult, ValidationError};
pub use types::{Action, Entry, EntryValue};
pub use validate::validate_text;
