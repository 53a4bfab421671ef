// ============================================================================
// chore-list - An Observable Ordered Collection
// ============================================================================
//
// A list of chores that wraps raw text into entries on insertion and tells
// one observer about every committed change, tagged add/remove/update.
// Rendering and persistence live with the observer, not here.
// ============================================================================

#[macro_use]
mod macros;

pub mod collections;
pub mod core;
pub mod reactivity;

// Observers return anyhow results; re-exported so macro expansions and
// downstream observers agree on the version.
pub use anyhow;

// Re-export core items at crate root
pub use crate::core::constants::{DEFAULT_CAPACITY, MAX_TEXT_LEN};
pub use crate::core::error::{ListError, ListResult, ValidationError};
pub use crate::core::types::{Action, Entry, EntryValue};
pub use crate::core::validate::validate_text;

// Re-export reactivity items
pub use crate::reactivity::dispatch::Observer;
pub use crate::reactivity::wrapping::{Clock, FixedClock, SystemClock};

// Re-export collections
pub use crate::collections::{ReactiveList, ReactiveListBuilder, WeakList};

// =============================================================================
// TESTS
// =============================================================================
