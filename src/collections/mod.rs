// ============================================================================
// chore-list - Collections
// ============================================================================
//
// ReactiveList is the only collection: an ordered list of wrapped entries
// with one observer. Each mutating call reports what it changed once per
// logical action (add, remove, update), after the change is applied.
// ============================================================================

mod list;

pub use list::{ReactiveList, ReactiveListBuilder, WeakList};
