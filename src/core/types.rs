// ============================================================================
// chore-list - Type Definitions
// Entries, actions, and the values accepted by index writes
// ============================================================================

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};

// =============================================================================
// ACTION
// =============================================================================

/// The kind of change a notification reports.
///
/// The set is closed: an observer never sees anything but these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Entries were inserted (push, unshift, splice insert side)
    Add,
    /// Entries left the list (pop, shift, splice delete side, clear)
    Remove,
    /// A single entry was written by index (including the append-at-`len`
    /// case) or toggled in place
    Update,
}

impl Action {
    /// The lowercase tag used by consumers (`"add"`, `"remove"`, `"update"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Update => "update",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ENTRY
// =============================================================================

/// A wrapped record stored in a [`ReactiveList`](crate::ReactiveList).
///
/// Entries are only created by the wrapping policy and are shared as
/// `Rc<Entry>`: the entry handed to an observer is the same object the list
/// stores, so identity can be checked with [`Rc::ptr_eq`].
///
/// `completed` lives in a `Cell` because toggling flips it in place without
/// replacing the entry.
pub struct Entry {
    text: String,
    completed: Cell<bool>,
    created_at: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn new(text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            text,
            completed: Cell::new(false),
            created_at,
        }
    }

    /// The text supplied at insertion time.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the entry has been marked complete.
    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }

    /// When the entry was wrapped.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flip the completed flag, returning the new value.
    ///
    /// Crate-private: the only public path is `ReactiveList::toggle_complete`,
    /// which also notifies the observer.
    pub(crate) fn toggle(&self) -> bool {
        let next = !self.completed.get();
        self.completed.set(next);
        next
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("text", &self.text)
            .field("completed", &self.completed.get())
            .field("created_at", &self.created_at.to_rfc3339())
            .finish()
    }
}

// =============================================================================
// ENTRY VALUE - What an index write accepts
// =============================================================================

/// The value written by [`ReactiveList::set`](crate::ReactiveList::set).
///
/// Raw text is wrapped into a fresh entry; an existing entry is stored as-is,
/// so writing an entry back to its own slot is a no-op.
///
/// # Example
///
/// ```
/// use chore_list::EntryValue;
///
/// let raw: EntryValue = "sweep".into();
/// assert!(matches!(raw, EntryValue::Raw(_)));
/// ```
#[derive(Debug, Clone)]
pub enum EntryValue {
    /// Text to be wrapped
    Raw(String),
    /// An entry that was already wrapped
    Entry(Rc<Entry>),
}

impl From<&str> for EntryValue {
    fn from(text: &str) -> Self {
        EntryValue::Raw(text.to_owned())
    }
}

impl From<String> for EntryValue {
    fn from(text: String) -> Self {
        EntryValue::Raw(text)
    }
}

impl From<Rc<Entry>> for EntryValue {
    fn from(entry: Rc<Entry>) -> Self {
        EntryValue::Entry(entry)
    }
}

impl From<&Rc<Entry>> for EntryValue {
    fn from(entry: &Rc<Entry>) -> Self {
        EntryValue::Entry(entry.clone())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_epoch(text: &str) -> Entry {
        Entry::new(text.to_owned(), Utc.timestamp_opt(0, 0).unwrap())
    }

    #[test]
    fn action_tags() {
        assert_eq!(Action::Add.as_str(), "add");
        assert_eq!(Action::Remove.as_str(), "remove");
        assert_eq!(Action::Update.to_string(), "update");
    }

    #[test]
    fn new_entry_is_not_completed() {
        let entry = at_epoch("wash dishes");
        assert_eq!(entry.text(), "wash dishes");
        assert!(!entry.is_completed());
        assert_eq!(entry.created_at().timestamp(), 0);
    }

    #[test]
    fn toggle_flips_in_place() {
        let entry = at_epoch("laundry");
        assert!(entry.toggle());
        assert!(entry.is_completed());
        assert!(!entry.toggle());
        assert!(!entry.is_completed());
    }

    #[test]
    fn entry_value_conversions() {
        assert!(matches!(EntryValue::from("a"), EntryValue::Raw(ref s) if s == "a"));
        assert!(matches!(EntryValue::from(String::from("b")), EntryValue::Raw(_)));

        let entry = Rc::new(at_epoch("c"));
        match EntryValue::from(&entry) {
            EntryValue::Entry(e) => assert!(Rc::ptr_eq(&e, &entry)),
            EntryValue::Raw(_) => panic!("expected an entry"),
        }
    }

    #[test]
    fn debug_format() {
        let entry = at_epoch("mop");
        let debug = format!("{:?}", entry);
        assert!(debug.contains("Entry"));
        assert!(debug.contains("mop"));
        assert!(debug.contains("completed: false"));
    }
}
