// ============================================================================
// chore-list - Entry Wrapping
// Turns raw inserted text into entries
// ============================================================================
//
// Wrapping happens exactly once per inserted value, on the insert paths only.
// Removal and read paths hand back the stored Rc<Entry> untouched.
// ============================================================================

use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::core::types::{Entry, EntryValue};

// =============================================================================
// CLOCK
// =============================================================================

/// Source of `created_at` timestamps.
pub trait Clock: 'static {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time via `Utc::now()`. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always reports the same instant.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chore_list::{Clock, FixedClock};
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
/// assert_eq!(FixedClock(at).now(), at);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + 'static,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

// =============================================================================
// WRAP
// =============================================================================

/// Wrap raw text into a fresh, not-completed entry stamped by `clock`.
pub fn wrap(text: impl Into<String>, clock: &dyn Clock) -> Rc<Entry> {
    Rc::new(Entry::new(text.into(), clock.now()))
}

/// Wrap every value of `values`, preserving order.
pub fn wrap_all<I, S>(values: I, clock: &dyn Clock) -> Vec<Rc<Entry>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(|text| wrap(text, clock)).collect()
}

/// Resolve an index-write value: raw text is wrapped, entries pass through.
pub fn resolve(value: EntryValue, clock: &dyn Clock) -> Rc<Entry> {
    match value {
        EntryValue::Raw(text) => wrap(text, clock),
        EntryValue::Entry(entry) => entry,
    }
}

// =============================================================================
// TESTS
// =============================================================================
