// ============================================================================
// chore-list - ReactiveList
// An ordered list of entries that reports every committed change
// ============================================================================

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::core::constants::DEFAULT_CAPACITY;
use crate::core::error::{ListError, ListResult};
use crate::core::types::{Action, Entry, EntryValue};
use crate::reactivity::dispatch::{Change, Dispatcher, Observer};
use crate::reactivity::wrapping::{Clock, SystemClock, resolve, wrap_all};

// =============================================================================
// REACTIVE LIST
// =============================================================================

/// An observable ordered list of [`Entry`] records.
///
/// Every mutating operation applies its change to the backing sequence,
/// releases it, and then calls the observer once per logical action:
///
/// | Operation | Notification |
/// |---|---|
/// | `push`, `unshift` | `Add` with the new entries |
/// | `pop`, `shift` | `Remove` with the removed entry |
/// | `splice` | `Remove` with the removed entries, then `Add` with the inserted ones |
/// | `set` | `Update` with the new entry |
/// | `clear` | `Remove` with the previous contents |
/// | `toggle_complete` | `Update` with the toggled entry |
///
/// Operations that leave the list unchanged never call the observer.
///
/// `ReactiveList` is a cheap handle: clones share the same entries and
/// observer. The observer may call back into the list; nested notifications
/// complete before the outer call continues.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use chore_list::{Action, Entry, ReactiveList};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let seen_clone = seen.clone();
///
/// let chores = ReactiveList::new(move |action: Action, entries: &[Rc<Entry>]| {
///     seen_clone.borrow_mut().push((action, entries.len()));
///     Ok(())
/// });
///
/// chores.push(["wash dishes", "take out trash"]).unwrap();
/// chores.toggle_complete(0).unwrap();
/// chores.clear().unwrap();
/// chores.clear().unwrap(); // already empty: no notification
///
/// assert_eq!(
///     *seen.borrow(),
///     vec![(Action::Add, 2), (Action::Update, 1), (Action::Remove, 2)]
/// );
/// ```
#[derive(Clone)]
pub struct ReactiveList {
    inner: Rc<ListInner>,
}

/// A non-owning reference to a [`ReactiveList`].
///
/// Observers that mutate their own list hold one of these (see
/// [`ReactiveList::new_cyclic`]) so the list can still be freed.
#[derive(Clone)]
pub struct WeakList {
    inner: Weak<ListInner>,
}

struct ListInner {
    /// The backing sequence. Never borrowed across an observer call.
    data: RefCell<Vec<Rc<Entry>>>,

    dispatcher: Dispatcher,

    clock: Box<dyn Clock>,
}

impl ListInner {
    fn new(observer: Rc<dyn Observer>, clock: Box<dyn Clock>, capacity: usize) -> Self {
        Self {
            data: RefCell::new(Vec::with_capacity(capacity)),
            dispatcher: Dispatcher::new(observer),
            clock,
        }
    }
}

impl ReactiveList {
    /// Create an empty list bound to `observer`.
    pub fn new<F>(observer: F) -> Self
    where
        F: Fn(Action, &[Rc<Entry>]) -> anyhow::Result<()> + 'static,
    {
        Self::with_observer(observer)
    }

    /// Create an empty list bound to any [`Observer`] implementation.
    pub fn with_observer(observer: impl Observer) -> Self {
        Self {
            inner: Rc::new(ListInner::new(
                Rc::new(observer),
                Box::new(SystemClock),
                DEFAULT_CAPACITY,
            )),
        }
    }

    /// Create a list whose observer holds a weak reference back to it.
    ///
    /// # Example
    ///
    /// ```
    /// use std::rc::Rc;
    /// use chore_list::{Action, Entry, ReactiveList, WeakList};
    ///
    /// // Keep at most two chores: every add evicts from the front.
    /// let chores = ReactiveList::new_cyclic(|weak: &WeakList| {
    ///     let weak = weak.clone();
    ///     move |action: Action, _: &[Rc<Entry>]| -> chore_list::anyhow::Result<()> {
    ///         if let (Action::Add, Some(list)) = (action, weak.upgrade()) {
    ///             while list.len() > 2 {
    ///                 list.shift()?;
    ///             }
    ///         }
    ///         Ok(())
    ///     }
    /// });
    ///
    /// chores.push(["a", "b", "c"]).unwrap();
    /// assert_eq!(chores.texts(), ["b", "c"]);
    /// ```
    pub fn new_cyclic<F, O>(make_observer: F) -> Self
    where
        F: FnOnce(&WeakList) -> O,
        O: Fn(Action, &[Rc<Entry>]) -> anyhow::Result<()> + 'static,
    {
        let inner = Rc::new_cyclic(|weak| {
            let observer = make_observer(&WeakList {
                inner: weak.clone(),
            });
            ListInner::new(Rc::new(observer), Box::new(SystemClock), DEFAULT_CAPACITY)
        });
        Self { inner }
    }

    /// Start configuring a list.
    pub fn builder() -> ReactiveListBuilder {
        ReactiveListBuilder::new()
    }

    /// Get a weak handle to this list.
    pub fn downgrade(&self) -> WeakList {
        WeakList {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// True if both handles refer to the same list.
    pub fn ptr_eq(&self, other: &ReactiveList) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// How many notifications are on the call stack right now.
    ///
    /// Zero outside any observer; one inside the observer of a top-level
    /// call; deeper while reentrant calls are being notified.
    pub fn dispatch_depth(&self) -> usize {
        self.inner.dispatcher.depth()
    }

    fn notify(&self, action: Action, entries: Vec<Rc<Entry>>) -> ListResult<()> {
        self.inner.dispatcher.dispatch(&Change::new(action, entries))
    }

    // =========================================================================
    // LENGTH / READS
    // =========================================================================

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Rc<Entry>> {
        self.inner.data.borrow().get(index).cloned()
    }

    /// The entry at `index`, or `IndexOutOfBounds`.
    pub fn entry(&self, index: usize) -> ListResult<Rc<Entry>> {
        let data = self.inner.data.borrow();
        data.get(index)
            .cloned()
            .ok_or_else(|| ListError::out_of_bounds(index, data.len()))
    }

    pub fn first(&self) -> Option<Rc<Entry>> {
        self.inner.data.borrow().first().cloned()
    }

    pub fn last(&self) -> Option<Rc<Entry>> {
        self.inner.data.borrow().last().cloned()
    }

    /// Index of `entry` in the list, compared by identity.
    pub fn position(&self, entry: &Rc<Entry>) -> Option<usize> {
        self.inner
            .data
            .borrow()
            .iter()
            .position(|e| Rc::ptr_eq(e, entry))
    }

    /// A copy of the current entries, in order.
    pub fn snapshot(&self) -> Vec<Rc<Entry>> {
        self.inner.data.borrow().clone()
    }

    /// Iterate over a snapshot of the current entries.
    ///
    /// The iterator owns its snapshot, so the list may be mutated while
    /// iterating; the iterator keeps yielding the entries as they were.
    pub fn iter(&self) -> std::vec::IntoIter<Rc<Entry>> {
        self.snapshot().into_iter()
    }

    /// The text of every entry, in order. This is what a persistence layer
    /// saves and later hands to [`restore`](Self::restore).
    pub fn texts(&self) -> Vec<String> {
        self.inner
            .data
            .borrow()
            .iter()
            .map(|e| e.text().to_owned())
            .collect()
    }

    // =========================================================================
    // PUSH / UNSHIFT
    // =========================================================================

    /// Wrap `values` and append them in order. Returns the new length.
    ///
    /// Notifies `Add` with the new entries; pushing nothing is a no-op.
    pub fn push<I, S>(&self, values: I) -> ListResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let added = wrap_all(values, self.inner.clock.as_ref());
        let len = {
            let mut data = self.inner.data.borrow_mut();
            data.extend(added.iter().cloned());
            data.len()
        };

        self.notify(Action::Add, added)?;
        Ok(len)
    }

    /// Wrap `values` and insert them at the front, keeping their relative
    /// order. Returns the new length.
    pub fn unshift<I, S>(&self, values: I) -> ListResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let added = wrap_all(values, self.inner.clock.as_ref());
        let len = {
            let mut data = self.inner.data.borrow_mut();
            data.splice(0..0, added.iter().cloned());
            data.len()
        };

        self.notify(Action::Add, added)?;
        Ok(len)
    }

    /// Replay previously saved texts, one push per text, so the observer
    /// sees one single-entry `Add` for each. Returns the final length.
    ///
    /// Only the text survives a save; restored entries are fresh and not
    /// completed. Stops at the first observer failure; texts already pushed
    /// stay in the list.
    pub fn restore<I, S>(&self, texts: I) -> ListResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        debug!(count = texts.len(), "restoring saved entries");

        let mut len = self.len();
        for text in texts {
            len = self.push([text])?;
        }
        Ok(len)
    }

    // =========================================================================
    // POP / SHIFT
    // =========================================================================

    /// Remove and return the last entry; `None` (and no notification) when
    /// the list is empty.
    pub fn pop(&self) -> ListResult<Option<Rc<Entry>>> {
        let removed = self.inner.data.borrow_mut().pop();
        self.notify_single_removal(removed, "pop")
    }

    /// Remove and return the first entry; `None` (and no notification) when
    /// the list is empty.
    pub fn shift(&self) -> ListResult<Option<Rc<Entry>>> {
        let removed = {
            let mut data = self.inner.data.borrow_mut();
            if data.is_empty() {
                None
            } else {
                Some(data.remove(0))
            }
        };
        self.notify_single_removal(removed, "shift")
    }

    fn notify_single_removal(
        &self,
        removed: Option<Rc<Entry>>,
        op: &'static str,
    ) -> ListResult<Option<Rc<Entry>>> {
        match removed {
            Some(entry) => {
                self.notify(Action::Remove, vec![entry.clone()])?;
                Ok(Some(entry))
            }
            None => {
                trace!(op, "empty list, nothing removed");
                Ok(None)
            }
        }
    }

    // =========================================================================
    // SPLICE
    // =========================================================================

    /// Remove `delete_count` entries at `start`, then insert the wrapped
    /// `values` at `start`. Returns exactly the removed entries.
    ///
    /// `start` is clamped to `len` and `delete_count` to what remains after
    /// `start`. Both halves are applied to the list before any notification;
    /// then `Remove` fires for the removed entries (if any), followed by
    /// `Add` for the inserted ones (if any).
    ///
    /// # Example
    ///
    /// ```
    /// use std::rc::Rc;
    /// use chore_list::{Action, Entry, ReactiveList};
    ///
    /// let chores = ReactiveList::new(|_: Action, _: &[Rc<Entry>]| Ok(()));
    /// chores.push(["a", "b", "c"]).unwrap();
    ///
    /// let removed = chores.splice(1, 1, ["x"]).unwrap();
    /// assert_eq!(removed[0].text(), "b");
    /// assert_eq!(chores.texts(), ["a", "x", "c"]);
    /// ```
    pub fn splice<I, S>(&self, start: usize, delete_count: usize, values: I) -> ListResult<Vec<Rc<Entry>>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let inserted = wrap_all(values, self.inner.clock.as_ref());
        let removed: Vec<Rc<Entry>> = {
            let mut data = self.inner.data.borrow_mut();
            let start = start.min(data.len());
            let end = start + delete_count.min(data.len() - start);
            data.splice(start..end, inserted.iter().cloned()).collect()
        };

        self.inner.dispatcher.dispatch_all(&[
            Change::new(Action::Remove, removed.clone()),
            Change::new(Action::Add, inserted),
        ])?;
        Ok(removed)
    }

    // =========================================================================
    // SET
    // =========================================================================

    /// Write `value` at `index`.
    ///
    /// - `index < len`: replaces the entry and returns the old one. Notifies
    ///   `Update` with the new entry, unless the new entry is the very object
    ///   already stored there.
    /// - `index == len`: appends, returns `None`, notifies `Update` with the
    ///   appended entry.
    /// - `index > len`: `IndexOutOfBounds`, nothing changes.
    ///
    /// Raw text is wrapped; an existing `Rc<Entry>` is stored as-is.
    pub fn set(&self, index: usize, value: impl Into<EntryValue>) -> ListResult<Option<Rc<Entry>>> {
        let len = self.len();
        if index > len {
            return Err(ListError::out_of_bounds(index, len));
        }

        let entry = resolve(value.into(), self.inner.clock.as_ref());
        let old = {
            let mut data = self.inner.data.borrow_mut();
            if index == data.len() {
                data.push(entry.clone());
                None
            } else {
                Some(std::mem::replace(&mut data[index], entry.clone()))
            }
        };

        match old {
            None => {
                self.notify(Action::Update, vec![entry])?;
                Ok(None)
            }
            Some(old) if Rc::ptr_eq(&old, &entry) => {
                trace!(index, "same entry written back, no change");
                Ok(Some(old))
            }
            Some(old) => {
                self.notify(Action::Update, vec![entry])?;
                Ok(Some(old))
            }
        }
    }

    // =========================================================================
    // CLEAR
    // =========================================================================

    /// Remove every entry, returning them in their original order.
    ///
    /// Notifies `Remove` with all of them; clearing an empty list is a no-op.
    pub fn clear(&self) -> ListResult<Vec<Rc<Entry>>> {
        let removed = std::mem::take(&mut *self.inner.data.borrow_mut());
        if removed.is_empty() {
            trace!("clear on empty list");
            return Ok(removed);
        }

        self.notify(Action::Remove, removed.clone())?;
        Ok(removed)
    }

    // =========================================================================
    // TOGGLE
    // =========================================================================

    /// Flip `completed` on the entry at `index` and return it.
    ///
    /// The entry stays where it is and is not replaced. Notifies `Update`
    /// with that same entry. Out-of-range indices fail with
    /// `IndexOutOfBounds` and change nothing.
    pub fn toggle_complete(&self, index: usize) -> ListResult<Rc<Entry>> {
        let entry = self.entry(index)?;
        entry.toggle();
        self.notify(Action::Update, vec![entry.clone()])?;
        Ok(entry)
    }

    /// [`toggle_complete`](Self::toggle_complete) for callers holding a
    /// signed position, such as a `-1` "not found" result.
    pub fn toggle_complete_at(&self, index: isize) -> ListResult<Rc<Entry>> {
        match usize::try_from(index) {
            Ok(index) => self.toggle_complete(index),
            Err(_) => Err(ListError::NegativeIndex {
                index,
                len: self.len(),
            }),
        }
    }
}

impl fmt::Debug for ReactiveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.data.borrow();
        f.debug_struct("ReactiveList")
            .field("entries", &*data)
            .field("len", &data.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ReactiveList {
    type Item = Rc<Entry>;
    type IntoIter = std::vec::IntoIter<Rc<Entry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// WEAK LIST
// =============================================================================

impl WeakList {
    /// Get the list back, if any strong handle is still alive.
    pub fn upgrade(&self) -> Option<ReactiveList> {
        self.inner.upgrade().map(|inner| ReactiveList { inner })
    }
}

impl fmt::Debug for WeakList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakList")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Configures a [`ReactiveList`] before it is created.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use chrono::{TimeZone, Utc};
/// use chore_list::{Action, Entry, FixedClock, ListError, ReactiveList};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
/// let chores = ReactiveList::builder()
///     .observer(|_: Action, _: &[Rc<Entry>]| Ok(()))
///     .clock(FixedClock(at))
///     .capacity(16)
///     .build()
///     .unwrap();
///
/// chores.push(["water plants"]).unwrap();
/// assert_eq!(chores.first().unwrap().created_at(), at);
///
/// // An observer is required.
/// assert!(matches!(ReactiveList::builder().build(), Err(ListError::InvalidCallback)));
/// ```
#[derive(Default)]
pub struct ReactiveListBuilder {
    observer: Option<Rc<dyn Observer>>,
    clock: Option<Box<dyn Clock>>,
    capacity: Option<usize>,
}

impl ReactiveListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the observer from a closure.
    pub fn observer<F>(self, observer: F) -> Self
    where
        F: Fn(Action, &[Rc<Entry>]) -> anyhow::Result<()> + 'static,
    {
        self.observer_impl(observer)
    }

    /// Set the observer from any [`Observer`] implementation.
    pub fn observer_impl(mut self, observer: impl Observer) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    /// Set (or clear, with `None`) an already shared observer.
    pub fn shared_observer(mut self, observer: Option<Rc<dyn Observer>>) -> Self {
        self.observer = observer;
        self
    }

    /// Use `clock` for `created_at` timestamps. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: impl Clock) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Reserve room for `capacity` entries up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Create the list. Fails with `InvalidCallback` when no observer was
    /// set.
    pub fn build(self) -> ListResult<ReactiveList> {
        let observer = self.observer.ok_or(ListError::InvalidCallback)?;
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        let capacity = self.capacity.unwrap_or(DEFAULT_CAPACITY);

        Ok(ReactiveList {
            inner: Rc::new(ListInner::new(observer, clock, capacity)),
        })
    }
}

impl fmt::Debug for ReactiveListBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveListBuilder")
            .field("has_observer", &self.observer.is_some())
            .field("has_clock", &self.clock.is_some())
            .field("capacity", &self.capacity)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
