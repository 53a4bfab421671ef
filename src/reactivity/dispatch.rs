// ============================================================================
// chore-list - Notification Dispatch
// Exactly-once, action-tagged delivery to the single observer
// ============================================================================
//
// Callers hand the dispatcher a change that is already computed and a
// backing sequence whose borrow is already released. That is what makes
// reentrancy safe: the observer may call straight back into the list, and
// the nested call dispatches (and completes) before the outer call resumes.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use tracing::{Level, event, trace};

use crate::core::error::{ListError, ListResult};
use crate::core::types::{Action, Entry};

// =============================================================================
// OBSERVER
// =============================================================================

/// Receives every committed change of a [`ReactiveList`](crate::ReactiveList).
///
/// Closures of the shape `Fn(Action, &[Rc<Entry>]) -> anyhow::Result<()>`
/// implement this automatically. Implement it by hand for observers that
/// carry their own state.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use chore_list::{Action, Entry, Observer, ReactiveList};
///
/// struct Logger;
///
/// impl Observer for Logger {
///     fn notify(&self, action: Action, entries: &[Rc<Entry>]) -> anyhow::Result<()> {
///         println!("chores {action}: {} entries", entries.len());
///         Ok(())
///     }
/// }
///
/// let chores = ReactiveList::with_observer(Logger);
/// chores.push(["sweep"]).unwrap();
/// ```
pub trait Observer: 'static {
    /// Handle one change. `entries` is never empty.
    fn notify(&self, action: Action, entries: &[Rc<Entry>]) -> anyhow::Result<()>;
}

impl<F> Observer for F
where
    F: Fn(Action, &[Rc<Entry>]) -> anyhow::Result<()> + 'static,
{
    fn notify(&self, action: Action, entries: &[Rc<Entry>]) -> anyhow::Result<()> {
        self(action, entries)
    }
}

// =============================================================================
// CHANGE
// =============================================================================

/// One computed change: the action and the entries it affected.
#[derive(Debug, Clone)]
pub(crate) struct Change {
    pub(crate) action: Action,
    pub(crate) entries: Vec<Rc<Entry>>,
}

impl Change {
    pub(crate) fn new(action: Action, entries: Vec<Rc<Entry>>) -> Self {
        Self { action, entries }
    }

    /// A change that touched nothing and must not be delivered.
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// Holds the observer for the lifetime of a list and delivers changes to it.
pub(crate) struct Dispatcher {
    observer: Rc<dyn Observer>,
    depth: Cell<usize>,
}

impl Dispatcher {
    pub(crate) fn new(observer: Rc<dyn Observer>) -> Self {
        Self {
            observer,
            depth: Cell::new(0),
        }
    }

    /// How many notifications are currently on the call stack.
    pub(crate) fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Deliver a single change. Empty changes are skipped without calling
    /// the observer.
    pub(crate) fn dispatch(&self, change: &Change) -> ListResult<()> {
        if change.is_empty() {
            trace!(action = %change.action, "no-op change, observer not called");
            return Ok(());
        }

        // Restores the depth on unwind too.
        struct DepthGuard<'a>(&'a Cell<usize>);

        impl Drop for DepthGuard<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() - 1);
            }
        }

        let depth = self.depth.get() + 1;
        self.depth.set(depth);
        let _guard = DepthGuard(&self.depth);

        trace!(
            action = %change.action,
            count = change.entries.len(),
            depth,
            "dispatching change"
        );

        self.observer
            .notify(change.action, &change.entries)
            .map_err(|source| {
                event!(
                    Level::WARN,
                    action = %change.action,
                    depth,
                    error = %source,
                    "observer failed; mutation stays committed"
                );
                ListError::Observer {
                    action: change.action,
                    source,
                }
            })
    }

    /// Deliver changes in order. Every non-empty change reaches the observer
    /// even if an earlier one failed; the first failure is returned.
    pub(crate) fn dispatch_all(&self, changes: &[Change]) -> ListResult<()> {
        let mut first_err = None;
        for change in changes {
            if let Err(err) = self.dispatch(change) {
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

// =============================================================================
// TESTS
// =============================================================================
