// ============================================================================
// chore-list - Ergonomic Macros
// ============================================================================

/// Clone variables into a move closure.
///
/// Observers usually capture shared handles (an `Rc<RefCell<..>>` log, a
/// `WeakList`); this saves the `let x = x.clone();` lines before each one.
///
/// # Usage
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use chore_list::{cloned, Action, Entry, ReactiveList};
///
/// let adds = Rc::new(Cell::new(0));
///
/// let chores = ReactiveList::new(cloned!(adds => move |action: Action, _: &[Rc<Entry>]| {
///     if action == Action::Add {
///         adds.set(adds.get() + 1);
///     }
///     Ok(())
/// }));
///
/// chores.push(["fold laundry"]).unwrap();
/// assert_eq!(adds.get(), 1);
/// ```
#[macro_export]
macro_rules! cloned {
    ($($n:ident),+ => $e:expr) => {
        {
            $( let $n = $n.clone(); )+
            $e
        }
    };
}

/// Build a [`ReactiveList`](crate::ReactiveList) from an observer body.
///
/// Expands to `ReactiveList::new(cloned!(deps => move |action, entries| body))`
/// with the closure parameters already typed. The body must evaluate to
/// `anyhow::Result<()>`.
///
/// # Usage
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use chore_list::reactive_list;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// let chores = reactive_list!(log => |action, entries| {
///     log.borrow_mut().push(format!("{action} {}", entries.len()));
///     Ok(())
/// });
///
/// chores.push(["a", "b"]).unwrap();
/// chores.pop().unwrap();
/// assert_eq!(*log.borrow(), ["add 2", "remove 1"]);
/// ```
#[macro_export]
macro_rules! reactive_list {
    // Case 1: With captured dependencies
    ($($deps:ident),+ => |$action:ident, $entries:ident| $body:expr) => {
        $crate::ReactiveList::new($crate::cloned!($($deps),+ => move |
            $action: $crate::Action,
            $entries: &[::std::rc::Rc<$crate::Entry>]
        | -> $crate::anyhow::Result<()> { $body }))
    };
    // Case 2: No captures
    (|$action:ident, $entries:ident| $body:expr) => {
        $crate::ReactiveList::new(move |
            $action: $crate::Action,
            $entries: &[::std::rc::Rc<$crate::Entry>]
        | -> $crate::anyhow::Result<()> { $body })
    };
}
