use chore_list::{cloned, reactive_list, Action, Entry, ReactiveList};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn ergonomic_cloned_macro() {
    let adds = Rc::new(Cell::new(0));
    let removes = Rc::new(Cell::new(0));

    // Old way
    let _old = ReactiveList::new({
        let adds = adds.clone();
        let removes = removes.clone();
        move |action: Action, _: &[Rc<Entry>]| {
            match action {
                Action::Add => adds.set(adds.get() + 1),
                Action::Remove => removes.set(removes.get() + 1),
                Action::Update => {}
            }
            Ok(())
        }
    });

    // New way
    let chores = ReactiveList::new(cloned!(adds, removes => move |action: Action, _: &[Rc<Entry>]| {
        match action {
            Action::Add => adds.set(adds.get() + 1),
            Action::Remove => removes.set(removes.get() + 1),
            Action::Update => {}
        }
        Ok(())
    }));

    chores.push(["a", "b"]).unwrap();
    chores.pop().unwrap();
    assert_eq!(adds.get(), 1);
    assert_eq!(removes.get(), 1);
}

#[test]
fn reactive_list_macro_types_the_closure() {
    let log = Rc::new(RefCell::new(Vec::new()));

    let chores = reactive_list!(log => |action, entries| {
        for entry in entries {
            log.borrow_mut().push(format!("{action}:{}", entry.text()));
        }
        Ok(())
    });

    chores.push(["sweep"]).unwrap();
    chores.toggle_complete(0).unwrap();
    assert_eq!(*log.borrow(), ["add:sweep", "update:sweep"]);
}

#[test]
fn reactive_list_macro_without_captures() {
    let chores = reactive_list!(|_action, entries| {
        assert!(!entries.is_empty());
        Ok(())
    });

    chores.push(["a"]).unwrap();
    chores.clear().unwrap();
    chores.clear().unwrap();
    assert!(chores.is_empty());
}
