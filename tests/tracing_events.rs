//! The list logs through `tracing`; check the events a subscriber sees.

use chore_list::{Action, Entry, ReactiveList};
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

#[test]
fn dispatch_is_traced_with_action_and_depth() {
    let logs = capture_logs(|| {
        let chores = ReactiveList::new(|_: Action, _: &[Rc<Entry>]| Ok(()));
        chores.push(["a", "b"]).unwrap();
    });

    assert!(logs.contains("dispatching change"), "{logs}");
    assert!(logs.contains("action=add"), "{logs}");
    assert!(logs.contains("count=2"), "{logs}");
    assert!(logs.contains("depth=1"), "{logs}");
}

#[test]
fn noop_is_traced_and_observer_failure_warns() {
    let logs = capture_logs(|| {
        let chores = ReactiveList::new(|_: Action, _: &[Rc<Entry>]| anyhow::bail!("render failed"));
        assert!(chores.pop().unwrap().is_none());
        assert!(chores.push(["a"]).is_err());
    });

    assert!(logs.contains("empty list, nothing removed"), "{logs}");
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("render failed"), "{logs}");
}

#[test]
fn restore_logs_count() {
    let logs = capture_logs(|| {
        let chores = ReactiveList::new(|_: Action, _: &[Rc<Entry>]| Ok(()));
        assert_eq!(chores.restore(["a", "b", "c"]).unwrap(), 3);
    });

    assert!(logs.contains("restoring saved entries"), "{logs}");
    assert!(logs.contains("count=3"), "{logs}");
    assert_eq!(logs.matches("dispatching change").count(), 3, "{logs}");
}
