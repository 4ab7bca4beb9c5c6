use crate::{Counter, Dummy, Handler, Storage};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Duplicate(&'static str);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Collected {
    Duplicate(&'static str),
}

impl From<Duplicate> for Collected {
    fn from(value: Duplicate) -> Self { Self::Duplicate(value.0) }
}

fn report_twice(handler: &dyn Handler<Duplicate>) {
    handler.receive(Duplicate("x"));
    handler.receive(Duplicate("y"));
}

#[test]
fn storage_keeps_receive_order() {
    let storage = Storage::<Duplicate>::new();

    report_twice(&storage);

    assert_eq!(storage.len(), 2);
    assert_eq!(*storage.as_vec(), [Duplicate("x"), Duplicate("y")]);
}

#[test]
fn storage_converts_into_its_item_type() {
    let storage = Storage::<Collected>::default();

    report_twice(&storage);

    assert_eq!(storage.into_vec(), [
        Collected::Duplicate("x"),
        Collected::Duplicate("y")
    ]);
}

#[test]
fn take_and_propagate_drain_the_storage() {
    let inner = Storage::<Duplicate>::new();
    let outer = Storage::<Collected>::new();

    report_twice(&inner);
    inner.propagate::<Collected, _>(&outer);

    assert!(inner.is_empty());
    assert_eq!(outer.len(), 2);

    let taken = outer.take();
    assert_eq!(taken.len(), 2);
    assert!(outer.is_empty());
}

#[test]
fn counter_counts_and_resets() {
    let counter = Counter::new();

    report_twice(&counter);
    assert_eq!(counter.count(), 2);

    counter.reset();
    assert_eq!(counter.count(), 0);
}

#[test]
fn dummy_ignores_everything() { report_twice(&Dummy); }

#[test]
#[should_panic(expected = "unexpected diagnostic")]
fn panic_handler_panics() { report_twice(&crate::Panic); }
