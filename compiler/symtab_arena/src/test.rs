use proptest::{prelude::Arbitrary, prop_assert_eq, proptest};

use crate::{Arena, ID};

#[test]
fn ids_follow_insertion_order() {
    let mut arena = Arena::new();

    let first = arena.insert("first");
    let second = arena.insert("second");
    let third =
        arena.insert_with(|id| if id.index() == 2 { "third" } else { "" });

    assert_eq!(first.index(), 0);
    assert_eq!(second.index(), 1);
    assert_eq!(third.index(), 2);

    assert_eq!(arena[second], "second");
    assert_eq!(arena.get(third), Some(&"third"));
    assert_eq!(arena.items().copied().collect::<Vec<_>>(), [
        "first", "second", "third"
    ]);
    assert_eq!(arena.ids().collect::<Vec<_>>(), [first, second, third]);
}

#[test]
fn missing_id_is_none() {
    let mut arena = Arena::new();
    arena.insert(1);

    assert!(arena.contains_id(ID::new(0)));
    assert!(!arena.contains_id(ID::new(1)));
    assert_eq!(arena.get(ID::new(1)), None);
}

#[test]
fn index_mut_updates_item() {
    let mut arena = Arena::new();
    let id = arena.insert(String::from("a"));

    arena[id].push('b');

    assert_eq!(arena[id], "ab");
    assert_eq!(arena.len(), 1);
    assert!(!arena.is_empty());
}

proptest! {
    #[test]
    fn id_equality_follows_index(id in ID::<u8>::arbitrary()) {
        prop_assert_eq!(id, ID::<u8>::new(id.index()));
    }

    #[test]
    fn contains_id_matches_get(
        id in ID::<u32>::arbitrary(),
        len in 0..crate::arbitrary::DENSE_INDEX_BOUND,
    ) {
        let mut arena = Arena::new();
        for item in 0..len {
            arena.insert(u32::try_from(item).unwrap());
        }

        prop_assert_eq!(arena.contains_id(id), id.index() < len);
        prop_assert_eq!(arena.get(id).is_some(), arena.contains_id(id));
    }

    #[test]
    fn iter_yields_every_item(
        items in proptest::collection::vec(0u32..100, 0..32)
    ) {
        let mut arena = Arena::new();
        for item in &items {
            arena.insert(*item);
        }

        prop_assert_eq!(arena.len(), items.len());
        for (position, (id, item)) in arena.iter().enumerate() {
            prop_assert_eq!(id.index(), position);
            prop_assert_eq!(*item, items[position]);
        }
    }
}
