//! Property tests for the runtime named tuple

use proptest::prelude::*;
use valued_tuples::NamedTuple;

fn slots() -> impl Strategy<Value = Vec<(String, i32)>> {
    let name = prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(String::from);
    prop::collection::vec((name, any::<i32>()), 0..12)
}

proptest! {
    #[test]
    fn delete_keeps_relative_order(slots in slots(), target in "[a-d]") {
        let t = NamedTuple::<i32>::from_entries(slots.clone()).unwrap();
        let kept: Vec<(String, i32)> = slots.into_iter().filter(|(n, _)| *n != target).collect();
        let d = t.delete(&target);

        prop_assert!(d.match_index(&target).is_empty());
        prop_assert_eq!(d, NamedTuple::<i32>::from_entries(kept).unwrap());
    }

    #[test]
    fn merge_is_concatenation(left in slots(), right in slots()) {
        let x = NamedTuple::<i32>::from_entries(left.clone()).unwrap();
        let y = NamedTuple::<i32>::from_entries(right.clone()).unwrap();
        let all: Vec<_> = left.into_iter().chain(right).collect();

        let merged = x.merge(&y);
        prop_assert_eq!(merged.len(), x.len() + y.len());
        prop_assert_eq!(merged, NamedTuple::<i32>::from_entries(all).unwrap());
    }

    #[test]
    fn get_agrees_with_last_match(slots in slots(), target in "[a-d]") {
        let t = NamedTuple::<i32>::from_entries(slots).unwrap();
        match t.match_index(&target).last() {
            Some(&i) => prop_assert_eq!(t.get(&target), Ok(&t.values()[i])),
            None => prop_assert!(t.get(&target).is_err()),
        }
    }
}
