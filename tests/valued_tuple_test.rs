//! Static valued tuples: construction, lookup, deletion, merge

use valued_tuples::prelude::*;
use valued_tuples::tuple::{Nil, Slot};

names!(a, b, c, d);

#[test]
fn test_last_match_wins() {
    let v = ValuedTuple::new((1, 2, 3), (a, b, a));
    assert_eq!(v[a], 3);
    assert_eq!(v[b], 2);
    assert_eq!(*v.get(a), 3);
}

#[test]
fn test_heterogeneous_values() {
    let v = ValuedTuple::new((1u8, "two", 3.5f64), (a, b, c));
    let first: &u8 = v.get(a);
    let second: &&str = v.get(b);
    assert_eq!(*first, 1);
    assert_eq!(*second, "two");
    assert_eq!(v[c], 3.5);
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
}

#[test]
fn test_match_index() {
    let v = ValuedTuple::new((1, 2, 3), (a, b, a));
    assert_eq!(v.match_index(a), vec![0, 2]);
    assert_eq!(v.match_index(b), vec![1]);
    assert!(v.match_index(d).is_empty());
}

#[test]
fn test_value_names_from_type() {
    let x = ValuedTuple::new((1, 2, 3), (a, b, a));
    let y = ValuedTuple::new((7, 8, 9), (a, b, a));
    assert_eq!(value_names_of(&x), ["a", "b", "a"]);
    assert_eq!(value_names_of(&x), value_names_of(&y));
    assert_eq!(value_names::<ValuedTuple>(), Vec::<&str>::new());
}

#[test]
fn test_delete_removes_every_match() {
    let v = ValuedTuple::new((1, 2, 3), (a, b, a));
    let only_b = v.delete(a);
    assert_eq!(value_names_of(&only_b), ["b"]);
    assert_eq!(only_b[b], 2);
    assert_eq!(only_b.into_values(), (2,));
}

#[test]
fn test_delete_absent_name_is_identity() {
    let v = ValuedTuple::new((1, 2), (a, b));
    let same = v.delete(d);
    assert_eq!(same, v);
}

#[test]
fn test_delete_keeps_order() {
    let v = ValuedTuple::new((1, 2, 3, 4), (a, b, c, b));
    let rest = v.delete(b);
    assert_eq!(value_names_of(&rest), ["a", "c"]);
    assert_eq!(rest.into_values(), (1, 3));
}

#[test]
fn test_merge_concatenates() {
    let left = ValuedTuple::new((1,), (a,));
    let right = ValuedTuple::new(("x", 2.0), (b, c));
    let merged = left.merge(right);
    assert_eq!(value_names_of(&merged), ["a", "b", "c"]);
    assert_eq!(merged.into_values(), (1, "x", 2.0));
}

#[test]
fn test_merge_is_order_sensitive() {
    let left = ValuedTuple::new((1,), (a,));
    let right = ValuedTuple::new((2,), (a,));

    let lr = left.merge(right);
    let rl = right.merge(left);
    assert_eq!(lr[a], 2);
    assert_eq!(rl[a], 1);
    assert_eq!(lr.match_index(a), vec![0, 1]);
}

#[test]
fn test_merge_with_empty() {
    let v = ValuedTuple::new((1, 2), (a, b));
    assert_eq!(v.merge(ValuedTuple::empty()), v);
    assert_eq!(ValuedTuple::empty().merge(v), v);
}

#[test]
fn test_round_trip_through_values_and_names() {
    let v = ValuedTuple::new((1, "s"), (a, b));
    let names = value_names_of(&v);
    let values = v.into_values();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(ValuedTuple::new(values, (a, b)), v);
}

#[test]
fn test_from_pairs() {
    let v = ValuedTuple::from_pairs(((a, 1), (b, 2), (a, 3)));
    assert_eq!(v, ValuedTuple::new((1, 2, 3), (a, b, a)));
    assert_eq!(v[a], 3);
}

#[test]
fn test_empty_tuple() {
    let v = ValuedTuple::empty();
    assert_eq!(v.len(), 0);
    assert!(v.is_empty());
    assert!(v.match_index(a).is_empty());
    assert_eq!(v.to_string(), "()");
}

#[test]
fn test_display_and_debug() {
    let v = ValuedTuple::new((1, "x"), (a, b));
    assert_eq!(v.to_string(), r#"(a = 1, b = "x")"#);
    assert_eq!(format!("{v:?}"), r#"ValuedTuple(a = 1, b = "x")"#);
}

#[test]
fn test_into_named() {
    let v = ValuedTuple::new((1u8, 2u16, 3u32), (a, b, a));
    let t: NamedTuple<u64> = v.into_named();
    assert_eq!(t.value_names(), ["a", "b", "a"]);
    assert_eq!(t.get("a"), Ok(&3));
    assert_eq!(t.match_index("a"), v.match_index(a));
}

#[test]
fn test_len_is_const() {
    type Three = ValuedTuple<Slot<a, i32, Slot<b, i32, Slot<a, i32, Nil>>>>;
    assert_eq!(Three::LEN, 3);
    let v: Three = ValuedTuple::new((1, 2, 3), (a, b, a));
    assert_eq!(v[a], 3);
}
