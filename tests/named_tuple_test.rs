//! Runtime named tuples: errors and operations

use valued_tuples::{ConstructError, Leftover, LookupError, NamedTuple, Shape, Symbol};
use valued_tuples::dynamic::Entry;

fn sym(s: &str) -> Symbol {
    Symbol::new(s).unwrap()
}

#[test]
fn test_construct_and_get() {
    let t = NamedTuple::new([1, 2, 3], ["a", "b", "a"]).unwrap();
    assert_eq!(t.get("a"), Ok(&3));
    assert_eq!(t.get("b"), Ok(&2));
    assert_eq!(t["a"], 3);
    assert_eq!(t.len(), 3);
}

#[test]
fn test_surplus_values() {
    let err = NamedTuple::new([1, 2, 3], ["a"]).unwrap_err();
    assert_eq!(err, ConstructError::LengthMismatch { leftover: Leftover::Values(vec![2, 3]) });
    assert_eq!(err.to_string(), "tuple size mismatch: leftovers (2, 3)");
}

#[test]
fn test_surplus_names() {
    let err = NamedTuple::new([1], ["a", "b", "c"]).unwrap_err();
    assert_eq!(
        err,
        ConstructError::LengthMismatch { leftover: Leftover::Names(vec![sym("b"), sym("c")]) }
    );
    assert_eq!(err.to_string(), "tuple size mismatch: leftovers (b, c)");
}

#[test]
fn test_single_leftover_renders_as_one_tuple() {
    let err = NamedTuple::new([1, 2], ["a"]).unwrap_err();
    assert_eq!(err.to_string(), "tuple size mismatch: leftovers (2,)");
}

#[test]
fn test_invalid_name_kind() {
    let err = NamedTuple::new([1, 2], ["a", "2"]).unwrap_err();
    assert_eq!(err, ConstructError::InvalidNameKind { position: 1, found: "2".to_string() });
}

#[test]
fn test_names_checked_before_length() {
    let err = NamedTuple::new([1], ["a", "b c"]).unwrap_err();
    assert!(matches!(err, ConstructError::InvalidNameKind { position: 1, .. }));
}

#[test]
fn test_from_entries() {
    let t = NamedTuple::<i32>::from_entries([("a", 1), ("b", 2), ("a", 3)]).unwrap();
    assert_eq!(t, NamedTuple::new([1, 2, 3], ["a", "b", "a"]).unwrap());
}

#[test]
fn test_malformed_entry() {
    let entries = vec![Entry::Assign("a".to_string(), 1), Entry::Opaque("a + 1".to_string())];
    let err = NamedTuple::<i32>::from_entries(entries).unwrap_err();
    assert_eq!(err, ConstructError::MalformedEntry { position: 1, entry: "a + 1".to_string() });
}

#[test]
fn test_name_not_found() {
    let t = NamedTuple::new([1, 2], ["a", "b"]).unwrap();
    let err = t.get("d").unwrap_err();
    assert_eq!(err, LookupError::NameNotFound { name: "d".to_string() });
    assert_eq!(err.to_string(), "no slot named `d`");
}

#[test]
#[should_panic(expected = "no slot named `d`")]
fn test_index_panics_on_missing_name() {
    let t = NamedTuple::new([1], ["a"]).unwrap();
    let _value = t["d"];
}

#[test]
fn test_match_index() {
    let t = NamedTuple::new([1, 2, 3], ["a", "b", "a"]).unwrap();
    assert_eq!(t.match_index("a"), vec![0, 2]);
    assert!(t.match_index("d").is_empty());
}

#[test]
fn test_value_names_ignore_values() {
    let shape = Shape::new(vec![sym("a"), sym("b"), sym("a")]);
    let x = NamedTuple::with_shape(&shape, [1, 2, 3]).unwrap();
    let y = NamedTuple::with_shape(&shape, [7, 8, 9]).unwrap();
    assert_eq!(x.value_names(), y.value_names());
    assert_eq!(x.value_names(), ["a", "b", "a"]);
}

#[test]
fn test_with_shape_length_mismatch() {
    let shape = Shape::new(vec![sym("a"), sym("b")]);
    let err = NamedTuple::with_shape(&shape, [1]).unwrap_err();
    assert_eq!(err, ConstructError::LengthMismatch { leftover: Leftover::Names(vec![sym("b")]) });
}

#[test]
fn test_delete() {
    let t = NamedTuple::new([1, 2, 3], ["a", "b", "a"]).unwrap();
    let d = t.delete("a");
    assert_eq!(d.value_names(), ["b"]);
    assert_eq!(d.values(), [2]);
    assert_eq!(t.delete("zzz"), t);
    assert_eq!(t.len(), 3);
}

#[test]
fn test_merge() {
    let x = NamedTuple::new([1], ["a"]).unwrap();
    let y = NamedTuple::new([2], ["a"]).unwrap();
    assert_eq!(x.merge(&y).get("a"), Ok(&2));
    assert_eq!(y.merge(&x).get("a"), Ok(&1));
    assert_eq!(x.merge(&y).value_names(), ["a", "a"]);
}

#[test]
fn test_into_parts_round_trip() {
    let t = NamedTuple::new(["x", "y"], ["a", "b"]).unwrap();
    let (values, names) = t.clone().into_parts();
    assert_eq!(NamedTuple::new(values, names).unwrap(), t);
}

#[test]
fn test_display() {
    let t = NamedTuple::new([1, 2], ["a", "b"]).unwrap();
    assert_eq!(t.to_string(), "(a = 1, b = 2)");
    assert_eq!(format!("{t:?}"), "NamedTuple(a = 1, b = 2)");
    let pairs: Vec<_> = t.iter().map(|(n, v)| (n.as_str(), *v)).collect();
    assert_eq!(pairs, [("a", 1), ("b", 2)]);
}
