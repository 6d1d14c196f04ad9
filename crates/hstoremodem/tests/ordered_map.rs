#![allow(missing_docs)]

use hstoremodem::{ErrorKind, OrderedMap, to_ordered_map};

#[test]
fn map_preserves_insertion_order() {
    let map = to_ordered_map("z=>1, a=>2, m=>NULL").unwrap();
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
    assert_eq!(map["m"], None);
}

#[test]
fn later_duplicate_wins_but_keeps_first_position() {
    let map = to_ordered_map("a=>1, b=>2, a=>3").unwrap();
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(map["a"].as_deref(), Some("3"));
}

#[test]
fn empty_input_makes_an_empty_map() {
    assert_eq!(to_ordered_map("  ").unwrap(), OrderedMap::new());
}

#[test]
fn parse_errors_surface_with_their_offset() {
    let err = to_ordered_map("a=>1, b=2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExpectedSeparator);
    assert_eq!(err.position(), 8);
}
