use formtree::{form, from_pairs, Error, Kind, Value};
use serde_json::json;

fn to_json(doc: &Value) -> serde_json::Value {
    serde_json::to_value(doc).unwrap()
}

#[test]
fn test_converts_a_flat_sequence_to_a_record() {
    let doc = from_pairs([("A", "1"), ("B", "2"), ("C", "3")]).unwrap();
    assert_eq!(to_json(&doc), json!({"A": "1", "B": "2", "C": "3"}));
}

#[test]
fn test_nests_names_with_a_dot_separator() {
    let doc = from_pairs([("A", "1"), ("B.A", "2"), ("B.B", "3")]).unwrap();
    assert_eq!(to_json(&doc), json!({"A": "1", "B": {"A": "2", "B": "3"}}));
}

#[test]
fn test_duplicate_keys_do_not_error() {
    let doc = from_pairs([("A", "1"), ("A", "2")]).unwrap();
    assert_eq!(to_json(&doc), json!({"A": "2"}));
}

#[test]
fn test_several_levels_of_nesting() {
    let doc = from_pairs([("A.B.C.D.E", "1")]).unwrap();
    assert_eq!(to_json(&doc), json!({"A": {"B": {"C": {"D": {"E": "1"}}}}}));
}

#[test]
fn test_empty_input() {
    let doc = from_pairs(Vec::<(&str, &str)>::new()).unwrap();
    assert_eq!(to_json(&doc), json!({}));
    assert_eq!(doc, Value::default());
}

#[test]
fn test_array_notation() {
    let doc = from_pairs([("A[0]", "1"), ("A[1]", "2")]).unwrap();
    assert_eq!(to_json(&doc), json!({"A": ["1", "2"]}));
}

#[test]
fn test_multiple_objects_inside_arrays() {
    let doc = from_pairs([("A[0].A", "1"), ("A[1].B", "2")]).unwrap();
    assert_eq!(to_json(&doc), json!({"A": [{"A": "1"}, {"B": "2"}]}));
}

#[test]
fn test_objects_with_multiple_properties_inside_arrays() {
    let doc = from_pairs([
        ("A[0].A", "1"),
        ("A[0].B", "2"),
        ("A[1].A", "3"),
        ("A[1].B", "4"),
    ])
    .unwrap();
    assert_eq!(
        to_json(&doc),
        json!({"A": [{"A": "1", "B": "2"}, {"A": "3", "B": "4"}]})
    );
}

#[test]
fn test_nested_arrays() {
    let doc = from_pairs([("A[0].B[0].C", "1")]).unwrap();
    assert_eq!(to_json(&doc), json!({"A": [{"B": [{"C": "1"}]}]}));
}

#[test]
fn test_out_of_order_explicit_indices() {
    let doc = from_pairs([("A[1]", "2"), ("A[0]", "1")]).unwrap();
    assert_eq!(to_json(&doc), json!({"A": ["1", "2"]}));
}

mod malformed_keys {
    use super::*;

    #[test]
    fn test_leading_dots() {
        let doc = from_pairs([(".A.B", "1")]).unwrap();
        assert_eq!(to_json(&doc), json!({"A": {"B": "1"}}));
    }

    #[test]
    fn test_trailing_dots() {
        let doc = from_pairs([("A.B.", "1")]).unwrap();
        assert_eq!(to_json(&doc), json!({"A": {"B": "1"}}));
    }

    #[test]
    fn test_duplicate_dots() {
        let doc = from_pairs([("A..B", "1")]).unwrap();
        assert_eq!(to_json(&doc), json!({"A": {"B": "1"}}));
    }

    #[test]
    fn test_missing_array_indices() {
        // Each [] allocates a fresh element even though the literal path
        // string is identical both times.
        let doc = from_pairs([("A[].B", "1"), ("A[].B", "2")]).unwrap();
        assert_eq!(to_json(&doc), json!({"A": [{"B": "1"}, {"B": "2"}]}));
    }

    #[test]
    fn test_malformed_brackets_become_literal_names() {
        let doc = from_pairs([("A[x]", "1"), ("A[", "2"), ("A[0]b", "3")]).unwrap();
        assert_eq!(
            to_json(&doc),
            json!({"A[x]": "1", "A[": "2", "A[0]b": "3"})
        );
    }
}

mod auto_indices {
    use super::*;

    #[test]
    fn test_leaf_auto_index_appends() {
        let doc = from_pairs([("A[]", "1"), ("A[]", "2"), ("A[]", "3")]).unwrap();
        assert_eq!(to_json(&doc), json!({"A": ["1", "2", "3"]}));
    }

    #[test]
    fn test_allocation_follows_input_order() {
        // Interleaved with other keys, allocation still tracks occurrence
        // order of the auto-indexed path.
        let doc = from_pairs([
            ("env[].key", "A"),
            ("other", "x"),
            ("env[].key", "B"),
        ])
        .unwrap();
        assert_eq!(
            to_json(&doc),
            json!({"env": [{"key": "A"}, {"key": "B"}], "other": "x"})
        );
    }
}

mod gap_filling {
    use super::*;

    #[test]
    fn test_leaf_gap_filled_with_empty_records() {
        let doc = from_pairs([("A[2]", "x")]).unwrap();
        assert_eq!(to_json(&doc), json!({"A": [{}, {}, "x"]}));
    }

    #[test]
    fn test_intermediate_gap_filled_with_empty_records() {
        let doc = from_pairs([("A[2].B", "x")]).unwrap();
        assert_eq!(to_json(&doc), json!({"A": [{}, {}, {"B": "x"}]}));
    }

    #[test]
    fn test_filler_slots_remain_addressable() {
        let doc = from_pairs([("A[3]", "d"), ("A[1].B", "b")]).unwrap();
        assert_eq!(to_json(&doc), json!({"A": [{}, {"B": "b"}, {}, "d"]}));
    }
}

mod conflicts {
    use super::*;

    #[test]
    fn test_leaf_then_record_fails_fast() {
        let err = from_pairs([("A", "1"), ("A.B", "2")]).unwrap_err();
        assert_eq!(
            err,
            Error::kind_conflict("A.B", "A", Kind::Record, Kind::Leaf)
        );
    }

    #[test]
    fn test_record_then_leaf_fails_fast() {
        let err = from_pairs([("A.B", "1"), ("A", "2")]).unwrap_err();
        assert_eq!(err, Error::kind_conflict("A", "A", Kind::Leaf, Kind::Record));
    }

    #[test]
    fn test_record_then_list_fails_fast() {
        let err = from_pairs([("A.B", "1"), ("A[]", "2")]).unwrap_err();
        assert!(matches!(err, Error::KindConflict { .. }));
    }

    #[test]
    fn test_list_then_record_fails_fast() {
        let err = from_pairs([("A[0]", "1"), ("A.B", "2")]).unwrap_err();
        assert!(matches!(err, Error::KindConflict { .. }));
    }

    #[test]
    fn test_conflict_message_names_key_and_kinds() {
        let err = from_pairs([("A", "1"), ("A.B", "2")]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`A.B`"));
        assert!(message.contains("expected record"));
        assert!(message.contains("found leaf"));
    }

    #[test]
    fn test_leaf_over_leaf_is_not_a_conflict() {
        let doc = from_pairs([("A.B", "1"), ("A.B", "2")]).unwrap();
        assert_eq!(to_json(&doc), json!({"A": {"B": "2"}}));
    }
}

#[test]
fn test_form_macro_matches_built_documents() {
    let doc = from_pairs([
        ("id", "/app"),
        ("container.docker.image", "nginx"),
        ("ports[0]", "80"),
        ("env[].key", "HOME"),
    ])
    .unwrap();

    assert_eq!(
        doc,
        form!({
            "id": "/app",
            "container": {"docker": {"image": "nginx"}},
            "ports": ["80"],
            "env": [{"key": "HOME"}]
        })
    );
}

#[test]
fn test_caller_side_coercion_boundary() {
    // The deserializer hands back opaque leaves; a submission handler
    // coerces them afterwards.
    let doc = from_pairs([("instances", "4"), ("uris", "http://a,http://b")]).unwrap();

    let instances: u32 = doc
        .get("instances")
        .and_then(|v| v.as_leaf())
        .and_then(|s| s.parse().ok())
        .unwrap();
    assert_eq!(instances, 4);

    let uris: Vec<&str> = doc
        .get("uris")
        .and_then(|v| v.as_leaf())
        .map(|s| s.split(',').collect())
        .unwrap();
    assert_eq!(uris, vec!["http://a", "http://b"]);
}
