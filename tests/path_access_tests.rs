//! Integration tests for path parsing, `get` and `set`.

use pathquill::document::parser::parse_yaml;
use pathquill::path::{get, parse, set, AccessError, Path, PathError, Segment, SegmentFault};
use pathquill::{Node, NodeKind};

fn tree(yaml: &str) -> Node {
    parse_yaml(yaml).unwrap().into_root()
}

#[test]
fn test_missing_key_reports_key() {
    let root = tree(r#"{"a": 1}"#);
    let err = get(&root, "b").unwrap_err();
    assert_eq!(
        err,
        AccessError::NotFound {
            path: "b".to_string()
        }
    );
}

#[test]
fn test_index_bounds() {
    let root = tree("[10, 20, 30]");
    assert_eq!(get(&root, "[2]").unwrap(), &Node::from(30));

    let err = get(&root, "[3]").unwrap_err();
    assert_eq!(
        err,
        AccessError::IndexOutOfRange {
            path: "[3]".to_string(),
            index: 3,
            len: 3,
        }
    );
}

#[test]
fn test_broadcast_write() {
    let mut root = tree(r#"{"items": [{"x": 1}, {"x": 2}]}"#);
    set(&mut root, "items.x", Node::from(9)).unwrap();
    assert_eq!(get(&root, "items[0].x").unwrap(), &Node::from(9));
    assert_eq!(get(&root, "items[1].x").unwrap(), &Node::from(9));
}

#[test]
fn test_canonical_integer_rejection() {
    assert_eq!(
        parse("a[01]").unwrap_err(),
        PathError::InvalidSegment {
            prefix: "a[01]".to_string(),
            reason: SegmentFault::InvalidIndex,
        }
    );
    assert_eq!(parse("a[-1]").unwrap_err().prefix(), "a[-1]");
}

#[test]
fn test_nested_error_prefix() {
    let root = tree(r#"{"a": {"b": [1, 2]}}"#);
    let err = get(&root, "a.b[5]").unwrap_err();
    assert_eq!(err.path(), Some("a.b[5]"));
    assert!(matches!(err, AccessError::IndexOutOfRange { index: 5, len: 2, .. }));
    assert_eq!(
        err.to_string(),
        "index out of range: a.b[5] (index 5, length 2)"
    );
}

#[test]
fn test_error_prefix_excludes_later_segments() {
    let root = tree("a: {b: 1}");
    let err = get(&root, "a.c.d.e").unwrap_err();
    assert_eq!(err.path(), Some("a.c"));
}

#[test]
fn test_get_set_inverse() {
    let mut root = tree(
        r#"
server:
  hosts: [alpha, beta]
  port: 80
"#,
    );

    for (path, value) in [
        ("server.port", Node::from(8080)),
        ("server.hosts[1]", Node::from("gamma")),
        ("server.name", Node::from("edge")),
        ("server", Node::from(false)),
    ] {
        set(&mut root, path, value.clone()).unwrap();
        assert_eq!(get(&root, path).unwrap(), &value, "path {path}");
    }
}

#[test]
fn test_parse_round_trip() {
    for raw in ["a", "a.b[5]", "items[].x", "[0].[1]", "x..y", "a[0].b[]"] {
        let path = parse(raw).unwrap();
        assert_eq!(parse(&path.to_string()).unwrap(), path);
    }
}

#[test]
fn test_parsed_path_is_reusable() {
    let path: Path = "a[0]".parse().unwrap();
    assert_eq!(
        path.segments(),
        &[Segment::Key("a".to_string()), Segment::Index(0)]
    );

    let mut root = tree("a: [1]");
    set(&mut root, &path, Node::from(2)).unwrap();
    assert_eq!(get(&root, &path).unwrap(), &Node::from(2));
}

#[test]
fn test_mid_path_wildcard_fails_before_broadcast() {
    let mut root = tree("a: {b: [{c: {}}, {c: {}}]}");
    let err = set(&mut root, "a.b[].c.d", Node::from(1)).unwrap_err();
    assert_eq!(
        err,
        AccessError::NotAMapping {
            path: "a.b[].c".to_string(),
            found: NodeKind::Sequence,
        }
    );
}

#[test]
fn test_descending_through_scalar_fails() {
    let root = tree("a: 1");
    let err = get(&root, "a.b").unwrap_err();
    assert_eq!(
        err,
        AccessError::NotAMapping {
            path: "a.b".to_string(),
            found: NodeKind::Scalar,
        }
    );
}

#[test]
fn test_set_with_invalid_path_leaves_tree_untouched() {
    let mut root = tree("a: [1, 2]");
    root.mark_clean();
    let err = set(&mut root, "a[1x]", Node::from(0)).unwrap_err();
    assert!(matches!(err, AccessError::InvalidPath(_)));
    assert!(!root.has_changes());
}
