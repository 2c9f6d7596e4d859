use bsmotion::editor::marks::MarkSet;
use bsmotion::editor::port::{CellSpan, MarkId};

#[test]
fn test_markset_creation() {
    let marks = MarkSet::new();
    assert!(marks.is_empty());
    assert_eq!(marks.get(MarkId(1)), None);
}

#[test]
fn test_add_and_get_mark() {
    let mut marks = MarkSet::new();
    let id = marks.add("Shade", &[CellSpan::new(2, 1, 5)]);

    let mark = marks.get(id).unwrap();
    assert_eq!(mark.group, "Shade");
    assert_eq!(mark.spans, vec![CellSpan::new(2, 1, 5)]);
    assert_eq!(marks.len(), 1);
}

#[test]
fn test_ids_are_never_reused() {
    let mut marks = MarkSet::new();
    let first = marks.add("A", &[]);
    marks.remove(first);
    let second = marks.add("A", &[]);
    assert_ne!(first, second);
}

#[test]
fn test_remove_unknown_mark() {
    let mut marks = MarkSet::new();
    assert!(marks.remove(MarkId(42)).is_none());
}

#[test]
fn test_list_marks_in_creation_order() {
    let mut marks = MarkSet::new();
    let a = marks.add("A", &[CellSpan::new(1, 1, 1)]);
    let b = marks.add("B", &[CellSpan::new(2, 1, 1)]);

    let list = marks.list();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].0, a);
    assert_eq!(list[1].0, b);
    assert_eq!(list[1].1.group, "B");
}

#[test]
fn test_newest_mark_wins() {
    let mut marks = MarkSet::new();
    marks.add("Shade", &[CellSpan::new(3, 1, 20)]);
    marks.add("Cursor", &[CellSpan::new(3, 5, 1)]);

    assert_eq!(marks.group_at(3, 5), Some("Cursor"));
    assert_eq!(marks.group_at(3, 6), Some("Shade"));
    assert_eq!(marks.group_at(3, 21), None);
    assert_eq!(marks.group_at(4, 5), None);
}

#[test]
fn test_spans_on_line() {
    let mut marks = MarkSet::new();
    marks.add(
        "Shade",
        &[CellSpan::new(1, 1, 10), CellSpan::new(2, 1, 10)],
    );
    marks.add("Cursor", &[CellSpan::new(2, 4, 1)]);

    let spans = marks.spans_on_line(2);
    assert_eq!(
        spans,
        vec![(CellSpan::new(2, 1, 10), "Shade"), (CellSpan::new(2, 4, 1), "Cursor")]
    );
    assert!(marks.spans_on_line(3).is_empty());
}

#[test]
fn test_clear_marks() {
    let mut marks = MarkSet::new();
    marks.add("A", &[CellSpan::new(1, 1, 1)]);
    marks.add("B", &[CellSpan::new(1, 2, 1)]);
    marks.clear();

    assert!(marks.is_empty());
    assert_eq!(marks.group_at(1, 1), None);
}
