use bsmotion::editor::headless::HeadlessEditor;
use bsmotion::editor::port::{CellSpan, EditorPort, Position, WindowBounds};
use bsmotion::jump::overlay::{Overlay, ShadeRect, DEFAULT_CURSOR_GROUP, DEFAULT_SHADE_GROUP};
use bsmotion::jump::{HighlightGroups, OverlayRenderer, OverlayStrategy, Region};

fn window(top: usize, bottom: usize, width: usize) -> WindowBounds {
    WindowBounds { top, bottom, width }
}

fn rect(top: usize, bottom: usize, left: usize, right: usize) -> ShadeRect {
    ShadeRect {
        top,
        bottom,
        left,
        right,
    }
}

fn editor() -> HeadlessEditor {
    let line = "y".repeat(60);
    HeadlessEditor::new(&format!("{}\n", line).repeat(40), 60, 20)
}

#[test]
fn test_full_window_region_has_no_shade() {
    let region = Region::for_window(Position::new(10, 30), window(1, 20, 60));
    let overlay = Overlay::compute(&region, window(1, 20, 60));

    assert_eq!(overlay.cursor, CellSpan::new(10, 30, 1));
    assert!(overlay.shades.is_empty());
}

#[test]
fn test_four_shades_around_inner_region() {
    let region = Region::new(5, 12, 10, 40, Position::new(8, 20));
    let overlay = Overlay::compute(&region, window(1, 20, 60));

    assert_eq!(
        overlay.shades,
        vec![
            rect(1, 4, 1, 60),
            rect(13, 20, 1, 60),
            rect(5, 12, 1, 9),
            rect(5, 12, 41, 60),
        ]
    );
}

#[test]
fn test_shades_are_clipped_to_window_rows() {
    // buffer scope: region rows run past the visible window
    let region = Region::new(1, 100, 1, 30, Position::new(50, 15));
    let overlay = Overlay::compute(&region, window(41, 60, 60));

    assert_eq!(overlay.shades, vec![rect(41, 60, 31, 60)]);
}

#[test]
fn test_shaded_cells_are_outside_region() {
    let region = Region::new(3, 9, 7, 22, Position::new(4, 8));
    let overlay = Overlay::compute(&region, window(1, 12, 30));

    for shade in &overlay.shades {
        for span in shade.spans() {
            for col in span.col..span.col + span.len {
                assert!(!region.contains(Position::new(span.line, col)));
            }
        }
    }
    let shaded: usize = overlay.shades.iter().map(ShadeRect::area).sum();
    assert_eq!(shaded, 12 * 30 - 7 * 16);
}

#[test]
fn test_full_render_replaces_marks_and_redraws() {
    let mut editor = editor();
    let mut renderer = OverlayRenderer::default();
    assert_eq!(renderer.strategy(), OverlayStrategy::Full);

    renderer
        .render(&mut editor, &Region::new(5, 12, 10, 40, Position::new(8, 20)))
        .unwrap();
    assert_eq!(renderer.mark_count(), 5);
    assert_eq!(editor.state().marks().len(), 5);
    assert_eq!(editor.redraw_count(), 1);
    assert_eq!(
        editor.state().marks().group_at(8, 20),
        Some(DEFAULT_CURSOR_GROUP)
    );
    assert_eq!(editor.state().marks().group_at(1, 1), Some(DEFAULT_SHADE_GROUP));
    assert_eq!(editor.state().marks().group_at(8, 21), None);

    renderer
        .render(&mut editor, &Region::new(5, 8, 10, 40, Position::new(6, 20)))
        .unwrap();
    assert_eq!(editor.state().marks().len(), 5);
    assert_eq!(editor.redraw_count(), 2);
    assert_eq!(editor.state().marks().group_at(8, 20), None);
    assert_eq!(editor.state().marks().group_at(10, 20), Some(DEFAULT_SHADE_GROUP));
}

#[test]
fn test_incremental_render_keeps_unchanged_rects() {
    let mut editor = editor();
    let mut renderer =
        OverlayRenderer::new(OverlayStrategy::Incremental, HighlightGroups::default());

    renderer
        .render(&mut editor, &Region::new(5, 12, 10, 40, Position::new(8, 20)))
        .unwrap();
    let before: Vec<_> = editor.state().marks().list().iter().map(|(id, _)| *id).collect();

    // only the left edge moves
    renderer
        .render(&mut editor, &Region::new(5, 12, 20, 40, Position::new(8, 30)))
        .unwrap();
    let after: Vec<_> = editor.state().marks().list().iter().map(|(id, _)| *id).collect();

    assert_eq!(after.len(), 5);
    let kept = after.iter().filter(|id| before.contains(id)).count();
    // above, below and right shades survive
    assert_eq!(kept, 3);
    assert!(renderer.shaded().any(|r| *r == rect(5, 12, 1, 19)));
}

#[test]
fn test_clear_removes_every_mark() {
    let mut editor = editor();
    let mut renderer = OverlayRenderer::default();
    renderer
        .render(&mut editor, &Region::new(5, 12, 10, 40, Position::new(8, 20)))
        .unwrap();

    renderer.clear(&mut editor).unwrap();
    assert_eq!(renderer.mark_count(), 0);
    assert!(editor.state().marks().is_empty());

    // clearing again is harmless
    renderer.clear(&mut editor).unwrap();
}

#[test]
fn test_custom_groups() {
    let mut editor = editor();
    let groups = HighlightGroups {
        cursor: "Target".to_string(),
        shade: "Dim".to_string(),
    };
    let mut renderer = OverlayRenderer::new(OverlayStrategy::Full, groups);
    renderer
        .render(&mut editor, &Region::new(2, 20, 1, 60, Position::new(3, 3)))
        .unwrap();

    assert_eq!(editor.state().marks().group_at(3, 3), Some("Target"));
    assert_eq!(editor.state().marks().group_at(1, 3), Some("Dim"));
    assert_eq!(editor.window().unwrap(), window(1, 20, 60));
}
