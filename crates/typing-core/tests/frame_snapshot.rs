//! Frame snapshot tests
//!
//! End-to-end: from a script to the per-frame payload a renderer paints.

use pretty_assertions::assert_eq;
use typing_core::{
    FrameSnapshot, LineTiming, Script, Segment, Suggestion, demo_segments, generate_line_timings,
};

#[test]
fn test_multiline_text_splits_with_last_line_active() {
    let segments = vec![Segment::typing("fn main() {\n    body", 0, 10)];
    let snapshot = FrameSnapshot::from_segments(10, &segments);

    assert_eq!(snapshot.lines.len(), 2);
    assert_eq!(snapshot.lines[0].text, "fn main() {");
    assert!(!snapshot.lines[0].is_active);
    assert_eq!(snapshot.lines[1].text, "    body");
    assert!(snapshot.lines[1].is_active);
    assert_eq!(snapshot.active_line, Some(1));
    assert_eq!(snapshot.text(), "fn main() {\n    body");
}

#[test]
fn test_trailing_newline_opens_empty_active_line() {
    let segments = vec![Segment::typing("abc\n", 0, 4)];
    let snapshot = FrameSnapshot::from_segments(4, &segments);
    assert_eq!(snapshot.lines.len(), 2);
    assert_eq!(snapshot.active().map(|l| l.text.as_str()), Some(""));
}

#[test]
fn test_overlay_anchored_at_last_colon_of_active_line() {
    let items = vec![Suggestion::new("👋", "wave"), Suggestion::new("🐸", "frog wave")];
    let typed = Segment::typing("a: b\n你好 :wa", 0, 5).with_suggestions(items.clone());
    let segments = vec![typed];
    let snapshot = FrameSnapshot::from_segments(5, &segments);
    let overlay = snapshot.overlay.expect("overlay");

    assert_eq!(overlay.items, items);
    assert_eq!(overlay.selected_index, 0);
    assert_eq!(overlay.selected(), Some(&items[0]));
    assert_eq!(overlay.anchor_column, 3);
    assert_eq!(overlay.anchor_cell, 5);
}

#[test]
fn test_overlay_without_trigger_anchors_at_cursor() {
    let items = vec![Suggestion::new("💕", "ty")];
    let segments = vec![Segment::typing("Hello", 0, 5).with_suggestions(items)];
    let overlay = FrameSnapshot::from_segments(5, &segments)
        .overlay
        .expect("overlay");
    assert_eq!(overlay.anchor_column, 5);
}

#[test]
fn test_no_overlay_without_suggestions() {
    let segments = vec![Segment::typing("a:b", 0, 3)];
    assert!(FrameSnapshot::from_segments(3, &segments).overlay.is_none());
}

#[test]
fn test_cursor_solid_while_typing_then_blinks() {
    let segments = vec![Segment::typing("abcdefghij", 0, 10), Segment::pause(10, 100)];

    for frame in 0..25 {
        assert!(
            FrameSnapshot::from_segments(frame, &segments).cursor_visible,
            "frame {frame}"
        );
    }
    // Activity ended at frame 10: hidden for [25, 40), visible again at [40, 55).
    assert!(!FrameSnapshot::from_segments(25, &segments).cursor_visible);
    assert!(!FrameSnapshot::from_segments(39, &segments).cursor_visible);
    assert!(FrameSnapshot::from_segments(40, &segments).cursor_visible);
}

#[test]
fn test_demo_snapshot_sequence() {
    let script = Script::new(demo_segments()).unwrap();

    let open = script.snapshot_at(60);
    assert_eq!(open.text(), "Hello :wa");
    let overlay = open.overlay.expect("dropdown open while typing :wa");
    assert_eq!(overlay.items[0], Suggestion::new("👋", "wave"));
    assert_eq!(overlay.anchor_column, 6);

    let accepted = script.snapshot_at(90);
    assert_eq!(accepted.text(), "Hello 👋");
    assert!(accepted.overlay.is_none());
    assert!(accepted.cursor_visible);
    assert_eq!(accepted.lines[0].visual_width(), 8);
}

#[test]
fn test_line_variant_omits_unstarted_lines() {
    let lines = ["const a = 1;", "", "const b = 2;"];
    let timings = generate_line_timings(&lines, 1.5, 8).unwrap();

    let first = FrameSnapshot::from_lines(4, &lines, &timings);
    assert_eq!(first.lines.len(), 1);
    assert_eq!(first.lines[0].text, "const ");
    assert_eq!(first.active_line, Some(0));
    assert!(first.overlay.is_none());

    let end = timings[2].start_frame + timings[2].duration_in_frames;
    let done = FrameSnapshot::from_lines(end, &lines, &timings);
    assert_eq!(done.text(), "const a = 1;\n\nconst b = 2;");
    assert_eq!(done.active_line, Some(2));
    assert_eq!(done.lines.iter().filter(|l| l.is_active).count(), 1);
}

#[test]
fn test_line_variant_before_start_is_empty() {
    let lines = ["x"];
    let timings = [LineTiming {
        start_frame: 10,
        duration_in_frames: 1,
    }];
    let snapshot = FrameSnapshot::from_lines(3, &lines, &timings);
    assert!(snapshot.lines.is_empty());
    assert_eq!(snapshot.active_line, None);
    assert_eq!(snapshot.text(), "");
}

#[test]
fn test_line_variant_blinks_from_frame_zero() {
    let lines = ["x"];
    let timings = [LineTiming {
        start_frame: 0,
        duration_in_frames: 1,
    }];
    assert!(FrameSnapshot::from_lines(0, &lines, &timings).cursor_visible);
    assert!(!FrameSnapshot::from_lines(15, &lines, &timings).cursor_visible);
    assert!(FrameSnapshot::from_lines(30, &lines, &timings).cursor_visible);
}
