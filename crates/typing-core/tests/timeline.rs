use typing_core::{Action, RevealMode, Script, TimingError, build_timeline, compute_editor_state};

#[test]
fn test_total_frames_is_sum_of_durations() {
    let timeline = build_timeline(&[
        Action::type_at("ab", 1.0),
        Action::wait(5),
        Action::Newline,
    ])
    .unwrap();

    assert_eq!(timeline.total_frames, 8);
    assert_eq!(timeline.entries.len(), 3);
    assert_eq!(
        (timeline.entries[0].start_frame, timeline.entries[0].end_frame),
        (0, 2)
    );
    assert_eq!(
        (timeline.entries[1].start_frame, timeline.entries[1].end_frame),
        (2, 7)
    );
    assert_eq!(
        (timeline.entries[2].start_frame, timeline.entries[2].end_frame),
        (7, 8)
    );
}

#[test]
fn test_type_duration_rounds_up() {
    let timeline = build_timeline(&[Action::type_at("abcde", 2.0)]).unwrap();
    assert_eq!(timeline.total_frames, 3);

    let timeline = build_timeline(&[Action::type_text("abc")]).unwrap();
    assert_eq!(timeline.total_frames, 3);
}

#[test]
fn test_empty_type_occupies_one_frame() {
    let timeline = build_timeline(&[Action::type_text(""), Action::type_text("x")]).unwrap();
    assert_eq!(timeline.total_frames, 2);
    assert_eq!(timeline.visible_text(1), "");
    assert_eq!(timeline.visible_text(2), "x");
}

#[test]
fn test_duration_counts_characters_not_bytes() {
    let timeline = build_timeline(&[Action::type_text("👋你")]).unwrap();
    assert_eq!(timeline.total_frames, 2);
    assert_eq!(timeline.visible_text(1), "👋");
}

#[test]
fn test_invalid_speed_is_rejected() {
    let err = build_timeline(&[Action::type_text("ok"), Action::type_at("x", 0.0)]).unwrap_err();
    assert!(matches!(err, TimingError::InvalidSpeed { index: 1, .. }));

    let err = build_timeline(&[Action::type_at("x", -2.0)]).unwrap_err();
    assert!(matches!(err, TimingError::InvalidSpeed { index: 0, .. }));

    let err = build_timeline(&[Action::type_at("x", f64::NAN)]).unwrap_err();
    assert!(matches!(err, TimingError::InvalidSpeed { index: 0, .. }));
}

#[test]
fn test_negative_wait_is_rejected() {
    let err = build_timeline(&[Action::wait(-1)]).unwrap_err();
    assert_eq!(
        err,
        TimingError::NegativeWait {
            index: 0,
            frames: -1
        }
    );
}

#[test]
fn test_visible_text_linear_reveal() {
    let timeline = build_timeline(&[
        Action::type_at("abcd", 2.0),
        Action::Newline,
        Action::type_text("ef"),
    ])
    .unwrap();

    assert_eq!(timeline.visible_text(-5), "");
    assert_eq!(timeline.visible_text(0), "");
    assert_eq!(timeline.visible_text(1), "ab");
    assert_eq!(timeline.visible_text(2), "abcd\n");
    assert_eq!(timeline.visible_text(3), "abcd\n");
    assert_eq!(timeline.visible_text(4), "abcd\ne");
    assert_eq!(timeline.visible_text(5), "abcd\nef");
    assert_eq!(timeline.visible_text(500), "abcd\nef");
}

#[test]
fn test_visible_text_with_weighted_reveal_completes_on_time() {
    let timeline = build_timeline(&[Action::type_text("Hello. World")]).unwrap();
    let end = timeline.total_frames;
    assert_eq!(timeline.visible_text_with(0, RevealMode::Weighted), "");
    assert_eq!(
        timeline.visible_text_with(end, RevealMode::Weighted),
        "Hello. World"
    );
}

#[test]
fn test_zero_wait_is_dropped_from_segments() {
    let timeline = build_timeline(&[Action::type_text("a"), Action::wait(0), Action::Newline])
        .unwrap();
    let segments = timeline.to_segments();
    assert_eq!(segments.len(), 2);
    assert!(Script::new(segments).is_ok());
}

#[test]
fn test_segment_conversion_matches_visible_text() {
    let timeline = build_timeline(&[
        Action::type_at("fn main() {", 1.5),
        Action::Newline,
        Action::wait(4),
        Action::type_at("    println!(\"hi\");", 3.0),
        Action::Newline,
        Action::type_text("}"),
    ])
    .unwrap();
    let segments = timeline.to_segments();

    for frame in -2..timeline.total_frames + 3 {
        assert_eq!(
            compute_editor_state(frame, &segments).text,
            timeline.visible_text(frame),
            "frame {frame}"
        );
    }
}

#[test]
fn test_timeline_is_not_mutated_by_queries() {
    let timeline = build_timeline(&[Action::type_text("abc"), Action::wait(2)]).unwrap();
    let before = timeline.clone();
    let _ = timeline.visible_text(2);
    let _ = timeline.to_segments();
    assert_eq!(timeline, before);
}

#[test]
fn test_overflowing_timeline_is_rejected() {
    let result = build_timeline(&[Action::type_at("a", 1e-300), Action::wait(1)]);
    assert_eq!(result, Err(TimingError::FrameOverflow { index: 1 }));

    let timeline = build_timeline(&[Action::type_at("a", 1e-300)]).unwrap();
    assert_eq!(timeline.total_frames, i64::MAX);
    assert_eq!(timeline.visible_text(i64::MAX), "a");
}
