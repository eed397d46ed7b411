use typing_core::{RevealMode, char_weights, linear_char_count, typed_char_count};

const SAMPLES: [&str; 5] = [
    "Hello",
    "Hello. How are you? Fine; thanks!",
    "fn main() {\n    println!(\"hi\");\n}",
    "你好，世界 👋 emoji",
    "a",
];

#[test]
fn test_zero_elapsed_reveals_nothing() {
    for text in SAMPLES {
        for duration in [1, 2, 10, 97] {
            assert_eq!(typed_char_count(0, duration, text), 0, "{text:?} / {duration}");
        }
    }
}

#[test]
fn test_full_duration_reveals_everything() {
    for text in SAMPLES {
        let len = text.chars().count();
        for duration in [1, 2, 10, 97] {
            assert_eq!(typed_char_count(duration, duration, text), len);
            assert_eq!(typed_char_count(duration + 50, duration, text), len);
        }
    }
}

#[test]
fn test_reveal_is_monotonic_in_elapsed() {
    for text in SAMPLES {
        let duration = 60;
        let mut previous = 0;
        for elapsed in 0..=duration {
            let count = typed_char_count(elapsed, duration, text);
            assert!(
                count >= previous,
                "{text:?}: {count} < {previous} at {elapsed}"
            );
            previous = count;
        }
    }
}

#[test]
fn test_reveal_is_deterministic() {
    for text in SAMPLES {
        for elapsed in 0..40 {
            assert_eq!(
                typed_char_count(elapsed, 40, text),
                typed_char_count(elapsed, 40, text)
            );
        }
    }
}

#[test]
fn test_weighted_reveal_differs_from_linear_somewhere() {
    // Weighting exists to make pacing uneven; with a sentence break it must diverge from a
    // uniform reveal at some frame.
    let text = "Hi. This is a slightly longer sentence to type";
    let len = text.chars().count();
    let duration = 90;
    let diverges = (1..duration)
        .any(|e| typed_char_count(e, duration, text) != linear_char_count(e, duration, len));
    assert!(diverges);
}

#[test]
fn test_weight_count_matches_char_count() {
    for text in SAMPLES {
        assert_eq!(char_weights(text).len(), text.chars().count());
    }
    assert!(char_weights("").is_empty());
}

#[test]
fn test_sentence_end_slows_next_character() {
    // Same character at the same index: only the preceding character differs.
    let after_period = char_weights(".x")[1];
    let after_letter = char_weights("ax")[1];
    let after_space = char_weights(" x")[1];
    assert!((after_period / after_letter - 3.0).abs() < 1e-9);
    assert!((after_space / after_letter - 1.4).abs() < 1e-9);
}

#[test]
fn test_reveal_modes_agree_on_bounds() {
    for mode in [RevealMode::Weighted, RevealMode::Linear, RevealMode::Instant] {
        assert_eq!(mode.char_count(-1, 10, "abc"), 0, "{mode:?}");
        assert_eq!(mode.char_count(10, 10, "abc"), 3, "{mode:?}");
    }
}
