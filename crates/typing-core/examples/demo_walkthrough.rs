use typing_core::{Action, RevealMode, Scene, build_timeline};

fn main() {
    let scene = Scene::default();
    let metadata = scene.metadata().unwrap();
    println!(
        "{} ({}x{}, {} frames @ {}fps)",
        scene.filename, metadata.width, metadata.height, metadata.duration_in_frames, metadata.fps
    );

    for frame in [0, 10, 27, 40, 60, 80, 90] {
        let snapshot = scene.snapshot(frame).unwrap();
        let cursor = if snapshot.cursor_visible { "|" } else { " " };
        let dropdown = snapshot
            .overlay
            .as_ref()
            .map(|o| format!("  [{} items @ col {}]", o.items.len(), o.anchor_column))
            .unwrap_or_default();
        println!("{frame:>3}: {:?}{cursor}{dropdown}", snapshot.text());
    }

    let timeline = build_timeline(&[
        Action::type_text("fn main() {"),
        Action::Newline,
        Action::type_at("    println!(\"hi\");", 2.0),
        Action::wait(10),
    ])
    .unwrap();
    for frame in (0..=timeline.total_frames).step_by(6) {
        println!(
            "{frame:>3}: {:?}",
            timeline.visible_text_with(frame, RevealMode::Weighted)
        );
    }
}
