//! Typing preview
//!
//! Inspect and play typing scenes in the terminal, built with crossterm and ratatui.
//!
//! # Usage
//!
//! ```bash
//! typing-preview frame 60                    # print the demo scene at frame 60
//! typing-preview --preset code metadata      # composition metadata of the code sample
//! typing-preview --scene intro.json dump --step 10
//! typing-preview --scene intro.toml play --loop
//! ```
//!
//! # Keys (play)
//!
//! - Space: play / pause
//! - Left/Right: step one frame
//! - Home/End: first / last frame
//! - q, Esc: quit
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

mod app;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write, stdout};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use typing_core::{Frame, FrameSnapshot, Scene};

use crate::app::{App, run_app};
use crate::config::{PreviewConfig, load_scene};

#[derive(Parser, Debug)]
#[command(name = "typing-preview", version, about = "Preview typing animation scenes")]
struct Cli {
    /// Scene file (.json or .toml); overrides --preset
    #[arg(long, global = true)]
    scene: Option<PathBuf>,

    /// Built-in scene used when --scene is not given
    #[arg(long, global = true, value_enum, default_value_t = Preset::Demo)]
    preset: Preset,

    /// Preview settings file (defaults to ./typing-preview.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// Emoji autocomplete demo
    Demo,
    /// Line-by-line code sample
    Code,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the editor at one frame
    Frame {
        #[arg(allow_negative_numbers = true)]
        frame: Frame,
        /// Emit the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print composition metadata
    Metadata {
        #[arg(long)]
        json: bool,
    },
    /// Print every K-th frame as text
    Dump {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        step: Frame,
    },
    /// Play the scene in the terminal
    Play {
        #[arg(long, default_value_t = 0)]
        from: Frame,
        /// Last frame (defaults to the composition duration)
        #[arg(long)]
        to: Option<Frame>,
        /// Playback speed multiplier (overrides the config file)
        #[arg(long)]
        speed: Option<f64>,
        /// Restart after the last frame (overrides the config file)
        #[arg(long = "loop")]
        looping: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = PreviewConfig::load_or_default(cli.config.as_deref())?;
    let scene = match &cli.scene {
        Some(path) => load_scene(path)?,
        None => match cli.preset {
            Preset::Demo => Scene::default(),
            Preset::Code => Scene::code_sample(),
        },
    };
    debug!(filename = %scene.filename, fps = scene.fps, "scene ready");

    match cli.command {
        Commands::Frame { frame, json } => {
            let snapshot = scene.snapshot(frame)?;
            let mut out = stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &snapshot)?;
                writeln!(out)?;
            } else {
                write_snapshot(&mut out, &snapshot, &config)?;
            }
        }
        Commands::Metadata { json } => {
            let metadata = scene.metadata()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&metadata)?);
            } else {
                println!("duration: {} frames", metadata.duration_in_frames);
                println!("fps:      {}", metadata.fps);
                println!("size:     {}x{}", metadata.width, metadata.height);
            }
        }
        Commands::Dump { step } => {
            let duration = scene.metadata()?.duration_in_frames;
            let mut out = stdout().lock();
            for frame in (0..duration).step_by(step as usize) {
                writeln!(out, "=== frame {frame} ===")?;
                write_snapshot(&mut out, &scene.snapshot(frame)?, &config)?;
            }
        }
        Commands::Play {
            from,
            to,
            speed,
            looping,
        } => {
            let mut config = config;
            if let Some(speed) = speed {
                anyhow::ensure!(
                    speed.is_finite() && speed > 0.0,
                    "--speed must be a positive number, got {speed}"
                );
                config.playback.speed = speed;
            }
            config.playback.looping |= looping;

            let last = match to {
                Some(to) => to,
                None => scene.metadata()?.duration_in_frames,
            };
            play(scene, config, from, last)?;
        }
    }

    Ok(())
}

fn play(scene: Scene, config: PreviewConfig, first: Frame, last: Frame) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(scene, config, first, last);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("playback finished");
    result
}

/// Plain-text rendering used by `frame` and `dump`.
fn write_snapshot(
    out: &mut impl Write,
    snapshot: &FrameSnapshot,
    config: &PreviewConfig,
) -> io::Result<()> {
    let display = &config.display;
    for line in &snapshot.lines {
        if display.line_numbers {
            write!(out, "{:>4} │ ", line.index + 1)?;
        }
        write!(out, "{}", line.text)?;
        if line.is_active && snapshot.cursor_visible {
            write!(out, "{}", display.cursor_glyph)?;
        }
        writeln!(out)?;
    }

    if let Some(overlay) = &snapshot.overlay {
        let indent = overlay.anchor_cell + if display.line_numbers { 7 } else { 0 };
        for (i, item) in overlay.items.iter().enumerate() {
            let marker = if i == overlay.selected_index { '>' } else { ' ' };
            writeln!(
                out,
                "{:indent$}{marker} {} {}",
                "",
                item.emoji,
                item.name,
                indent = indent
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use typing_core::{Script, Segment, Suggestion};

    fn render(snapshot: &FrameSnapshot, config: &PreviewConfig) -> String {
        let mut buf = Vec::new();
        write_snapshot(&mut buf, snapshot, config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli =
            Cli::try_parse_from(["typing-preview", "--preset", "code", "frame", "-5"]).unwrap();
        assert_eq!(cli.preset, Preset::Code);
        assert!(matches!(
            cli.command,
            Commands::Frame {
                frame: -5,
                json: false
            }
        ));

        let cli = Cli::try_parse_from(["typing-preview", "play", "--loop", "--to", "90"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Play {
                from: 0,
                to: Some(90),
                looping: true,
                ..
            }
        ));

        assert!(Cli::try_parse_from(["typing-preview", "dump", "--step", "0"]).is_err());
    }

    #[test]
    fn test_write_snapshot_with_dropdown() {
        let items = vec![Suggestion::new("👋", "wave"), Suggestion::new("🌊", "water")];
        let segment = Segment::typing("Hi :w", 0, 5).with_suggestions(items);
        let script = Script::new(vec![segment]).unwrap();
        let mut config = PreviewConfig::default();
        config.display.line_numbers = false;
        config.display.cursor_glyph = "|".to_string();

        let text = render(&script.snapshot_at(5), &config);
        assert_eq!(text, "Hi :w|\n   > 👋 wave\n     🌊 water\n");
    }

    #[test]
    fn test_write_snapshot_gutter() {
        let script = Script::new(vec![Segment::typing("a\nb", 0, 3)]).unwrap();
        let text = render(&script.snapshot_at(3), &PreviewConfig::default());
        assert_eq!(text, "   1 │ a\n   2 │ b▏\n");
    }
}
