//! Preview settings and scene loading.
//!
//! Settings come from `typing-preview.toml` (or `--config`), every section is optional and
//! falls back to its defaults. Scenes are JSON or TOML files chosen by extension.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use typing_core::Scene;

/// Settings file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "typing-preview.toml";

/// Top-level preview settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreviewConfig {
    /// Playback behavior.
    pub playback: PlaybackConfig,
    /// Terminal rendering.
    pub display: DisplayConfig,
}

/// Playback behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Multiplier applied to the scene's fps.
    pub speed: f64,
    /// Restart from the first frame after the last one.
    pub looping: bool,
}

/// Terminal rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the frame counter in the status line.
    pub show_frame_counter: bool,
    /// Draw a line-number gutter.
    pub line_numbers: bool,
    /// Glyph drawn for the cursor.
    pub cursor_glyph: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            looping: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_frame_counter: true,
            line_numbers: true,
            cursor_glyph: "▏".to_string(),
        }
    }
}

impl PreviewConfig {
    /// Load settings from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given (it must exist), else [`DEFAULT_CONFIG_FILE`] if present, else
    /// defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            debug!(path = %path.display(), "loading default config file");
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.playback.speed.is_finite() && self.playback.speed > 0.0) {
            bail!(
                "playback.speed must be a positive number, got {}",
                self.playback.speed
            );
        }
        Ok(())
    }
}

/// Load a scene from `path`, picking the format from the extension (`.json` or `.toml`).
pub fn load_scene(path: &Path) -> Result<Scene> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let scene = match ext.as_deref() {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON scene {}", path.display()))?,
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("failed to parse TOML scene {}", path.display()))?,
        _ => bail!(
            "unsupported scene format for {} (expected .json or .toml)",
            path.display()
        ),
    };

    info!(path = %path.display(), "loaded scene");
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: PreviewConfig = toml::from_str("[playback]\nlooping = true\n").unwrap();
        assert!(config.playback.looping);
        assert_eq!(config.playback.speed, 1.0);
        assert!(config.display.line_numbers);
        assert_eq!(config.display.cursor_glyph, "▏");
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let config: PreviewConfig = toml::from_str("[playback]\nspeed = 0.0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_scene_parses() {
        let scene: Scene = toml::from_str(
            r#"
            backgroundImage = "bg.png"
            filename = "notes.md"
            width = 640
            height = 480

            [script]
            kind = "actions"
            actions = [
                { type = "type", text = "hi", speed = 2.0 },
                { type = "wait", frames = 3 },
                { type = "newline" },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(scene.metadata().unwrap().duration_in_frames, 1 + 3 + 1 + 30);
    }
}
