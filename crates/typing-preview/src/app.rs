//! Terminal playback of a scene.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use typing_core::{Frame, FrameSnapshot, Scene, TimingError, str_width};

use crate::config::PreviewConfig;

const GUTTER_WIDTH: u16 = 5;
const DROPDOWN_MAX_ITEMS: usize = 6;
const CURSOR_COLOR: Color = Color::Rgb(0x14, 0xb8, 0xa6);

/// Playback state.
pub struct App {
    scene: Scene,
    config: PreviewConfig,
    frame: Frame,
    first: Frame,
    last: Frame,
    paused: bool,
    should_quit: bool,
    pending: f64,
}

impl App {
    /// Play `scene` over `[first, last]`.
    pub fn new(scene: Scene, config: PreviewConfig, first: Frame, last: Frame) -> Self {
        let last = last.max(first);
        info!(first, last, speed = config.playback.speed, "starting playback");
        Self {
            scene,
            config,
            frame: first,
            first,
            last,
            paused: false,
            should_quit: false,
            pending: 0.0,
        }
    }

    fn frames_per_second(&self) -> f64 {
        f64::from(self.scene.fps.max(1)) * self.config.playback.speed
    }

    /// Wall-clock time of one animation frame at the current speed.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frames_per_second())
    }

    /// Move the playhead by however many frames `elapsed` covers.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }
        self.pending += elapsed.as_secs_f64() * self.frames_per_second();
        let whole = self.pending.floor();
        self.pending -= whole;
        self.seek(self.frame.saturating_add(whole as Frame));
    }

    fn seek(&mut self, frame: Frame) {
        if frame <= self.last {
            self.frame = frame.max(self.first);
        } else if self.config.playback.looping {
            debug!("looping playback");
            self.frame = self.first;
        } else {
            self.frame = self.last;
            self.paused = true;
        }
    }

    /// React to a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => {
                if !self.paused && self.frame >= self.last {
                    self.frame = self.first;
                }
                self.paused = !self.paused;
                self.pending = 0.0;
            }
            KeyCode::Left => {
                self.paused = true;
                self.frame = self.frame.saturating_sub(1).max(self.first);
            }
            KeyCode::Right => {
                self.paused = true;
                self.frame = self.frame.saturating_add(1).min(self.last);
            }
            KeyCode::Home => self.frame = self.first,
            KeyCode::End => self.frame = self.last,
            _ => {}
        }
    }

    /// Snapshot for the current playhead.
    pub fn snapshot(&self) -> Result<FrameSnapshot, TimingError> {
        self.scene.snapshot(self.frame)
    }

    /// Draw the editor window and status line.
    pub fn render(&self, frame: &mut ratatui::Frame<'_>, snapshot: &FrameSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        self.render_editor(frame, chunks[0], snapshot);
        self.render_status(frame, chunks[1]);
    }

    fn render_editor(&self, frame: &mut ratatui::Frame<'_>, area: Rect, snapshot: &FrameSnapshot) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.scene.filename));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let height = usize::from(inner.height);
        if height == 0 || inner.width == 0 {
            return;
        }

        // Keep the active (last) line in view.
        let skip = snapshot.lines.len().saturating_sub(height);
        let gutter = if self.config.display.line_numbers {
            GUTTER_WIDTH
        } else {
            0
        };

        let mut display_lines = Vec::with_capacity(height);
        let mut active_row = None;
        for (row, line) in snapshot.lines.iter().skip(skip).enumerate() {
            let mut spans = Vec::new();
            if gutter > 0 {
                spans.push(Span::styled(
                    format!("{:>4} ", line.index + 1),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::raw(line.text.clone()));

            let mut style = Style::default();
            if line.is_active {
                active_row = Some(row);
                style = style.bg(Color::Rgb(0x2a, 0x2d, 0x33));
                if snapshot.cursor_visible {
                    spans.push(Span::styled(
                        self.config.display.cursor_glyph.clone(),
                        Style::default()
                            .fg(CURSOR_COLOR)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
            }
            display_lines.push(Line::from(spans).style(style));
        }

        frame.render_widget(Paragraph::new(display_lines), inner);

        if let (Some(overlay), Some(row)) = (&snapshot.overlay, active_row) {
            let items: Vec<Line> = overlay
                .items
                .iter()
                .take(DROPDOWN_MAX_ITEMS)
                .enumerate()
                .map(|(i, item)| {
                    let style = if i == overlay.selected_index {
                        Style::default().bg(Color::Blue).fg(Color::White)
                    } else {
                        Style::default()
                    };
                    Line::from(format!(" {} {} ", item.emoji, item.name)).style(style)
                })
                .collect();

            let widest = overlay
                .items
                .iter()
                .map(|item| str_width(&item.emoji) + str_width(&item.name) + 3)
                .max()
                .unwrap_or(0);
            let width = to_cells(widest).saturating_add(2);
            let height = to_cells(items.len()).saturating_add(2);

            let x = inner
                .x
                .saturating_add(gutter)
                .saturating_add(to_cells(overlay.anchor_cell))
                .min(inner.right().saturating_sub(width));
            let y = inner.y.saturating_add(to_cells(row)).saturating_add(1);
            let popup = Rect::new(x, y, width, height).intersection(inner);
            if popup.height > 2 {
                frame.render_widget(Clear, popup);
                frame.render_widget(
                    Paragraph::new(items).block(Block::default().borders(Borders::ALL)),
                    popup,
                );
            }
        }
    }

    fn render_status(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut parts = Vec::new();
        if self.config.display.show_frame_counter {
            parts.push(format!("frame {}/{}", self.frame, self.last));
        }
        if self.paused {
            parts.push("paused".to_string());
        }
        parts.push(format!("x{}", self.config.playback.speed));
        parts.push("[space] play/pause  [←/→] step  [home/end] jump  [q] quit".to_string());

        let status = Paragraph::new(parts.join("  "))
            .style(Style::default().bg(Color::Blue).fg(Color::White));
        frame.render_widget(status, area);
    }
}

/// Terminal cells are `u16`; anything wider is clamped.
fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Drive `app` until the user quits.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        let snapshot = app.snapshot()?;
        terminal.draw(|f| app.render(f, &snapshot))?;

        if app.should_quit {
            break;
        }

        let timeout = app.frame_interval().saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key);
        }

        let now = Instant::now();
        app.advance(now - last_tick);
        last_tick = now;
    }

    Ok(())
}
