//! Terminal front end built on crossterm + ratatui
//!
//! Draw calls are buffered and painted onto a ratatui canvas whose
//! coordinate space is the playfield, so the whole lane scales to the
//! terminal window. Audio cues show up as a short-lived status line.

use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Color as TermColor, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Rectangle};
use ratatui::widgets::{Block, Borders};
use ratatui::Terminal;

use crate::core::error::Result;
use crate::core::types::{Color, Point, Rect, Size};
use crate::presentation::recording::DrawCommand;
use crate::presentation::{palette, InputEvent, PresentationSink, SoundId};

/// Ticks a sound cue stays on screen
const CUE_DURATION_TICKS: u32 = 45;

pub struct TerminalSink {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    playfield: Size,
    frame: Vec<DrawCommand>,
    cue: Option<(&'static str, u32)>,
    last_tick: Instant,
}

impl TerminalSink {
    /// Take over the terminal (raw mode, alternate screen).
    pub fn new(playfield: Size) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            playfield,
            frame: Vec::new(),
            cue: None,
            last_tick: Instant::now(),
        })
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Key bindings: Space spawns, `q` fires, `w` levels up, Esc or Ctrl-C quits.
fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char(' ') => Some(InputEvent::SpawnFriendlyRequested),
        KeyCode::Char('q') => Some(InputEvent::FireProjectileRequested),
        KeyCode::Char('w') => Some(InputEvent::LevelUpRequested),
        _ => None,
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}

fn cue_text(sound: SoundId) -> &'static str {
    match sound {
        SoundId::LevelUpSuccess => "Money level up!",
        SoundId::LevelUpFailure => "Cannot level up",
    }
}

impl PresentationSink for TerminalSink {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                events.extend(map_key(&key));
            }
        }
        Ok(events)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.frame.push(DrawCommand::Rect { rect, color });
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) {
        self.frame.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn play_sound(&mut self, sound: SoundId) {
        tracing::debug!("Sound cue: {:?}", sound);
        self.cue = Some((cue_text(sound), CUE_DURATION_TICKS));
    }

    fn present(&mut self) -> Result<()> {
        let commands = std::mem::take(&mut self.frame);
        let width = f64::from(self.playfield.width);
        let height = f64::from(self.playfield.height);
        let field = Rect::at(Point::default(), self.playfield);

        // A full-playfield rectangle is the clear colour, not an outline.
        let background = commands
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::Rect { rect, color } if *rect == field => Some(*color),
                _ => None,
            })
            .unwrap_or(palette::BACKGROUND);

        let cue = self.cue.map(|(text, _)| text);
        self.cue = self
            .cue
            .and_then(|(text, left)| (left > 1).then_some((text, left - 1)));

        self.terminal.draw(|frame| {
            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Lane Battle  [Space] spawn  [q] fire  [w] level up  [Esc] quit "),
                )
                .marker(Marker::Braille)
                .background_color(term_color(background))
                .x_bounds([0.0, width])
                .y_bounds([0.0, height])
                .paint(|ctx| {
                    // Canvas y grows upward; playfield y grows downward.
                    for cmd in &commands {
                        match cmd {
                            DrawCommand::Rect { rect, .. } if *rect == field => {}
                            DrawCommand::Rect { rect, color } => ctx.draw(&Rectangle {
                                x: f64::from(rect.x),
                                y: height - f64::from(rect.bottom()),
                                width: f64::from(rect.width),
                                height: f64::from(rect.height),
                                color: term_color(*color),
                            }),
                            DrawCommand::Text {
                                text,
                                position,
                                color,
                            } => ctx.print(
                                f64::from(position.x),
                                height - f64::from(position.y),
                                Line::from(Span::styled(
                                    text.clone(),
                                    Style::default().fg(term_color(*color)),
                                )),
                            ),
                        }
                    }
                    if let Some(text) = cue {
                        ctx.print(
                            width / 2.0 - 60.0,
                            40.0,
                            Line::from(Span::styled(
                                text,
                                Style::default().fg(term_color(palette::TEXT)),
                            )),
                        );
                    }
                });
            frame.render_widget(canvas, frame.size());
        })?;

        Ok(())
    }

    fn wait_next_tick(&mut self, tick_rate: u32) {
        let step = Duration::from_secs_f64(1.0 / f64::from(tick_rate.max(1)));
        let elapsed = self.last_tick.elapsed();
        if elapsed < step {
            thread::sleep(step - elapsed);
        }
        self.last_tick = Instant::now();
    }
}
