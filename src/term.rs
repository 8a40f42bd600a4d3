//! Terminal frontend: the alternate screen stands in for the window.
//!
//! Each cell shows two vertical pixels using an upper half block, with the
//! top pixel as foreground and the bottom pixel as background color.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{execute, queue};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::{App, Command};
use crate::color::Rgb;
use crate::config::{VisualizerConfig, TARGET_FPS};
use crate::error::Result;
use crate::render::RenderResult;

const UPPER_HALF_BLOCK: char = '\u{2580}';

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self { stdout })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the visualizer until the user closes it.
pub fn run(config: &VisualizerConfig) -> Result<()> {
    let mut app = App::new(config, StdRng::from_entropy());
    let mut guard = TerminalGuard::enter()?;
    tracing::info!(elements = app.sequence().len(), "terminal frontend started");

    let frame_budget = Duration::from_secs(1) / TARGET_FPS;
    let mut last = Instant::now();

    loop {
        if let Some(command) = poll_command(frame_budget)? {
            if !app.handle(command) {
                break;
            }
        }

        let now = Instant::now();
        let result = app.frame(now - last);
        last = now;

        let (cols, rows) = terminal::size()?;
        queue!(guard.stdout, SetTitle(app.title()))?;
        draw(&mut guard.stdout, &result, cols as usize, rows as usize)?;
    }

    tracing::info!("terminal frontend closed");
    Ok(())
}

/// Wait up to `timeout` for input and keep only the most recent key press.
fn poll_command(timeout: Duration) -> Result<Option<Command>> {
    let mut command = None;
    let mut wait = timeout;
    while event::poll(wait)? {
        if let Event::Key(key) = event::read()? {
            if let Some(decoded) = key_command(key) {
                command = Some(decoded);
            }
        }
        wait = Duration::ZERO;
    }
    Ok(command)
}

fn key_command(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(c) => Command::from_key(c),
        _ => None,
    }
}

fn draw(out: &mut impl Write, result: &RenderResult, cols: usize, rows: usize) -> Result<()> {
    if cols == 0 || rows == 0 {
        return Ok(());
    }
    let pixels = result.rasterize(cols, rows * 2);

    for row in 0..rows {
        queue!(out, MoveTo(0, row as u16))?;
        let top = &pixels[row * 2 * cols..(row * 2 + 1) * cols];
        let bottom = &pixels[(row * 2 + 1) * cols..(row * 2 + 2) * cols];
        for (&fg, &bg) in top.iter().zip(bottom) {
            queue!(
                out,
                SetForegroundColor(to_color(fg)),
                SetBackgroundColor(to_color(bg)),
                Print(UPPER_HALF_BLOCK)
            )?;
        }
    }

    if let (Some(label), Some((col, row))) = (&result.label, result.label_cell(cols, rows)) {
        queue!(
            out,
            MoveTo(col as u16, row as u16),
            SetForegroundColor(to_color(label.color)),
            SetBackgroundColor(to_color(result.background)),
            Print(&label.text)
        )?;
    }

    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

#[inline]
fn to_color((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_bands;
    use crate::{Orientation, RenderConfig, Sequence};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_command(press(KeyCode::Char(' '), KeyModifiers::NONE)), Some(Command::ToggleOrientation));
        assert_eq!(key_command(press(KeyCode::Char('0'), KeyModifiers::NONE)), Some(Command::Shuffle));
        assert_eq!(key_command(press(KeyCode::Esc, KeyModifiers::NONE)), Some(Command::Quit));
        assert_eq!(key_command(press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Command::Quit));
        assert_eq!(key_command(press(KeyCode::Enter, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let key = KeyEvent::new_with_kind(KeyCode::Char('1'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(key_command(key), None);
    }

    #[test]
    fn test_draw_writes_label() {
        let seq = Sequence::initialize(8);
        let result = render_bands(&seq, None, Orientation::Vertical, true, &RenderConfig::default());
        let mut out = Vec::new();
        draw(&mut out, &result, 40, 20).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("SORTED!"));
        assert!(text.contains(UPPER_HALF_BLOCK));
    }

    #[test]
    fn test_draw_empty_terminal() {
        let seq = Sequence::initialize(8);
        let result = render_bands(&seq, None, Orientation::Vertical, false, &RenderConfig::default());
        let mut out = Vec::new();
        draw(&mut out, &result, 0, 0).unwrap();
        assert!(out.is_empty());
    }
}
