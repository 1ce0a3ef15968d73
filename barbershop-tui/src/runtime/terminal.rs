//! Terminal setup, double-buffered drawing and teardown with panic safety.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use unicode_width::UnicodeWidthChar;

use crate::buffer::{Buffer, Cell};

/// Owns the terminal while the page is shown; restores it on drop.
pub struct TerminalGuard {
    stdout: Stdout,
    current: Buffer,
    previous: Buffer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the default hook prints the panic
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide, EnableMouseCapture)?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Paint a frame with `f` and write only the cells that changed.
    pub fn draw<R>(&mut self, f: impl FnOnce(&mut Buffer) -> R) -> io::Result<R> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            // Force a full repaint: everything differs from a blank sentinel
            self.previous = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        let result = f(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);

        Ok(result)
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last: Option<(u16, u16)> = None;
        let mut last_width: u16 = 1;
        let mut pen = Cell::default();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            let sequential = matches!(last, Some((lx, ly)) if ly == y && lx + last_width == x);
            if !sequential {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != pen.fg {
                queue!(self.stdout, SetForegroundColor(cell.fg))?;
            }
            if cell.bg != pen.bg {
                queue!(self.stdout, SetBackgroundColor(cell.bg))?;
            }
            if cell.bold != pen.bold || cell.dim != pen.dim {
                queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                if cell.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
            }
            pen = *cell;

            write!(self.stdout, "{}", cell.char)?;
            last = Some((x, y));
            last_width = cell.char.width().unwrap_or(1).max(1) as u16;
        }

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Reset),
            SetBackgroundColor(Color::Reset)
        )?;
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, cursor::Show, LeaveAlternateScreen)?;
    Ok(())
}
