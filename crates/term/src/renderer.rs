//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full redraw on the first frame and after a resize, otherwise only the
//! runs of cells that changed since the previous frame are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Glyph, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            other => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = other.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::new(out);
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            pen.draw(x, y, fb.get(x, y).unwrap_or_default())?;
        }
    }
    pen.finish()
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::new(out);
    for (x, y, len) in ChangedRuns::new(prev, next) {
        for dx in 0..len {
            pen.draw(x + dx, y, next.get(x + dx, y).unwrap_or_default())?;
        }
    }
    pen.finish()
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Terminal cursor and style as last emitted, so repeated commands are skipped.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
    at: Option<(u16, u16)>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            style: None,
            at: None,
        }
    }

    fn draw(&mut self, x: u16, y: u16, cell: Cell) -> Result<()> {
        let advance = match cell.glyph {
            // The terminal already filled it when printing the left half.
            Glyph::Continuation => return Ok(()),
            Glyph::Narrow(_) => 1,
            Glyph::Wide(_) => 2,
        };

        if self.at != Some((x, y)) {
            self.out.queue(cursor::MoveTo(x, y))?;
        }
        if self.style != Some(cell.style) {
            self.set_style(cell.style)?;
        }
        match cell.glyph {
            Glyph::Narrow(ch) => {
                self.out.queue(Print(ch))?;
            }
            Glyph::Wide(s) => {
                self.out.queue(Print(s))?;
            }
            Glyph::Continuation => {}
        }
        self.at = Some((x.saturating_add(advance), y));
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(SetForegroundColor(style.fg.into()))?;
        self.out.queue(SetBackgroundColor(style.bg.into()))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Runs of changed cells as `(x, y, len)`, row by row.
///
/// A run never starts on the right half of a wide glyph: it is widened to
/// include the glyph so the terminal redraws it whole. Buffers of different
/// sizes yield every row in full.
struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    x: u16,
    y: u16,
    full: bool,
}

impl<'a> ChangedRuns<'a> {
    fn new(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> Self {
        let full = prev.width() != next.width() || prev.height() != next.height();
        Self {
            prev,
            next,
            x: 0,
            y: 0,
            full,
        }
    }

    fn differs(&self, x: u16) -> bool {
        self.prev.get(x, self.y) != self.next.get(x, self.y)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = (u16, u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let w = self.next.width();
        while self.y < self.next.height() {
            if self.full {
                let y = self.y;
                self.y += 1;
                return Some((0, y, w));
            }

            while self.x < w && !self.differs(self.x) {
                self.x += 1;
            }
            if self.x == w {
                self.x = 0;
                self.y += 1;
                continue;
            }

            let mut start = self.x;
            let mid_glyph = self.next.get(start, self.y).map(|c| c.glyph) == Some(Glyph::Continuation);
            if mid_glyph && start > 0 {
                start -= 1;
            }
            while self.x < w && self.differs(self.x) {
                self.x += 1;
            }
            return Some((start, self.y, self.x - start));
        }
        None
    }
}
