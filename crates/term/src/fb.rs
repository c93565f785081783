//! Framebuffer and style types for terminal rendering.
//!
//! Card symbols are emoji, which terminals draw two columns wide. A wide
//! glyph occupies its own cell and the cell to its right, which holds a
//! [`Glyph::Continuation`] marker. The framebuffer keeps that pairing intact:
//! overwriting either half of a wide glyph blanks the other half.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// What a cell displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Narrow(char),
    /// A two-column grapheme (emoji); the next cell is its continuation.
    Wide(&'static str),
    /// Right half of the wide glyph in the previous cell.
    Continuation,
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: Glyph,
    pub style: CellStyle,
}

impl Cell {
    pub const fn narrow(ch: char, style: CellStyle) -> Self {
        Self {
            glyph: Glyph::Narrow(ch),
            style,
        }
    }

    /// The character of a narrow cell.
    pub fn ch(&self) -> Option<char> {
        match self.glyph {
            Glyph::Narrow(ch) => Some(ch),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::narrow(' ', CellStyle::default())
    }
}

const VS16: char = '\u{FE0F}';
const ZWJ: char = '\u{200D}';

fn is_wide_base(ch: char) -> bool {
    let c = ch as u32;
    (0x1F000..=0x1FAFF).contains(&c) || (0x2600..=0x27BF).contains(&c)
}

/// Split text into display clusters: `(text, is_wide)`.
///
/// A cluster is a base character plus any variation selector or
/// zero-width-joined continuation. Only emoji are treated as wide.
pub fn clusters(s: &str) -> Clusters<'_> {
    Clusters { rest: s }
}

pub struct Clusters<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Clusters<'a> {
    type Item = (&'a str, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.char_indices();
        let (_, base) = chars.next()?;
        let mut end = base.len_utf8();
        let mut wide = is_wide_base(base);
        let mut joined = false;

        for (i, ch) in chars {
            if ch == VS16 {
                wide = true;
            } else if ch == ZWJ {
                joined = true;
            } else if joined {
                joined = false;
            } else {
                break;
            }
            end = i + ch.len_utf8();
        }

        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some((head, wide))
    }
}

/// Number of terminal columns `s` occupies.
pub fn display_width(s: &str) -> u16 {
    clusters(s)
        .map(|(_, wide)| if wide { 2u16 } else { 1 })
        .fold(0u16, |acc, w| acc.saturating_add(w))
}

/// 2D framebuffer of styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one narrow cell, blanking any wide glyph it cuts in half.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(i) = self.idx(x, y) else {
            return;
        };
        self.detach(x, y, i);
        self.cells[i] = cell;
    }

    fn detach(&mut self, x: u16, y: u16, i: usize) {
        match self.cells[i].glyph {
            Glyph::Continuation if x > 0 => {
                let style = self.cells[i - 1].style;
                self.cells[i - 1] = Cell::narrow(' ', style);
            }
            Glyph::Wide(_) => {
                if let Some(j) = self.idx(x + 1, y) {
                    let style = self.cells[j].style;
                    self.cells[j] = Cell::narrow(' ', style);
                }
            }
            _ => {}
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell::narrow(ch, style));
    }

    /// Draw a two-column glyph at `x`. Skipped when it would not fit.
    pub fn put_wide(&mut self, x: u16, y: u16, text: &'static str, style: CellStyle) {
        if x.saturating_add(1) >= self.width || y >= self.height {
            return;
        }
        self.set(x, y, Cell::default());
        self.set(x + 1, y, Cell::default());
        if let (Some(i), Some(j)) = (self.idx(x, y), self.idx(x + 1, y)) {
            self.cells[i] = Cell {
                glyph: Glyph::Wide(text),
                style,
            };
            self.cells[j] = Cell {
                glyph: Glyph::Continuation,
                style,
            };
        }
    }

    /// Write text one character per cell. Returns the columns used.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx.saturating_sub(x)
    }

    /// Write text that may contain emoji. Returns the columns used.
    pub fn put_text(&mut self, x: u16, y: u16, s: &'static str, style: CellStyle) -> u16 {
        let mut cx = x;
        for (cluster, wide) in clusters(s) {
            if cx >= self.width {
                break;
            }
            if wide {
                self.put_wide(cx, y, cluster, style);
                cx = cx.saturating_add(2);
            } else {
                if let Some(ch) = cluster.chars().next() {
                    self.put_char(cx, y, ch, style);
                }
                cx = cx.saturating_add(1);
            }
        }
        cx - x
    }

    /// Write a decimal number. Returns the columns used.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0usize;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char, style);
        }
        len as u16
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// The visible text of one row (continuation cells contribute nothing).
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            match self.get(x, y).map(|c| c.glyph) {
                Some(Glyph::Narrow(ch)) => out.push(ch),
                Some(Glyph::Wide(s)) => out.push_str(s),
                _ => {}
            }
        }
        out
    }

    /// All rows joined by newlines.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            out.push_str(&self.row_text(y));
            out.push('\n');
        }
        out
    }
}
