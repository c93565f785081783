//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//! row 0      title + selected theme
//! row 1      theme selector (every theme, selected one highlighted)
//! row 2      [-] Pairs: N (min-max) [+]
//! row 3      scroll position (only when the grid does not fit)
//! rows 4..   card grid
//! last row   key help
//! ```

use crate::core::theme;
use crate::core::{Card, GameSnapshot};
use crate::fb::{display_width, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameAction, DEFAULT_CARD_HEIGHT, DEFAULT_CARD_WIDTH};

const HEADER_ROWS: u16 = 4;
const FOOTER_ROWS: u16 = 1;
const GAP_X: u16 = 1;

const MIN_CARD_W: u16 = 4;
const MIN_CARD_H: u16 = 3;
const MAX_CARD_W: u16 = 64;
const MAX_CARD_H: u16 = 32;

const TITLE_ROW: u16 = 0;
const SELECTOR_ROW: u16 = 1;
const PAIRS_ROW: u16 = 2;
const SCROLL_ROW: u16 = 3;

const FEWER_LABEL: &str = "[-]";
const MORE_LABEL: &str = "[+]";
const HELP: &str = "arrows move  space flip  +/- pairs  tab theme  n deal  q quit";

const BG: Rgb = Rgb::new(0, 0, 0);
const ORANGE: Rgb = Rgb::new(255, 140, 0);
const FACE_BG: Rgb = Rgb::new(245, 245, 245);
const CURSOR: Rgb = Rgb::new(255, 230, 90);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Card(usize),
    FewerPairs,
    MorePairs,
    /// Index into the theme registry
    Theme(usize),
}

impl HitTarget {
    /// The action a click on this target performs.
    pub fn action(self) -> GameAction {
        match self {
            HitTarget::Card(index) => GameAction::FlipAt(index),
            HitTarget::FewerPairs => GameAction::FewerPairs,
            HitTarget::MorePairs => GameAction::MorePairs,
            HitTarget::Theme(index) => GameAction::SelectTheme(index),
        }
    }
}

/// Card grid geometry for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub columns: usize,
    pub total_rows: usize,
    pub visible_rows: usize,
    /// First grid row on screen
    pub first_row: usize,
    pub card_w: u16,
    pub card_h: u16,
}

impl GridLayout {
    pub fn is_scrollable(&self) -> bool {
        self.total_rows > self.visible_rows
    }

    /// Top-left corner of card `index`, if it is on screen.
    pub fn card_origin(&self, index: usize) -> Option<(u16, u16)> {
        let row = index / self.columns;
        let col = index % self.columns;
        if row < self.first_row || row >= self.first_row + self.visible_rows {
            return None;
        }
        let x = self.origin_x + (col as u16) * (self.card_w + GAP_X);
        let y = self.origin_y + ((row - self.first_row) as u16) * self.card_h;
        Some((x, y))
    }

    /// Index of the card drawn at `(x, y)`, if any.
    pub fn card_at(&self, x: u16, y: u16, card_count: usize) -> Option<usize> {
        if x < self.origin_x || y < self.origin_y || self.card_h == 0 {
            return None;
        }
        let pitch_x = self.card_w + GAP_X;
        let dx = x - self.origin_x;
        let col = (dx / pitch_x) as usize;
        if dx % pitch_x >= self.card_w || col >= self.columns {
            return None;
        }
        let screen_row = ((y - self.origin_y) / self.card_h) as usize;
        if screen_row >= self.visible_rows {
            return None;
        }
        let index = (self.first_row + screen_row) * self.columns + col;
        (index < card_count).then_some(index)
    }
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    /// Card width in terminal columns, border included.
    card_w: u16,
    /// Card height in terminal rows, border included.
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(DEFAULT_CARD_WIDTH, DEFAULT_CARD_HEIGHT)
    }
}

impl GameView {
    /// Card size is clamped to `4x3..=64x32`: a bordered two-column symbol
    /// must fit, and grid arithmetic must stay within `u16`.
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.clamp(MIN_CARD_W, MAX_CARD_W),
            card_h: card_h.clamp(MIN_CARD_H, MAX_CARD_H),
        }
    }

    pub fn card_size(&self) -> (u16, u16) {
        (self.card_w, self.card_h)
    }

    /// Compute the grid for a snapshot. Scrolls so the cursor row is visible.
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> GridLayout {
        let count = snap.cards.len();
        let pitch_x = self.card_w + GAP_X;
        let fit = ((viewport.width.saturating_add(GAP_X)) / pitch_x).max(1) as usize;
        let columns = fit.min(count.max(1));

        let grid_w = (columns as u16) * pitch_x - GAP_X;
        let origin_x = viewport.width.saturating_sub(grid_w) / 2;

        let avail_h = viewport
            .height
            .saturating_sub(HEADER_ROWS + FOOTER_ROWS);
        let total_rows = count.div_ceil(columns);
        let visible_rows = ((avail_h / self.card_h) as usize).min(total_rows);

        let cursor_row = snap.cursor / columns;
        let first_row = if visible_rows == 0 || cursor_row < visible_rows {
            0
        } else {
            cursor_row + 1 - visible_rows
        };

        GridLayout {
            origin_x,
            origin_y: HEADER_ROWS,
            columns,
            total_rows,
            visible_rows,
            first_row,
            card_w: self.card_w,
            card_h: self.card_h,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::narrow(' ', CellStyle::new(Rgb::new(220, 220, 220), BG)));

        self.draw_title(fb, snap);
        self.draw_selector(fb, snap);
        self.draw_pair_controls(fb, snap);

        let layout = self.layout(snap, viewport);
        if layout.is_scrollable() {
            self.draw_scroll_position(fb, &layout);
        }
        for (index, card) in snap.cards.iter().enumerate() {
            if let Some((x, y)) = layout.card_origin(index) {
                self.draw_card(fb, x, y, card, index == snap.cursor);
            }
        }

        if viewport.height > HEADER_ROWS {
            let dim = CellStyle::new(Rgb::new(150, 150, 150), BG).dim();
            fb.put_str(0, viewport.height - 1, HELP, dim);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Resolve a click at `(x, y)` against the layout `render` would draw.
    pub fn hit_test(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<HitTarget> {
        match y {
            SELECTOR_ROW => selector_spans().find_map(|(i, start, end)| {
                (x >= start && x < end).then_some(HitTarget::Theme(i))
            }),
            PAIRS_ROW => {
                let (fewer, more) = pair_button_spans(snap);
                if x >= fewer.0 && x < fewer.1 {
                    Some(HitTarget::FewerPairs)
                } else if x >= more.0 && x < more.1 {
                    Some(HitTarget::MorePairs)
                } else {
                    None
                }
            }
            _ => self
                .layout(snap, viewport)
                .card_at(x, y, snap.cards.len())
                .map(HitTarget::Card),
        }
    }

    fn draw_title(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let title = CellStyle::new(ORANGE, BG).bold();
        let value = CellStyle::new(Rgb::new(220, 220, 220), BG);

        fb.put_str(0, TITLE_ROW, "MEMORIZE", title);
        let x = 10;
        match snap.theme_index {
            Some(i) => {
                fb.put_text(x, TITLE_ROW, theme::all()[i].name, value);
            }
            None => {
                let used = fb.put_str(x, TITLE_ROW, &snap.theme, value);
                let warn = CellStyle::new(Rgb::new(230, 90, 90), BG);
                let wx = x.saturating_add(used).saturating_add(1);
                fb.put_str(wx, TITLE_ROW, "(unknown theme)", warn);
            }
        }
    }

    fn draw_selector(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let normal = CellStyle::new(Rgb::new(170, 170, 170), BG);
        let selected = CellStyle::new(BG, ORANGE).bold();

        for (i, start, _) in selector_spans() {
            let style = if Some(i) == snap.theme_index {
                selected
            } else {
                normal
            };
            fb.put_text(start, SELECTOR_ROW, theme::all()[i].name, style);
        }
    }

    fn draw_pair_controls(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let enabled = CellStyle::new(ORANGE, BG).bold();
        let disabled = CellStyle::new(Rgb::new(90, 90, 90), BG).dim();
        let label = CellStyle::new(Rgb::new(220, 220, 220), BG);

        let (fewer, more) = pair_button_spans(snap);
        let pick = |ok: bool| if ok { enabled } else { disabled };

        fb.put_str(fewer.0, PAIRS_ROW, FEWER_LABEL, pick(snap.can_remove_pair()));
        let mut x = fewer.1 + 1;
        fb.put_str(x, PAIRS_ROW, "Pairs:", label);
        x += 7;
        x += fb.put_u32(x, PAIRS_ROW, snap.pair_count as u32, label.bold());
        x += 1;
        fb.put_char(x, PAIRS_ROW, '(', label);
        x += 1;
        x += fb.put_u32(x, PAIRS_ROW, snap.bounds.min as u32, label);
        fb.put_char(x, PAIRS_ROW, '-', label);
        x += 1;
        x += fb.put_u32(x, PAIRS_ROW, snap.bounds.max as u32, label);
        fb.put_char(x, PAIRS_ROW, ')', label);
        fb.put_str(more.0, PAIRS_ROW, MORE_LABEL, pick(snap.can_add_pair()));
    }

    fn draw_scroll_position(&self, fb: &mut FrameBuffer, layout: &GridLayout) {
        let style = CellStyle::new(Rgb::new(150, 150, 150), BG);
        let mut x = 0;
        fb.put_str(x, SCROLL_ROW, "Rows ", style);
        x += 5;
        x += fb.put_u32(x, SCROLL_ROW, (layout.first_row + 1) as u32, style);
        fb.put_char(x, SCROLL_ROW, '-', style);
        x += 1;
        let last = layout.first_row + layout.visible_rows;
        x += fb.put_u32(x, SCROLL_ROW, last as u32, style);
        fb.put_str(x, SCROLL_ROW, " of ", style);
        x += 4;
        fb.put_u32(x, SCROLL_ROW, layout.total_rows as u32, style);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &Card, focused: bool) {
        let edge = if focused { CURSOR } else { ORANGE };
        let mut border = CellStyle::new(edge, BG);
        if focused {
            border = border.bold();
        }
        self.draw_border(fb, x, y, self.card_w, self.card_h, border);

        let inner_w = self.card_w - 2;
        let inner_h = self.card_h - 2;
        if card.is_face_up() {
            let face = CellStyle::new(Rgb::new(20, 20, 20), FACE_BG);
            fb.fill_rect(x + 1, y + 1, inner_w, inner_h, ' ', face);
            let sx = x + 1 + inner_w.saturating_sub(2) / 2;
            let sy = y + 1 + inner_h.saturating_sub(1) / 2;
            fb.put_wide(sx, sy, card.content, face);
        } else {
            let back = CellStyle::new(ORANGE, ORANGE);
            fb.fill_rect(x + 1, y + 1, inner_w, inner_h, ' ', back);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

/// `(theme index, start column, end column)` of every selector entry.
fn selector_spans() -> impl Iterator<Item = (usize, u16, u16)> {
    let mut x = 0u16;
    theme::all().iter().enumerate().map(move |(i, t)| {
        let start = x;
        let end = start.saturating_add(display_width(t.name));
        x = end.saturating_add(2);
        (i, start, end)
    })
}

/// Column spans `[start, end)` of the fewer/more buttons.
fn pair_button_spans(snap: &GameSnapshot) -> ((u16, u16), (u16, u16)) {
    let fewer = (0, FEWER_LABEL.len() as u16);
    // "[-] Pairs: N (min-max) [+]"
    let text = 1 + 7 + digits(snap.pair_count) + 2 + digits(snap.bounds.min) + 1 + digits(snap.bounds.max) + 1;
    let more_start = fewer.1 + text + 1;
    (fewer, (more_start, more_start + MORE_LABEL.len() as u16))
}

fn digits(n: usize) -> u16 {
    let mut n = n;
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
