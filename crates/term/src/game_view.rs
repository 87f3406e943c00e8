//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board frame reserves a one-cell ring between the border and the
//! tiles. That ring is where border-lane paths run, so a match routed
//! around the outside stays visible.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BoardLayout, Phase, Pos, TileKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const SELECTED_BG: Rgb = Rgb::new(200, 170, 40);
const HINT_BG: Rgb = Rgb::new(40, 110, 60);
const CURSOR_BG: Rgb = Rgb::new(90, 90, 110);

/// A lightweight terminal renderer for the tile board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Frame geometry for one render pass
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    layout: BoardLayout,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where board cell `(0, 0)` lands for a board of `size` in `viewport`
    ///
    /// Pointer input uses this to turn a click back into a position.
    pub fn layout(&self, size: u8, viewport: Viewport) -> BoardLayout {
        self.frame(size, viewport).layout
    }

    fn frame(&self, size: u8, viewport: Viewport) -> Frame {
        // Board plus the lane ring on each side, plus the border.
        let w = (size as u16 + 2) * self.cell_w + 2;
        let h = (size as u16 + 2) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        let layout = BoardLayout {
            origin_x: x + 1 + self.cell_w,
            origin_y: y + 1 + self.cell_h,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        };
        Frame { x, y, w, h, layout }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_cursor(snap, None, viewport, fb);
    }

    pub fn render_into_with_cursor(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Pos>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(snap.size, viewport);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        fb.draw_box(
            frame.x,
            frame.y,
            frame.w,
            frame.h,
            CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG),
        );

        if snap.phase == Phase::Menu {
            self.draw_menu(fb, &frame);
            return;
        }

        for y in 0..snap.size as i8 {
            for x in 0..snap.size as i8 {
                let pos = Pos::new(x, y);
                match snap.kind_at(x, y) {
                    Some(kind) => {
                        let bg = if snap.is_selected(pos) {
                            SELECTED_BG
                        } else if snap.is_hinted(pos) {
                            HINT_BG
                        } else if cursor == Some(pos) {
                            CURSOR_BG
                        } else {
                            PLAY_BG
                        };
                        self.draw_tile(fb, &frame.layout, pos, kind, bg);
                    }
                    None => {
                        let bg = if cursor == Some(pos) { CURSOR_BG } else { PLAY_BG };
                        let style = CellStyle::new(Rgb::new(90, 90, 100), bg).dim();
                        self.fill_cell(fb, &frame.layout, pos, '·', style);
                    }
                }
            }
        }

        if let Some(points) = snap.pending_path.as_ref() {
            self.draw_path(fb, &frame.layout, points);
        }

        self.draw_side_panel(fb, snap, viewport, &frame);

        if snap.phase == Phase::GameOver {
            self.draw_game_over(fb, snap, &frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal cell of grid position `pos`; lanes (`-1`, `size`) included
    fn cell_origin(&self, layout: &BoardLayout, pos: Pos) -> (u16, u16) {
        let px = layout.origin_x as i32 + pos.x as i32 * layout.cell_w as i32;
        let py = layout.origin_y as i32 + pos.y as i32 * layout.cell_h as i32;
        (px.max(0) as u16, py.max(0) as u16)
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        pos: Pos,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(layout, pos);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        pos: Pos,
        kind: TileKind,
        bg: Rgb,
    ) {
        let style = CellStyle::new(kind_color(kind), bg).bold();
        self.fill_cell(fb, layout, pos, kind_glyph(kind), style);
    }

    /// Box-drawing trace through every waypoint
    fn draw_path(&self, fb: &mut FrameBuffer, layout: &BoardLayout, points: &[Pos]) {
        let style = CellStyle::new(Rgb::new(255, 240, 120), PLAY_BG).bold();

        for seg in points.windows(2) {
            let (a, b) = (seg[0], seg[1]);
            let (dx, dy) = ((b.x - a.x).signum(), (b.y - a.y).signum());
            let mut p = Pos::new(a.x + dx, a.y + dy);
            while p != b {
                let (px, py) = self.cell_origin(layout, p);
                if dy == 0 {
                    fb.fill_rect(px, py, self.cell_w, 1, '─', style);
                } else {
                    fb.put_char(px, py, '│', style);
                }
                p = Pos::new(p.x + dx, p.y + dy);
            }
        }

        let last = points.len().saturating_sub(1);
        for (i, &p) in points.iter().enumerate() {
            let prev = (i > 0).then(|| points[i - 1]);
            let next = (i < last).then(|| points[i + 1]);
            let ch = match (prev, next) {
                (Some(a), Some(b)) => corner_glyph(p, a, b),
                _ => '◦',
            };
            let (px, py) = self.cell_origin(layout, p);
            fb.put_char(px, py, ch, style);
            let goes_right = [prev, next].into_iter().flatten().any(|q| q.x > p.x);
            if goes_right && self.cell_w > 1 {
                fb.fill_rect(px + 1, py, self.cell_w - 1, 1, '─', style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: &Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "TIME", label);
        let time_style = CellStyle {
            fg: time_color(snap.time_left_secs),
            ..value
        };
        fb.put_u32(panel_x, y + 1, snap.time_left_secs, time_style);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "TILES", label);
        fb.put_u32(panel_x, y + 1, snap.remaining_tiles, value);
        y = y.saturating_add(3);

        let help = value.dim();
        for line in ["? hint", "q quit"] {
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, frame: &Frame) {
        let title = CellStyle::new(Rgb::new(255, 255, 255), PLAY_BG).bold();
        let text = CellStyle::new(Rgb::new(200, 200, 210), PLAY_BG);
        let prompt = CellStyle::new(Rgb::new(240, 90, 90), PLAY_BG).bold();

        let lines: [(&str, CellStyle); 6] = [
            ("LINK UP", title),
            ("", text),
            ("Match two equal tiles", text),
            ("Path: at most 2 bends", text),
            ("", text),
            ("SPACE to start", prompt),
        ];
        let top = frame.y + frame.h.saturating_sub(lines.len() as u16) / 2;
        for (i, (line, style)) in lines.iter().enumerate() {
            fb.put_str_centered(frame.x, top + i as u16, frame.w, line, *style);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: &Frame) {
        let (headline, color) = if snap.won {
            ("YOU WIN!", Rgb::new(100, 220, 120))
        } else {
            ("GAME OVER", Rgb::new(230, 80, 80))
        };
        let style = CellStyle::new(color, SCREEN_BG).bold();
        let plain = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG);

        let mid_y = frame.y.saturating_add(frame.h / 2);
        fb.put_str_centered(frame.x, mid_y.saturating_sub(1), frame.w, headline, style);

        // "SCORE n" without formatting into a String.
        let line_w = 6 + digit_count(snap.score);
        let x = frame.x.saturating_add(frame.w.saturating_sub(line_w) / 2);
        fb.put_str(x, mid_y, "SCORE ", plain);
        fb.put_u32(x.saturating_add(6), mid_y, snap.score, plain);
        fb.put_str_centered(frame.x, mid_y + 1, frame.w, "r restart  q quit", plain.dim());
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

fn kind_glyph(kind: TileKind) -> char {
    match kind {
        TileKind::Circle => '●',
        TileKind::Star => '★',
        TileKind::Heart => '♥',
        TileKind::Diamond => '◆',
        TileKind::Triangle => '▲',
        TileKind::Flower => '✿',
        TileKind::Butterfly => 'Ж',
        TileKind::Gem => '◇',
    }
}

fn kind_color(kind: TileKind) -> Rgb {
    match kind {
        TileKind::Circle => Rgb::new(230, 80, 80),
        TileKind::Star => Rgb::new(240, 220, 80),
        TileKind::Heart => Rgb::new(255, 130, 180),
        TileKind::Diamond => Rgb::new(80, 220, 220),
        TileKind::Triangle => Rgb::new(255, 165, 0),
        TileKind::Flower => Rgb::new(200, 120, 220),
        TileKind::Butterfly => Rgb::new(80, 120, 220),
        TileKind::Gem => Rgb::new(100, 220, 120),
    }
}

/// Red under 30s, orange under 60s, green otherwise
fn time_color(secs: u32) -> Rgb {
    match secs {
        0..=29 => Rgb::new(230, 80, 80),
        30..=59 => Rgb::new(255, 165, 0),
        _ => Rgb::new(100, 220, 120),
    }
}

/// Box corner at `p` joining neighbours `a` and `b`
fn corner_glyph(p: Pos, a: Pos, b: Pos) -> char {
    let up = a.y < p.y || b.y < p.y;
    let down = a.y > p.y || b.y > p.y;
    let left = a.x < p.x || b.x < p.x;
    let right = a.x > p.x || b.x > p.x;
    match (up, down, left, right) {
        (false, true, false, true) => '┌',
        (false, true, true, false) => '┐',
        (true, false, false, true) => '└',
        (true, false, true, false) => '┘',
        (true, true, _, _) => '│',
        _ => '─',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_glyphs() {
        let p = Pos::new(1, 1);
        assert_eq!(corner_glyph(p, Pos::new(1, 3), Pos::new(4, 1)), '┌');
        assert_eq!(corner_glyph(p, Pos::new(0, 1), Pos::new(1, 5)), '┐');
        assert_eq!(corner_glyph(p, Pos::new(1, 0), Pos::new(3, 1)), '└');
        assert_eq!(corner_glyph(p, Pos::new(-1, 1), Pos::new(1, -1)), '┘');
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn time_colour_bands() {
        assert_eq!(time_color(10), Rgb::new(230, 80, 80));
        assert_eq!(time_color(45), Rgb::new(255, 165, 0));
        assert_eq!(time_color(300), Rgb::new(100, 220, 120));
    }

    #[test]
    fn layout_skips_border_and_lane_ring() {
        let view = GameView::default();
        // 8x8 board => (8 + 2) * 2 + 2 = 22 wide, (8 + 2) + 2 = 12 tall
        let layout = view.layout(8, Viewport::new(22, 12));
        assert_eq!(layout.origin_x, 3);
        assert_eq!(layout.origin_y, 2);
        assert_eq!((layout.cell_w, layout.cell_h), (2, 1));
    }

    #[test]
    fn lane_cells_map_inside_frame() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let layout = view.layout(4, Viewport::new(14, 8));
        assert_eq!(view.cell_origin(&layout, Pos::new(-1, -1)), (1, 1));
        assert_eq!(view.cell_origin(&layout, Pos::new(4, 4)), (11, 6));
    }
}
