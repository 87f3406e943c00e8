//! Pointer mapping - terminal cell coordinates to board positions.

use crate::types::{BoardLayout, Pos};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Convert a terminal cell to a board position
///
/// `(pixel - origin) / cell_extent` on each axis; anything left of or above
/// the origin, or at `size` and beyond, is rejected.
///
/// ```
/// use tui_linkup_input::grid_from_pixel;
/// use tui_linkup_input::types::{BoardLayout, Pos};
///
/// let layout = BoardLayout { origin_x: 4, origin_y: 2, cell_w: 2, cell_h: 1 };
/// assert_eq!(grid_from_pixel(9, 5, layout, 8), Some(Pos::new(2, 3)));
/// assert_eq!(grid_from_pixel(3, 5, layout, 8), None);
/// ```
pub fn grid_from_pixel(px: u16, py: u16, layout: BoardLayout, size: u8) -> Option<Pos> {
    if layout.cell_w == 0 || layout.cell_h == 0 {
        return None;
    }
    let dx = px.checked_sub(layout.origin_x)?;
    let dy = py.checked_sub(layout.origin_y)?;
    let x = dx / layout.cell_w;
    let y = dy / layout.cell_h;
    if x >= size as u16 || y >= size as u16 {
        return None;
    }
    Some(Pos::new(x as i8, y as i8))
}

/// Board position under a left-button press, if any
pub fn handle_mouse_event(event: MouseEvent, layout: BoardLayout, size: u8) -> Option<Pos> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            grid_from_pixel(event.column, event.row, layout, size)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    const LAYOUT: BoardLayout = BoardLayout {
        origin_x: 10,
        origin_y: 3,
        cell_w: 2,
        cell_h: 1,
    };

    fn click(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_origin_maps_to_first_cell() {
        assert_eq!(grid_from_pixel(10, 3, LAYOUT, 8), Some(Pos::new(0, 0)));
        // Second terminal column of the same 2-wide cell
        assert_eq!(grid_from_pixel(11, 3, LAYOUT, 8), Some(Pos::new(0, 0)));
        assert_eq!(grid_from_pixel(12, 3, LAYOUT, 8), Some(Pos::new(1, 0)));
    }

    #[test]
    fn test_last_cell_and_beyond() {
        assert_eq!(grid_from_pixel(25, 10, LAYOUT, 8), Some(Pos::new(7, 7)));
        assert_eq!(grid_from_pixel(26, 10, LAYOUT, 8), None);
        assert_eq!(grid_from_pixel(25, 11, LAYOUT, 8), None);
    }

    #[test]
    fn test_before_origin_rejected() {
        assert_eq!(grid_from_pixel(9, 3, LAYOUT, 8), None);
        assert_eq!(grid_from_pixel(10, 2, LAYOUT, 8), None);
    }

    #[test]
    fn test_zero_extent_rejected() {
        let layout = BoardLayout::default();
        assert_eq!(grid_from_pixel(0, 0, layout, 8), None);
    }

    #[test]
    fn test_only_left_press_selects() {
        let down = click(MouseEventKind::Down(MouseButton::Left), 12, 4);
        assert_eq!(handle_mouse_event(down, LAYOUT, 8), Some(Pos::new(1, 1)));

        let right = click(MouseEventKind::Down(MouseButton::Right), 12, 4);
        assert_eq!(handle_mouse_event(right, LAYOUT, 8), None);

        let moved = click(MouseEventKind::Moved, 12, 4);
        assert_eq!(handle_mouse_event(moved, LAYOUT, 8), None);
    }
}
