//! Keyboard cursor over the board.

use crate::types::{GameAction, Pos};

/// Cell highlighted for keyboard play, always inside `[0, size)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
    size: u8,
}

impl Cursor {
    pub fn new(size: u8) -> Self {
        Self {
            pos: Pos::new(0, 0),
            size: size.max(1),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Adopt a new board size, pulling the cursor back inside if needed
    pub fn resize(&mut self, size: u8) {
        self.size = size.max(1);
        let max = self.size as i8 - 1;
        self.pos = Pos::new(self.pos.x.min(max), self.pos.y.min(max));
    }

    /// Move to `pos` (clamped); used when the pointer selects a cell
    pub fn set(&mut self, pos: Pos) {
        let max = self.size as i8 - 1;
        self.pos = Pos::new(pos.x.clamp(0, max), pos.y.clamp(0, max));
    }

    /// Apply a cursor action; returns false for non-cursor actions
    pub fn apply(&mut self, action: GameAction) -> bool {
        let (dx, dy) = match action {
            GameAction::CursorLeft => (-1, 0),
            GameAction::CursorRight => (1, 0),
            GameAction::CursorUp => (0, -1),
            GameAction::CursorDown => (0, 1),
            _ => return false,
        };
        self.set(Pos::new(self.pos.x + dx, self.pos.y + dy));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_and_clamps() {
        let mut cursor = Cursor::new(3);
        assert!(cursor.apply(GameAction::CursorLeft));
        assert_eq!(cursor.pos(), Pos::new(0, 0));

        cursor.apply(GameAction::CursorRight);
        cursor.apply(GameAction::CursorRight);
        cursor.apply(GameAction::CursorRight);
        cursor.apply(GameAction::CursorDown);
        assert_eq!(cursor.pos(), Pos::new(2, 1));
    }

    #[test]
    fn test_ignores_other_actions() {
        let mut cursor = Cursor::new(8);
        assert!(!cursor.apply(GameAction::Select));
        assert!(!cursor.apply(GameAction::Hint));
        assert_eq!(cursor.pos(), Pos::new(0, 0));
    }

    #[test]
    fn test_resize_pulls_inside() {
        let mut cursor = Cursor::new(8);
        cursor.set(Pos::new(7, 6));
        cursor.resize(4);
        assert_eq!(cursor.pos(), Pos::new(3, 3));
    }
}
