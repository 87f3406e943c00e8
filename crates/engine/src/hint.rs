use tui_linkup_core::types::{Pos, TileKind};
use tui_linkup_core::Board;

/// First connectable same-kind pair, scanning row-major
pub fn find_hint(board: &Board) -> Option<(Pos, Pos)> {
    board.find_move()
}

/// Every connectable pair on the board, in the same order as [`find_hint`]
pub fn all_moves(board: &Board) -> Vec<(Pos, Pos)> {
    let finder = board.path_finder();
    let tiles: Vec<(Pos, TileKind)> = board
        .occupied()
        .filter_map(|pos| board.kind_at(pos).map(|kind| (pos, kind)))
        .collect();

    let mut moves = Vec::new();
    for (i, &(a, kind_a)) in tiles.iter().enumerate() {
        for &(b, kind_b) in &tiles[i + 1..] {
            if kind_a == kind_b && finder.can_connect(a, b) {
                moves.push((a, b));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_is_first_of_all_moves() {
        let board = Board::from_rows(&[&[1, 2, 1], &[3, 0, 3], &[2, 4, 4]]);
        let moves = all_moves(&board);
        assert_eq!(find_hint(&board), moves.first().copied());
        assert!(moves.contains(&(Pos::new(1, 2), Pos::new(2, 2))));
    }

    #[test]
    fn no_hint_on_empty_board() {
        let board = Board::new(4);
        assert_eq!(find_hint(&board), None);
        assert!(all_moves(&board).is_empty());
    }

    #[test]
    fn no_hint_when_pair_is_walled_off() {
        // Both 1s are boxed in by occupied neighbours.
        let board = Board::from_rows(&[
            &[2, 3, 4, 5],
            &[6, 1, 7, 8],
            &[5, 7, 1, 6],
            &[8, 4, 3, 2],
        ]);
        assert!(!all_moves(&board).contains(&(Pos::new(1, 1), Pos::new(2, 2))));
    }
}
