//! Path module - connectivity between two tiles
//!
//! Two tiles connect when a path of horizontal and vertical segments joins
//! them, passes through no occupied cell other than the two endpoints, and
//! bends at most twice. Only three shapes are searched, in this priority:
//!
//! 1. **Straight**: shared row or column, everything strictly between empty.
//! 2. **One bend**: through corner `(b.x, a.y)`, then corner `(a.x, b.y)`.
//!    The corner cell must be empty unless it is one of the endpoints.
//! 3. **Two bends via a border lane**: each endpoint walks straight out to
//!    the lane one cell beyond the edge (top, bottom, left, right, in that
//!    order); the lane itself holds no tiles and is always clear.
//!
//! The first shape that fits wins, even when a later one would be shorter.
//! [`PathFinder::can_connect`] and [`PathFinder::find_path`] run the same
//! search; the former only answers yes/no, the latter builds waypoints.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::board::Board;
use crate::types::{Lane, PathShape, Pos};

/// Path waypoints: both endpoints plus every bend point (at most 4)
pub type Waypoints = ArrayVec<Pos, 4>;

/// A connecting path between two tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectPath {
    pub shape: PathShape,
    pub waypoints: Waypoints,
}

impl ConnectPath {
    fn new(shape: PathShape, points: &[Pos]) -> Self {
        let mut waypoints = Waypoints::new();
        waypoints.extend(points.iter().copied());
        Self { shape, waypoints }
    }

    pub fn start(&self) -> Pos {
        self.waypoints[0]
    }

    pub fn end(&self) -> Pos {
        self.waypoints[self.waypoints.len() - 1]
    }
}

/// Connectivity queries over one board snapshot
///
/// Holds no state beyond the borrow, so any mutation of the board
/// invalidates earlier answers (the borrow checker enforces this).
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    board: &'a Board,
}

impl<'a> PathFinder<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Whether `a` and `b` can be joined by one of the three path shapes
    pub fn can_connect(&self, a: Pos, b: Pos) -> bool {
        if !self.endpoints_valid(a, b) {
            return false;
        }

        self.can_connect_straight(a, b)
            || self.can_connect_one_bend(a, b)
            || self.can_connect_two_bends(a, b)
    }

    /// Build the highest-priority path between `a` and `b`, if any
    pub fn find_path(&self, a: Pos, b: Pos) -> Option<ConnectPath> {
        if !self.endpoints_valid(a, b) {
            return None;
        }

        if self.can_connect_straight(a, b) {
            return Some(ConnectPath::new(PathShape::Straight, &[a, b]));
        }

        if let Some(corner) = corners(a, b)
            .into_iter()
            .find(|&corner| self.bend_clear(a, corner, b))
        {
            return Some(ConnectPath::new(PathShape::OneBend, &[a, corner, b]));
        }

        Lane::ALL
            .into_iter()
            .find(|&lane| self.lane_clear(a, b, lane))
            .map(|lane| {
                let (ea, eb) = self.lane_entries(a, b, lane);
                ConnectPath::new(PathShape::BorderLane(lane), &[a, ea, eb, b])
            })
    }

    /// Shape of the path [`PathFinder::find_path`] would pick
    pub fn shape_between(&self, a: Pos, b: Pos) -> Option<PathShape> {
        self.find_path(a, b).map(|p| p.shape)
    }

    fn endpoints_valid(&self, a: Pos, b: Pos) -> bool {
        a != b && self.board.in_bounds(a) && self.board.in_bounds(b)
    }

    fn can_connect_straight(&self, a: Pos, b: Pos) -> bool {
        (a.x == b.x || a.y == b.y) && self.segment_clear(a, b)
    }

    fn can_connect_one_bend(&self, a: Pos, b: Pos) -> bool {
        corners(a, b)
            .into_iter()
            .any(|corner| self.bend_clear(a, corner, b))
    }

    fn can_connect_two_bends(&self, a: Pos, b: Pos) -> bool {
        Lane::ALL.into_iter().any(|lane| self.lane_clear(a, b, lane))
    }

    /// Every cell strictly between `from` and `to` is empty.
    ///
    /// The two points must share a row or column; a zero-length segment is
    /// trivially clear.
    fn segment_clear(&self, from: Pos, to: Pos) -> bool {
        if from.y == to.y {
            let (lo, hi) = (from.x.min(to.x), from.x.max(to.x));
            ((lo + 1)..hi).all(|x| self.board.is_empty_at(Pos::new(x, from.y)))
        } else if from.x == to.x {
            let (lo, hi) = (from.y.min(to.y), from.y.max(to.y));
            ((lo + 1)..hi).all(|y| self.board.is_empty_at(Pos::new(from.x, y)))
        } else {
            false
        }
    }

    fn bend_clear(&self, a: Pos, corner: Pos, b: Pos) -> bool {
        let corner_free = corner == a || corner == b || self.board.is_empty_at(corner);
        corner_free && self.segment_clear(a, corner) && self.segment_clear(corner, b)
    }

    fn lane_clear(&self, a: Pos, b: Pos, lane: Lane) -> bool {
        self.leg_clear(a, lane) && self.leg_clear(b, lane)
    }

    /// Cells between `from` (exclusive) and the board edge facing `lane` are empty
    fn leg_clear(&self, from: Pos, lane: Lane) -> bool {
        let size = self.board.size() as i8;
        match lane {
            Lane::Top => (0..from.y).all(|y| self.board.is_empty_at(Pos::new(from.x, y))),
            Lane::Bottom => {
                ((from.y + 1)..size).all(|y| self.board.is_empty_at(Pos::new(from.x, y)))
            }
            Lane::Left => (0..from.x).all(|x| self.board.is_empty_at(Pos::new(x, from.y))),
            Lane::Right => {
                ((from.x + 1)..size).all(|x| self.board.is_empty_at(Pos::new(x, from.y)))
            }
        }
    }

    /// Points where the two legs meet the lane
    fn lane_entries(&self, a: Pos, b: Pos, lane: Lane) -> (Pos, Pos) {
        let offset = lane.offset(self.board.size());
        if lane.is_horizontal() {
            (Pos::new(a.x, offset), Pos::new(b.x, offset))
        } else {
            (Pos::new(offset, a.y), Pos::new(offset, b.y))
        }
    }
}

/// One-bend corners in search order
fn corners(a: Pos, b: Pos) -> [Pos; 2] {
    [Pos::new(b.x, a.y), Pos::new(a.x, b.y)]
}
