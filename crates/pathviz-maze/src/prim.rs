//! Randomized Prim's maze carving.

use rand::Rng;
use rand::RngExt;

use pathviz_core::Point;

use crate::layout::{MazeError, MazeLayout};

/// Rooms live on the even-coordinate lattice; passages are the odd cells
/// carved between two linked rooms.
const ROOM_STRIDE: i32 = 2;

const ROOM_NEIGHBORS: [Point; 4] = [
    Point::new(0, -ROOM_STRIDE),
    Point::new(0, ROOM_STRIDE),
    Point::new(-ROOM_STRIDE, 0),
    Point::new(ROOM_STRIDE, 0),
];

/// Maze generator using the randomized Prim's frontier algorithm.
///
/// Starting from one random room, the generator keeps a frontier of
/// not-yet-carved rooms bordering the carved region; each iteration picks
/// a random frontier room, links it to a random carved neighbor by opening
/// the cell between them, and extends the frontier. The carved cells form
/// a spanning tree over the rooms, so every open cell of the result is
/// reachable from every other.
pub struct MazeGen<R: Rng> {
    rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator around the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `width × height` wall layout.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] when either dimension
    /// is not positive.
    pub fn generate(&mut self, width: i32, height: i32) -> Result<MazeLayout, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let mut layout = MazeLayout::filled(width, height);
        let rooms_x = (width + ROOM_STRIDE - 1) / ROOM_STRIDE;
        let rooms_y = (height + ROOM_STRIDE - 1) / ROOM_STRIDE;

        let first = Point::new(
            ROOM_STRIDE * self.rng.random_range(0..rooms_x),
            ROOM_STRIDE * self.rng.random_range(0..rooms_y),
        );
        layout.carve(first);

        let mut frontier: Vec<Point> = Vec::new();
        extend_frontier(&layout, first, &mut frontier);

        while !frontier.is_empty() {
            let i = self.rng.random_range(0..frontier.len());
            let room = frontier.swap_remove(i);
            if !layout.is_wall(room) {
                // Queued from more than one side and already carved.
                continue;
            }

            let carved: Vec<Point> = ROOM_NEIGHBORS
                .iter()
                .map(|&d| room + d)
                .filter(|&n| layout.contains(n) && !layout.is_wall(n))
                .collect();
            if carved.is_empty() {
                continue;
            }
            let link = carved[self.rng.random_range(0..carved.len())];

            layout.carve(room);
            layout.carve(midpoint(room, link));
            extend_frontier(&layout, room, &mut frontier);
        }

        log::debug!(
            "maze {width}x{height}: {} open cells over {} rooms",
            layout.open_cells(),
            rooms_x * rooms_y
        );
        Ok(layout)
    }

}

/// Queue the uncarved rooms bordering `room`.
fn extend_frontier(layout: &MazeLayout, room: Point, frontier: &mut Vec<Point>) {
    for d in ROOM_NEIGHBORS {
        let n = room + d;
        if layout.contains(n) && layout.is_wall(n) {
            frontier.push(n);
        }
    }
}

/// The passage cell between two rooms two cells apart.
fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2, (a.y + b.y) / 2)
}
