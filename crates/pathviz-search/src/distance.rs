use pathviz_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a wall-free board this is exactly the number of steps in a shortest
/// path, so the full path holds `manhattan(a, b) + 1` coordinates.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
