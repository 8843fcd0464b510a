use pathgrid_core::Point;

/// Straight-line (L2) distance between two points.
///
/// This is the best-first estimate. With unit-cost diagonal moves it can
/// overestimate the true hop count (a (3, 4) offset is 4 hops but 5.0
/// here), so it is not admissible and best-first may return a longer path
/// than breadth-first around obstacles.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Chebyshev (L∞) distance between two points.
///
/// Exact hop count between two cells of an open 8-connected grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
