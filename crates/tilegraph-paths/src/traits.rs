use tilegraph_core::{GridGraph, Point};

/// What the search needs from a grid: a bounded extent, passability, and
/// neighbour enumeration.
///
/// Step cost is fixed at 1 per edge for every implementor; there is no
/// weighted terrain. The neighbour order must be stable between calls —
/// it is the final tie-breaker for the search, so a wobbling order would
/// make results irreproducible.
pub trait Terrain {
    /// Number of columns.
    fn columns(&self) -> i32;

    /// Number of rows.
    fn rows(&self) -> i32;

    /// Whether `p` is in bounds and may be entered by a path.
    fn passable(&self, p: Point) -> bool;

    /// Append the in-bounds 4-directional neighbours of `p` to `buf`, in a
    /// fixed order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl Terrain for GridGraph {
    fn columns(&self) -> i32 {
        GridGraph::columns(self)
    }

    fn rows(&self) -> i32 {
        GridGraph::rows(self)
    }

    fn passable(&self, p: Point) -> bool {
        GridGraph::passable(self, p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        GridGraph::neighbors(self, p, buf)
    }
}
