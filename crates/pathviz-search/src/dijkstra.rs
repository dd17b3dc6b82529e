//! Dijkstra shortest-path search with a reusable node cache.

use std::collections::BinaryHeap;

use pathviz_core::Point;

use crate::traits::SearchGrid;

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

#[derive(Clone)]
struct Node {
    dist: i32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    dist: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest distance
        // first; ties break on index so pop order is fully deterministic.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path solver over a [`SearchGrid`].
///
/// `PathField` owns its node array and lazily invalidates it with a
/// wrapping generation counter, so repeated queries on same-sized grids
/// incur no allocations after the first use. Walls are impassable, every
/// other tile costs 1 to enter, and edges run in the four cardinal
/// directions.
pub struct PathField {
    rows: i32,
    cols: i32,
    nodes: Vec<Node>,
    generation: u32,
}

impl Default for PathField {
    fn default() -> Self {
        Self::new()
    }
}

impl PathField {
    /// Create an empty field; the node cache is sized on first query.
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            nodes: Vec::new(),
            generation: 0,
        }
    }

    /// Resize the cache for a `rows × cols` grid, reallocating only when
    /// the new size exceeds the current capacity.
    fn ensure_size(&mut self, rows: i32, cols: i32) {
        let len = (rows.max(0) as usize) * (cols.max(0) as usize);
        self.rows = rows;
        self.cols = cols;
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.cols || p.y < 0 || p.y >= self.rows {
            return None;
        }
        Some((p.y * self.cols + p.x) as usize)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.cols, idx as i32 / self.cols)
    }

    /// Compute the shortest path `from -> to`, both endpoints included.
    ///
    /// Returns the path in the engine's `(x = column, y = row)` axis
    /// order, or an empty vector when no path exists. For a fixed wall
    /// layout the result is deterministic: equal-cost frontiers pop in
    /// index order and neighbors relax in the fixed up/down/left/right
    /// scan order.
    pub fn shortest_path<G: SearchGrid>(&mut self, grid: &G, from: Point, to: Point) -> Vec<Point> {
        self.ensure_size(grid.rows(), grid.cols());

        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return Vec::new();
        };
        if grid.is_wall(from) || grid.is_wall(to) {
            return Vec::new();
        }
        if start_idx == goal_idx {
            return vec![from];
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.dist = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            dist: 0,
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }
            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_dist = self.nodes[ci].dist;
            let cp = self.point(ci);

            for np in cp.scan_neighbors() {
                if !grid.contains(np) || grid.is_wall(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_dist + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.dist {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.dist = UNREACHABLE;
                }

                n.dist = tentative;
                n.parent = ci;
                n.open = true;
                open.push(NodeRef {
                    idx: ni,
                    dist: tentative,
                });
            }
        };

        if !found {
            return Vec::new();
        }

        // Walk predecessor links goal -> start, then reverse.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
