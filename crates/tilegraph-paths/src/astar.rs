use std::collections::BinaryHeap;
use std::mem;

use tilegraph_core::Point;

use crate::distance::Metric;
use crate::finder::{OpenRef, PathFinder, SearchError};
use crate::path::Path;
use crate::traits::Terrain;

impl PathFinder {
    /// Compute the shortest path from `from` to `to` over `terrain`.
    ///
    /// `Ok(Some(path))` carries the full route, both endpoints included.
    /// `Ok(None)` means the open set drained without reaching `to` — an
    /// expected outcome on blocked topology, not an error. `Err` is
    /// reserved for invalid queries and exhausted budgets.
    ///
    /// Ties in the open set resolve by lowest `f`, then lowest `h`, then
    /// earliest discovery, so identical queries on an unchanged terrain
    /// always produce the identical path.
    pub fn find_path<T: Terrain>(
        &mut self,
        terrain: &T,
        from: Point,
        to: Point,
        metric: Metric,
    ) -> Result<Option<Path>, SearchError> {
        // Validate both endpoints before touching any per-cell state.
        let start_idx = self
            .idx(from)
            .filter(|_| terrain.passable(from))
            .ok_or(SearchError::InvalidEndpoint(from))?;
        let goal_idx = self
            .idx(to)
            .filter(|_| terrain.passable(to))
            .ok_or(SearchError::InvalidEndpoint(to))?;

        // Bump the generation: every record from earlier runs goes stale
        // at once, which is the wholesale per-search reset.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;
        self.start = Some(start_idx);
        self.end = Some(goal_idx);

        if start_idx == goal_idx {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.h = 0.0;
            node.parent = usize::MAX;
            node.seq = 0;
            node.generation = cur_gen;
            node.open = false;
            return Ok(Some(Path::new(vec![from], 0)));
        }

        // Seed the start cell.
        let start_h = metric.heuristic(from, to);
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.h = start_h;
            node.parent = usize::MAX;
            node.seq = 0;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        open.push(OpenRef {
            idx: start_idx,
            f: start_h,
            h: start_h,
            seq: 0,
        });

        let mut next_seq: u32 = 1;
        let mut expanded: usize = 0;
        let mut nbuf = mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip entries superseded by a cheaper rediscovery.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if let Some(budget) = self.budget {
                if expanded >= budget {
                    self.nbuf = nbuf;
                    log::debug!(
                        "astar {from} -> {to}: budget of {budget} expansions exhausted"
                    );
                    return Err(SearchError::Aborted { expanded });
                }
            }
            expanded += 1;

            // Lowest (f, h, discovery) wins: settle the cell.
            self.nodes[ci].open = false;
            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            terrain.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                if !terrain.passable(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let node = &mut self.nodes[ni];
                if node.generation == cur_gen {
                    // Settled cells stay settled; open ones only improve.
                    if !node.open || tentative_g >= node.g {
                        continue;
                    }
                } else {
                    node.generation = cur_gen;
                    node.seq = next_seq;
                    next_seq += 1;
                }

                node.g = tentative_g;
                node.h = metric.heuristic(np, to);
                node.parent = ci;
                node.open = true;

                open.push(OpenRef {
                    idx: ni,
                    f: tentative_g as f64 + node.h,
                    h: node.h,
                    seq: node.seq,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("astar {from} -> {to}: open set drained after {expanded} expansions");
            return Ok(None);
        }

        // Walk the parent links back from the goal, then flip.
        let cost = self.nodes[goal_idx].g;
        let mut points = Vec::with_capacity(cost as usize + 1);
        let mut ci = goal_idx;
        while ci != usize::MAX {
            points.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        points.reverse();
        log::debug!("astar {from} -> {to}: cost {cost} after {expanded} expansions");
        Ok(Some(Path::new(points, cost)))
    }
}
