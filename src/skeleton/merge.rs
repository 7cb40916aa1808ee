//! Joining touching skeleton pieces into maximal lines.
//!
//! Piece endpoints are welded into nodes, keeping the first position seen
//! for each node. Chains are then walked through every node of degree two,
//! so a merged line ends only at a free end or at a junction. Chains with
//! no such node at all are emitted as closed lines.

use super::Skeleton;
use crate::primitives::{LineString, Point2};
use num_traits::Float;
use std::collections::HashMap;

/// Joins lines that meet end to end into maximal lines.
///
/// Endpoints within `tolerance` of each other are treated as one node.
/// Pieces whose endpoints weld together with nothing in between are
/// dropped. The output order follows the input order.
///
/// # Example
///
/// ```
/// use pavewidth::skeleton::merge_lines;
/// use pavewidth::{LineString, Point2};
///
/// let pieces = vec![
///     LineString::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]),
///     LineString::new(vec![Point2::new(2.0, 0.0), Point2::new(1.0, 0.0)]),
/// ];
///
/// let merged = merge_lines(&pieces, 1e-6);
/// assert_eq!(merged.branch_count(), 1);
/// assert_eq!(merged.lines()[0].len(), 3);
/// ```
pub fn merge_lines<F: Float>(lines: &[LineString<F>], tolerance: F) -> Skeleton<F> {
    let graph = LineGraph::build(lines, tolerance);
    Skeleton::from_lines(graph.chains())
}

/// Grid-bucketed node positions for welding endpoints.
struct NodeIndex<F> {
    cell: F,
    tolerance: F,
    positions: Vec<Point2<F>>,
    buckets: HashMap<(i64, i64), Vec<usize>>,
}

impl<F: Float> NodeIndex<F> {
    fn new(tolerance: F) -> Self {
        let tolerance = tolerance.abs();
        Self {
            cell: tolerance.max(F::epsilon()),
            tolerance,
            positions: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    fn cell_of(&self, p: Point2<F>) -> (i64, i64) {
        let ix = (p.x / self.cell).floor().to_i64().unwrap_or(0);
        let iy = (p.y / self.cell).floor().to_i64().unwrap_or(0);
        (ix, iy)
    }

    /// Node for `p`, creating one if no node is within tolerance.
    ///
    /// Ties go to the lowest node index.
    fn node_for(&mut self, p: Point2<F>) -> usize {
        let (cx, cy) = self.cell_of(p);
        let tol_sq = self.tolerance * self.tolerance;

        let mut found: Option<usize> = None;
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(bucket) = self.buckets.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &node in bucket {
                    if self.positions[node].distance_squared(p) <= tol_sq
                        && found.map_or(true, |best| node < best)
                    {
                        found = Some(node);
                    }
                }
            }
        }

        found.unwrap_or_else(|| {
            let node = self.positions.len();
            self.positions.push(p);
            self.buckets.entry((cx, cy)).or_default().push(node);
            node
        })
    }
}

/// A piece between two nodes.
struct Edge<F> {
    from: usize,
    to: usize,
    points: Vec<Point2<F>>,
}

struct LineGraph<F> {
    edges: Vec<Edge<F>>,
    /// Incident edges per node; a loop edge appears twice.
    incident: Vec<Vec<usize>>,
}

impl<F: Float> LineGraph<F> {
    fn build(lines: &[LineString<F>], tolerance: F) -> Self {
        let mut nodes = NodeIndex::new(tolerance);
        let mut edges = Vec::with_capacity(lines.len());

        for line in lines {
            let (Some(first), Some(last)) = (line.first(), line.last()) else {
                continue;
            };
            if line.len() < 2 {
                continue;
            }
            let from = nodes.node_for(first);
            let to = nodes.node_for(last);
            if from == to && line.len() == 2 {
                continue;
            }

            // Snap the ends onto their nodes so joined lines share vertices
            let mut points = line.points.clone();
            let end = points.len() - 1;
            points[0] = nodes.positions[from];
            points[end] = nodes.positions[to];
            edges.push(Edge { from, to, points });
        }

        let mut incident = vec![Vec::new(); nodes.positions.len()];
        for (index, edge) in edges.iter().enumerate() {
            incident[edge.from].push(index);
            incident[edge.to].push(index);
        }

        Self { edges, incident }
    }

    fn degree(&self, node: usize) -> usize {
        self.incident[node].len()
    }

    /// Walks every edge exactly once, starting from ends and junctions.
    fn chains(&self) -> Vec<LineString<F>> {
        let mut visited = vec![false; self.edges.len()];
        let mut chains = Vec::new();

        for node in 0..self.incident.len() {
            if self.degree(node) == 2 {
                continue;
            }
            for &edge in &self.incident[node] {
                if !visited[edge] {
                    chains.push(self.walk(node, edge, &mut visited));
                }
            }
        }

        // Whatever is left forms closed rings of degree-two nodes
        for edge in 0..self.edges.len() {
            if !visited[edge] {
                chains.push(self.walk(self.edges[edge].from, edge, &mut visited));
            }
        }

        chains
    }

    fn walk(&self, start: usize, first_edge: usize, visited: &mut [bool]) -> LineString<F> {
        let mut points: Vec<Point2<F>> = Vec::new();
        let mut node = start;
        let mut edge = first_edge;

        loop {
            visited[edge] = true;
            let current = &self.edges[edge];
            let forward = current.from == node;
            let skip = usize::from(!points.is_empty());

            if forward {
                points.extend(current.points.iter().skip(skip));
                node = current.to;
            } else {
                points.extend(current.points.iter().rev().skip(skip));
                node = current.from;
            }

            if self.degree(node) != 2 {
                break;
            }
            match self.incident[node].iter().find(|&&e| !visited[e]) {
                Some(&next) => edge = next,
                None => break,
            }
        }

        LineString::new(points)
    }
}
