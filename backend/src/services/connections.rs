//! Nearest-neighbor connection graph between visible stars.

use nalgebra::Point3;

/// Neighbors considered per star.
pub const NEIGHBORS_PER_STAR: usize = 3;

/// A line between two visible stars.
///
/// `from` and `to` index into the visible list the edge was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionEdge {
    pub from: usize,
    pub to: usize,
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

/// Build the edge set for the given visible positions.
///
/// Each star proposes its three nearest neighbors; a pair `(i, j)` becomes an
/// edge only when proposed by the lower index (`i < j`), so no undirected edge
/// is emitted twice. O(n²).
pub fn build_connections(visible: &[Point3<f64>]) -> Vec<ConnectionEdge> {
    if visible.len() < 2 {
        return Vec::new();
    }

    let mut edges = Vec::new();
    let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(visible.len());

    for (i, origin) in visible.iter().enumerate() {
        candidates.clear();
        candidates.extend(
            visible
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(j, other)| (j, nalgebra::distance(origin, other))),
        );
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        for &(j, _) in candidates.iter().take(NEIGHBORS_PER_STAR) {
            if i < j {
                edges.push(ConnectionEdge {
                    from: i,
                    to: j,
                    start: *origin,
                    end: visible[j],
                });
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_fewer_than_two_stars() {
        assert!(build_connections(&[]).is_empty());
        assert!(build_connections(&[p(1.0, 0.0, 0.0)]).is_empty());
    }

    #[test]
    fn test_two_stars_single_edge() {
        let edges = build_connections(&[p(0.0, 0.0, 0.0), p(3.0, 4.0, 0.0)]);
        assert_eq!(edges.len(), 1);
        assert_eq!((edges[0].from, edges[0].to), (0, 1));
        assert_eq!(edges[0].end, p(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_five_stars_bounded_and_unique() {
        let stars = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 2.0, 0.0),
            p(5.0, 5.0, 5.0),
            p(-3.0, 1.0, 2.0),
        ];
        let edges = build_connections(&stars);

        let mut seen = HashSet::new();
        for e in &edges {
            assert!(e.from < e.to);
            assert!(seen.insert((e.from, e.to)), "duplicate edge {:?}", (e.from, e.to));
        }

        for i in 0..stars.len() {
            let proposed = edges.iter().filter(|e| e.from == i).count();
            assert!(proposed <= NEIGHBORS_PER_STAR);
        }
    }

    #[test]
    fn test_edge_only_from_lower_index() {
        // every star proposes both others; each pair is emitted once
        let stars = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(100.0, 0.0, 0.0)];
        let edges = build_connections(&stars);
        let pairs: Vec<(usize, usize)> = edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }
}
