use crate::{
    error::Result,
    traits::SegmentGrouper,
    types::{LineSegment, Structure},
};

use super::adjacency::{is_adjacent, DEFAULT_DELTA};

/// Partition `lines` into connected structures.
///
/// Depth-first over the adjacency graph: each unvisited segment opens a
/// structure, which absorbs every not-yet-grouped segment reachable from it.
/// Members are listed in visit order.
pub fn group_adjacent_lines(lines: &[LineSegment], delta: u32) -> Vec<Structure> {
    let mut grouped = vec![false; lines.len()];
    let mut structures = Vec::new();

    for seed in 0..lines.len() {
        if grouped[seed] {
            continue;
        }
        grouped[seed] = true;

        let mut structure = Structure::new();
        structure.push(lines[seed]);

        // (member, next candidate to look at)
        let mut stack = vec![(seed, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (current, from) = *frame;
            let next = (from..lines.len())
                .find(|&k| !grouped[k] && is_adjacent(&lines[current], &lines[k], delta));

            match next {
                Some(k) => {
                    frame.1 = k + 1;
                    grouped[k] = true;
                    structure.push(lines[k]);
                    stack.push((k, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }

        structures.push(structure);
    }

    tracing::debug!(
        segments = lines.len(),
        structures = structures.len(),
        delta,
        "grouped segments"
    );
    structures
}

/// Groups segments whose endpoints lie within `delta` pixels of each other
#[derive(Debug, Clone)]
pub struct AdjacencyGrouper {
    pub delta: u32,
}

impl Default for AdjacencyGrouper {
    fn default() -> Self {
        Self { delta: DEFAULT_DELTA }
    }
}

impl SegmentGrouper for AdjacencyGrouper {
    fn group(&self, segments: &[LineSegment]) -> Result<Vec<Structure>> {
        Ok(group_adjacent_lines(segments, self.delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> LineSegment {
        LineSegment::new(x1, y1, x2, y2)
    }

    #[test]
    fn separate_components() {
        let lines = vec![
            seg(0, 0, 3, 0),
            seg(10, 10, 12, 10),
            seg(4, 1, 4, 5),
            seg(13, 11, 15, 11),
        ];
        let structures = group_adjacent_lines(&lines, 1);
        assert_eq!(structures.len(), 2);
        assert_eq!(structures[0].as_slice(), &[lines[0], lines[2]]);
        assert_eq!(structures[1].as_slice(), &[lines[1], lines[3]]);
    }

    #[test]
    fn depth_first_visit_order() {
        // 0 touches 2 and 3; 2 touches 1; depth first visits 2 then 1 before 3
        let lines = vec![
            seg(0, 0, 2, 0),
            seg(2, 8, 2, 10),
            seg(3, 1, 3, 7),
            seg(-1, 1, -5, 1),
        ];
        let structures = group_adjacent_lines(&lines, 1);
        assert_eq!(structures.len(), 1);
        assert_eq!(
            structures[0].as_slice(),
            &[lines[0], lines[2], lines[1], lines[3]]
        );
    }

    #[test]
    fn chain_is_transitive() {
        let lines: Vec<_> = (0..50).map(|i| seg(i * 3, 0, i * 3 + 2, 0)).collect();
        let structures = group_adjacent_lines(&lines, 1);
        assert_eq!(structures.len(), 1);
        assert_eq!(structures[0].len(), 50);
    }

    #[test]
    fn every_segment_in_exactly_one_structure() {
        let lines = vec![seg(0, 0, 0, 0), seg(0, 0, 0, 0), seg(5, 5, 6, 6), seg(20, 0, 21, 0)];
        let structures = AdjacencyGrouper::default().group(&lines).unwrap();
        let total: usize = structures.iter().map(Structure::len).sum();
        assert_eq!(total, lines.len());
        assert_eq!(structures.len(), 3);
    }

    #[test]
    fn empty_input() {
        assert!(group_adjacent_lines(&[], 1).is_empty());
    }
}
