use crate::{
    error::{LineFindError, Result},
    traits::SegmentMerger,
    types::{LineSegment, Structure},
};

use super::{
    adjacency::{is_adjacent_to_end, is_adjacent_to_start, DEFAULT_DELTA},
    slope::have_equal_slope,
};

/// Keep `head`'s start and flag, take `tail`'s end
fn joined(head: LineSegment, tail: LineSegment) -> LineSegment {
    LineSegment {
        x_end: tail.x_end,
        y_end: tail.y_end,
        ..head
    }
}

/// Fuse two touching segments into one, or `None` when they cannot be combined.
///
/// Two proper segments must point the same way within `angle_epsilon` degrees;
/// a point is absorbed by any segment it touches.
pub fn combine_lines(
    a: LineSegment,
    b: LineSegment,
    angle_epsilon: f64,
    delta: u32,
) -> Option<LineSegment> {
    if !a.is_point() && !b.is_point() && !have_equal_slope(&a, &b, angle_epsilon) {
        return None;
    }

    if a.is_point() {
        if is_adjacent_to_start(&b, &a, delta) {
            Some(joined(a, b))
        } else if is_adjacent_to_end(&b, &a, delta) {
            Some(joined(b, a))
        } else {
            None
        }
    } else if b.is_point() {
        if is_adjacent_to_start(&a, &b, delta) {
            Some(joined(b, a))
        } else if is_adjacent_to_end(&a, &b, delta) {
            Some(joined(a, b))
        } else {
            None
        }
    } else if is_adjacent_to_start(&a, &b, delta) {
        Some(joined(b, a))
    } else if is_adjacent_to_end(&a, &b, delta) {
        Some(joined(a, b))
    } else {
        None
    }
}

/// Greedily merge the segments of one structure.
///
/// For each position `i`, the first later segment that combines with it
/// replaces the pair, and the search restarts at the same `i` so that the
/// grown segment can absorb further neighbours.
pub fn merge_structure(structure: &mut Structure, angle_epsilon: f64, delta: u32) {
    let lines = structure.lines_mut();
    let mut i = 0;

    while i < lines.len() {
        let merged = (i + 1..lines.len()).find_map(|j| {
            combine_lines(lines[i], lines[j], angle_epsilon, delta).map(|line| (j, line))
        });

        match merged {
            Some((j, line)) => {
                lines[i] = line;
                lines.remove(j);
            }
            None => i += 1,
        }
    }
}

fn validate_angle_epsilon(angle_epsilon: Option<f64>) -> Result<f64> {
    let eps = angle_epsilon.ok_or(LineFindError::MissingAngleEpsilon)?;
    if !eps.is_finite() || eps < 0.0 {
        return Err(LineFindError::InvalidArgument(format!(
            "angle_epsilon must be a non-negative number of degrees, got {eps}"
        )));
    }
    Ok(eps)
}

/// Merge every structure in place; fails before touching anything when no epsilon is given
pub fn merge_structures(
    structures: &mut [Structure],
    angle_epsilon: Option<f64>,
    delta: u32,
) -> Result<()> {
    let eps = validate_angle_epsilon(angle_epsilon)?;
    let before: usize = structures.iter().map(Structure::len).sum();

    for structure in structures.iter_mut() {
        merge_structure(structure, eps, delta);
    }

    let after: usize = structures.iter().map(Structure::len).sum();
    tracing::debug!(before, after, angle_epsilon = eps, delta, "merged collinear segments");
    Ok(())
}

/// Joins touching segments whose directions agree within `angle_epsilon` degrees
#[derive(Debug, Clone)]
pub struct CollinearMerger {
    pub angle_epsilon: f64,
    pub delta: u32,
}

impl CollinearMerger {
    /// Validated constructor; `None` is rejected with [`LineFindError::MissingAngleEpsilon`]
    pub fn new(angle_epsilon: Option<f64>, delta: u32) -> Result<Self> {
        Ok(Self {
            angle_epsilon: validate_angle_epsilon(angle_epsilon)?,
            delta,
        })
    }

    pub fn with_angle_epsilon(angle_epsilon: f64) -> Result<Self> {
        Self::new(Some(angle_epsilon), DEFAULT_DELTA)
    }
}

impl SegmentMerger for CollinearMerger {
    fn merge(&self, structures: &mut [Structure]) -> Result<()> {
        merge_structures(structures, Some(self.angle_epsilon), self.delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> LineSegment {
        LineSegment::new(x1, y1, x2, y2)
    }

    #[test]
    fn end_to_start_keeps_first_start() {
        let merged = combine_lines(seg(0, 0, 2, 0), seg(3, 0, 5, 0), 1.0, 1);
        assert_eq!(merged, Some(seg(0, 0, 5, 0)));
    }

    #[test]
    fn start_adjacency_adopts_second_start() {
        // a's start touches b's end
        let merged = combine_lines(seg(4, 0, 6, 0), seg(0, 0, 3, 0), 1.0, 1);
        assert_eq!(merged, Some(seg(0, 0, 6, 0)));
    }

    #[test]
    fn different_direction_is_not_merged() {
        assert_eq!(combine_lines(seg(0, 0, 2, 0), seg(3, 0, 3, 4), 10.0, 1), None);
        // antiparallel but touching
        assert_eq!(combine_lines(seg(0, 0, 2, 0), seg(5, 0, 3, 0), 10.0, 1), None);
    }

    #[test]
    fn far_apart_is_not_merged() {
        assert_eq!(combine_lines(seg(0, 0, 2, 0), seg(5, 0, 7, 0), 1.0, 1), None);
        assert_eq!(combine_lines(seg(0, 0, 2, 0), seg(5, 0, 7, 0), 1.0, 3), Some(seg(0, 0, 7, 0)));
    }

    #[test]
    fn point_cases_skip_slope_gate() {
        let p = LineSegment::point(3, 1);
        let line = seg(0, 0, 2, 0);
        // point before line, touching the line's end
        assert_eq!(combine_lines(p, line, 0.0, 1), Some(seg(0, 0, 3, 1)));
        // line before point
        assert_eq!(combine_lines(line, p, 0.0, 1), Some(seg(0, 0, 3, 1)));

        let q = LineSegment::point(-1, 0);
        assert_eq!(combine_lines(q, line, 0.0, 1), Some(seg(-1, 0, 2, 0)));
        assert_eq!(combine_lines(line, q, 0.0, 1), Some(seg(-1, 0, 2, 0)));

        assert_eq!(combine_lines(LineSegment::point(9, 9), line, 0.0, 1), None);
    }

    #[test]
    fn flag_follows_kept_start() {
        let a = seg(0, 0, 0, 3).with_vertical(true);
        let b = seg(0, 4, 0, 6);
        let merged = combine_lines(a, b, 1.0, 1).unwrap();
        assert_eq!(merged.as_array(), [0, 0, 0, 6]);
        assert!(merged.vertical);
    }

    #[test]
    fn cascade_restarts_at_same_index() {
        let mut s: Structure = vec![
            seg(0, 0, 2, 0),
            seg(6, 0, 8, 0),
            seg(3, 0, 5, 0),
            seg(9, 0, 11, 0),
        ]
        .into_iter()
        .collect();
        merge_structure(&mut s, 1.0, 1);
        assert_eq!(s.as_slice(), &[seg(0, 0, 11, 0)]);
    }

    #[test]
    fn merge_is_idempotent() {
        let mut s: Structure = vec![seg(0, 0, 2, 0), seg(3, 0, 5, 0), seg(6, 1, 6, 4)]
            .into_iter()
            .collect();
        merge_structure(&mut s, 1.0, 1);
        let once = s.clone();
        merge_structure(&mut s, 1.0, 1);
        assert_eq!(s, once);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn missing_epsilon_is_an_error() {
        let mut structures = vec![Structure::from(vec![seg(0, 0, 2, 0), seg(3, 0, 5, 0)])];
        let err = merge_structures(&mut structures, None, 1).unwrap_err();
        assert!(matches!(err, LineFindError::MissingAngleEpsilon));
        assert_eq!(structures[0].len(), 2);

        assert!(matches!(
            CollinearMerger::new(Some(f64::NAN), 1),
            Err(LineFindError::InvalidArgument(_))
        ));
        assert!(CollinearMerger::new(Some(-1.0), 1).is_err());
    }

    #[test]
    fn merger_trait_object() {
        let merger: Box<dyn SegmentMerger> =
            Box::new(CollinearMerger::with_angle_epsilon(2.0).unwrap());
        let mut structures = vec![Structure::from(vec![seg(0, 0, 2, 0), seg(3, 0, 5, 0)])];
        merger.merge(&mut structures).unwrap();
        assert_eq!(structures[0].as_slice(), &[seg(0, 0, 5, 0)]);
    }
}
