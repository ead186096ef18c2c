use crate::types::LineSegment;

/// Slope `Δy/Δx`; `None` for points and vertical segments, `0` for horizontal ones
pub fn compute_slope(line: &LineSegment) -> Option<f64> {
    if line.is_point() {
        return None;
    }

    let delta_y = f64::from(line.y_end - line.y_start);
    let delta_x = f64::from(line.x_end - line.x_start);

    if delta_y == 0.0 {
        return Some(0.0);
    }
    if delta_x == 0.0 {
        return None;
    }
    Some(delta_y / delta_x)
}

/// Angle in degrees between the `start - end` direction vectors of two segments.
///
/// Orthogonal vectors (and points, whose vector is zero) give exactly 90°.
pub fn compute_angle(a: &LineSegment, b: &LineSegment) -> f64 {
    let (a1, a2) = (
        i64::from(a.x_start - a.x_end),
        i64::from(a.y_start - a.y_end),
    );
    let (b1, b2) = (
        i64::from(b.x_start - b.x_end),
        i64::from(b.y_start - b.y_end),
    );

    let dot = a1 * b1 + a2 * b2;
    if dot == 0 {
        return 90.0;
    }

    let norm_a = ((a1 * a1 + a2 * a2) as f64).sqrt();
    let norm_b = ((b1 * b1 + b2 * b2) as f64).sqrt();
    let cosine = dot as f64 / (norm_a * norm_b);

    // five decimals, then clamp into the acos domain
    let cosine = ((cosine * 1e5).round() / 1e5).clamp(-1.0, 1.0);
    cosine.acos().to_degrees()
}

/// `true` when the segments point the same way within `angle_epsilon` degrees.
///
/// Antiparallel segments (180° apart) do not qualify.
pub fn have_equal_slope(a: &LineSegment, b: &LineSegment, angle_epsilon: f64) -> bool {
    let angle = compute_angle(a, b);
    -angle_epsilon <= angle && angle <= angle_epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> LineSegment {
        LineSegment::new(x1, y1, x2, y2)
    }

    #[test]
    fn slope_cases() {
        assert_eq!(compute_slope(&LineSegment::point(2, 2)), None);
        assert_eq!(compute_slope(&seg(0, 3, 5, 3)), Some(0.0));
        assert_eq!(compute_slope(&seg(1, 0, 1, 4)), None);
        assert_eq!(compute_slope(&seg(0, 0, 4, 2)), Some(0.5));
        assert_eq!(compute_slope(&seg(4, 0, 0, 2)), Some(-0.5));
    }

    #[test]
    fn angle_cases() {
        assert_eq!(compute_angle(&seg(0, 0, 4, 0), &seg(0, 0, 0, 4)), 90.0);
        assert_eq!(compute_angle(&seg(0, 0, 4, 0), &seg(9, 9, 12, 9)), 0.0);
        assert!((compute_angle(&seg(0, 0, 4, 0), &seg(4, 0, 0, 0)) - 180.0).abs() < 1e-9);
        assert!((compute_angle(&seg(0, 0, 4, 0), &seg(0, 0, 3, 3)) - 45.0).abs() < 1e-3);
        assert_eq!(compute_angle(&LineSegment::point(1, 1), &seg(0, 0, 3, 3)), 90.0);
    }

    #[test]
    fn nearly_parallel_rounds_to_zero() {
        // cosine is 0.99999987..., rounded to 1.0
        let a = seg(0, 0, 2000, 0);
        let b = seg(0, 0, 2000, 1);
        assert_eq!(compute_angle(&a, &b), 0.0);
    }

    #[test]
    fn equal_slope_means_same_direction() {
        let a = seg(0, 0, 4, 0);
        assert!(have_equal_slope(&a, &seg(5, 0, 9, 0), 1.0));
        assert!(!have_equal_slope(&a, &seg(9, 0, 5, 0), 1.0));
        assert!(have_equal_slope(&a, &seg(0, 0, 10, 1), 6.0));
        assert!(!have_equal_slope(&a, &seg(0, 0, 10, 1), 5.0));
    }
}
