//! Builds a piecewise cubic rational Bezier control polygon from anchors whose
//! motion is only known at the first point.

use nalgebra::Vector2;

/// Velocity and acceleration attached to an anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub velocity: Vector2<f64>,
    pub acceleration: Vector2<f64>,
}

impl Motion {
    pub fn new(velocity: Vector2<f64>, acceleration: Vector2<f64>) -> Self {
        Motion { velocity, acceleration }
    }
}

/// Interior control points `(c0, c1)` of the cubic segment starting at `point`.
/// # Example
/// ```
/// use curve_fit::derive_control_pair;
/// use nalgebra::Vector2;
///
/// let (c0, c1) = derive_control_pair(Vector2::new(3.0, 0.0), Vector2::new(6.0, 6.0), Vector2::new(1.0, 1.0));
/// assert_eq!(c0, Vector2::new(2.0, 1.0));
/// assert_eq!(c1, Vector2::new(4.0, 2.0));
/// ```
pub fn derive_control_pair(
    velocity: Vector2<f64>,
    acceleration: Vector2<f64>,
    point: Vector2<f64>,
) -> (Vector2<f64>, Vector2<f64>) {
    let c0 = point + velocity / 3.0;
    let c1 = point + velocity * 2.0 / 3.0 + acceleration / 6.0;
    (c0, c1)
}

/// Full control polygon `P0, c0, c1, P1, c0, c1, ..., Pn` with one weight per control point.
///
/// Interior control points inherit the weight of the anchor their segment starts at.
/// The last anchor gets no trailing control pair. All slices are expected to have the
/// same length; the shortest one bounds the result.
pub fn expand_to_control_polygon(
    points: &[Vector2<f64>],
    weights: &[f64],
    motions: &[Motion],
) -> (Vec<Vector2<f64>>, Vec<f64>) {
    let anchors = points.len().min(weights.len()).min(motions.len());
    if anchors == 0 {
        return (Vec::new(), Vec::new());
    }

    let size = 3 * (anchors - 1) + 1;
    let mut polygon = Vec::with_capacity(size);
    let mut polygon_weights = Vec::with_capacity(size);

    for i in 0..anchors - 1 {
        let (c0, c1) = derive_control_pair(motions[i].velocity, motions[i].acceleration, points[i]);
        polygon.extend([points[i], c0, c1]);
        polygon_weights.extend([weights[i]; 3]);
    }
    polygon.push(points[anchors - 1]);
    polygon_weights.push(weights[anchors - 1]);

    (polygon, polygon_weights)
}

/// Derives one [Motion] per point from the motion of the first point.
///
/// For every segment the control pair of the current motion is computed and the next
/// motion is proposed as `3 (c1 - P[i+1])` and `6 (c1 - 2 c0 + P[i])`. Each component of
/// the proposal is then divided by the matching component of the current motion when
/// that component is positive, and kept as proposed otherwise.
/// # Example
/// ```
/// use curve_fit::propagate_velocity_acceleration;
/// use nalgebra::Vector2;
///
/// let points = [Vector2::new(0.0, 0.0), Vector2::new(5.0, 5.0), Vector2::new(10.0, 0.0)];
/// let motions = propagate_velocity_acceleration(&points, Vector2::new(2.0, 2.0), Vector2::new(1.0, 1.0));
///
/// assert_eq!(motions.len(), 3);
/// assert_eq!(motions[0].velocity, Vector2::new(2.0, 2.0));
/// ```
pub fn propagate_velocity_acceleration(
    points: &[Vector2<f64>],
    velocity: Vector2<f64>,
    acceleration: Vector2<f64>,
) -> Vec<Motion> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut motions = Vec::with_capacity(points.len());
    motions.push(Motion::new(velocity, acceleration));

    for i in 0..points.len() - 1 {
        let current = motions[i];
        let (c0, c1) = derive_control_pair(current.velocity, current.acceleration, points[i]);

        let proposed_velocity = (c1 - points[i + 1]) * 3.0;
        let proposed_acceleration = (c1 - c0 * 2.0 + points[i]) * 6.0;

        motions.push(Motion::new(
            normalize(proposed_velocity, current.velocity),
            normalize(proposed_acceleration, current.acceleration),
        ));
    }
    motions
}

fn normalize(proposed: Vector2<f64>, previous: Vector2<f64>) -> Vector2<f64> {
    proposed.zip_map(&previous, |p, q| if q > 0.0 { p / q } else { p })
}
