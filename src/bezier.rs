//! Evaluation of polynomial and rational Bezier curves.
//!
//! Two strategies are provided: direct summation over the Bernstein basis and
//! De Casteljau's repeated linear interpolation. Both agree within floating point
//! tolerance for well-conditioned weights.

use nalgebra::Vector2;

use crate::binomial::BinomialTable;

const WEIGHT_EPSILON: f64 = 1e-12;

/// Bernstein basis polynomial `C(n, k) (1 - t)^(n - k) t^k`.
pub fn bernstein(binomials: &mut BinomialTable, n: usize, k: usize, t: f64) -> f64 {
    binomials.binomial(n, k) as f64 * (1.0 - t).powi((n - k) as i32) * t.powi(k as i32)
}

/// Evaluates polynomial Bezier curve with `control_points` at `t`.
/// # Example
/// ```
/// use curve_fit::{BinomialTable, evaluate_bezier};
/// use nalgebra::Vector2;
///
/// let mut binomials = BinomialTable::new();
/// let control_points = [Vector2::new(0.0, 0.0), Vector2::new(1.0, 2.0), Vector2::new(2.0, 0.0)];
/// assert_eq!(evaluate_bezier(&mut binomials, &control_points, 0.5), Vector2::new(1.0, 1.0));
/// ```
pub fn evaluate_bezier(binomials: &mut BinomialTable, control_points: &[Vector2<f64>], t: f64) -> Vector2<f64> {
    if control_points.is_empty() {
        return Vector2::zeros();
    }

    let n = control_points.len() - 1;
    control_points
        .iter()
        .enumerate()
        .fold(Vector2::<f64>::zeros(), |sum, (k, p)| sum + p * bernstein(binomials, n, k, t))
}

/// Evaluates rational Bezier curve at `t`.
///
/// Control points without a matching entry in `weights` get a weight of zero. When the
/// weighted basis sum vanishes (e.g. all weights are zero) the polynomial curve value is
/// returned instead.
pub fn evaluate_rational_bezier(
    binomials: &mut BinomialTable,
    control_points: &[Vector2<f64>],
    weights: &[f64],
    t: f64,
) -> Vector2<f64> {
    try_evaluate_rational_bezier(binomials, control_points, weights, t)
        .unwrap_or_else(|| evaluate_bezier(binomials, control_points, t))
}

/// Rational Bezier value at `t`, `None` when the weighted basis sum vanishes.
pub(crate) fn try_evaluate_rational_bezier(
    binomials: &mut BinomialTable,
    control_points: &[Vector2<f64>],
    weights: &[f64],
    t: f64,
) -> Option<Vector2<f64>> {
    if control_points.is_empty() {
        return Some(Vector2::zeros());
    }

    let n = control_points.len() - 1;
    let mut numerator: Vector2<f64> = Vector2::zeros();
    let mut denominator = 0.0;

    for (k, p) in control_points.iter().enumerate() {
        let w = weights.get(k).copied().unwrap_or(0.0);
        let basis = w * bernstein(binomials, n, k, t);
        numerator += p * basis;
        denominator += basis;
    }

    if denominator.abs() < WEIGHT_EPSILON {
        return None;
    }
    Some(numerator / denominator)
}

/// Polynomial Bezier curve value at `t` by De Casteljau's algorithm.
pub fn de_casteljau(control_points: &[Vector2<f64>], t: f64) -> Vector2<f64> {
    if control_points.is_empty() {
        return Vector2::zeros();
    }

    let mut points = control_points.to_vec();
    while points.len() > 1 {
        for i in 0..points.len() - 1 {
            points[i] = points[i] * (1.0 - t) + points[i + 1] * t;
        }
        points.pop();
    }
    points[0]
}

/// Rational Bezier curve value at `t` by De Casteljau's algorithm.
///
/// Weights are interpolated alongside positions and each blended position is divided by
/// its new weight. A vanishing intermediate weight falls back to [de_casteljau].
/// # Example
/// ```
/// use curve_fit::de_casteljau_rational;
/// use nalgebra::Vector2;
///
/// // quarter of the unit circle
/// let control_points = [Vector2::new(1.0, 0.0), Vector2::new(1.0, 1.0), Vector2::new(0.0, 1.0)];
/// let weights = [1.0, 1.0 / 2.0_f64.sqrt(), 1.0];
///
/// let point = de_casteljau_rational(&control_points, &weights, 0.3);
/// assert!((point.norm() - 1.0).abs() < 1e-12);
/// ```
pub fn de_casteljau_rational(control_points: &[Vector2<f64>], weights: &[f64], t: f64) -> Vector2<f64> {
    if control_points.is_empty() {
        return Vector2::zeros();
    }

    let mut points = control_points.to_vec();
    let mut point_weights = weights.to_vec();
    point_weights.resize(points.len(), 0.0);

    while points.len() > 1 {
        for i in 0..points.len() - 1 {
            let w0 = (1.0 - t) * point_weights[i];
            let w1 = t * point_weights[i + 1];
            let new_weight = w0 + w1;

            if new_weight.abs() < WEIGHT_EPSILON {
                return de_casteljau(control_points, t);
            }

            points[i] = (points[i] * w0 + points[i + 1] * w1) / new_weight;
            point_weights[i] = new_weight;
        }
        points.pop();
        point_weights.pop();
    }
    points[0]
}
