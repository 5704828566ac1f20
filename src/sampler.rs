use log::{debug, warn};
use nalgebra::Vector2;

use crate::{
    bezier::{evaluate_bezier, try_evaluate_rational_bezier},
    binomial::{BinomialTable, MAX_EXACT_ROW},
    continuity::{expand_to_control_polygon, propagate_velocity_acceleration, Motion},
    newton::NewtonInterpolant,
    point::ControlPoint,
};

pub const DEFAULT_SAMPLE_COUNT: usize = 500;
pub const DEFAULT_MAX_POINTS: usize = 20;
/// Largest point cap whose propagated control polygon keeps binomial coefficients exact.
pub const MAX_POINTS_LIMIT: usize = MAX_EXACT_ROW / 3 + 1;

/// Scheme used to fit the curve through control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Single global Newton polynomial through positions, velocities and accelerations.
    #[default]
    Newton,
    /// Single rational Bezier curve over anchors or over the propagated control polygon.
    Bezier,
}

/// Polyline produced by [CurveSampler::sample].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSample {
    pub points: Vec<Vector2<f64>>,
    /// Per point motion inferred in Bezier mode when the first point carries velocity and acceleration.
    pub derived_motion: Option<Vec<Motion>>,
}

impl CurveSample {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Turns an ordered set of control points into a fixed resolution polyline.
/// # Example
/// ```
/// use curve_fit::{ControlPoint, CurveSampler, InterpolationMode};
///
/// let mut sampler = CurveSampler::new(InterpolationMode::Newton);
/// let points = vec![ControlPoint::at(0.0, 0.0), ControlPoint::at(10.0, 0.0)];
///
/// let sample = sampler.sample(&points);
/// assert_eq!(sample.points.len(), 500);
/// assert_eq!(sample.points[0].x, 0.0);
/// assert_eq!(sample.points[499].x, 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct CurveSampler {
    mode: InterpolationMode,
    sample_count: usize,
    max_points: usize,
    binomials: BinomialTable,
}

impl CurveSampler {
    pub fn new(mode: InterpolationMode) -> Self {
        CurveSampler {
            mode,
            sample_count: DEFAULT_SAMPLE_COUNT,
            max_points: DEFAULT_MAX_POINTS,
            binomials: BinomialTable::with_rows(polygon_degree(DEFAULT_MAX_POINTS)),
        }
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Caps the number of points used per refresh, extra points are ignored.
    /// The cap itself is limited to [MAX_POINTS_LIMIT].
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        if max_points > MAX_POINTS_LIMIT {
            warn!("point cap {} lowered to {}", max_points, MAX_POINTS_LIMIT);
        }
        self.max_points = max_points.min(MAX_POINTS_LIMIT);
        self.binomials.grow_to(polygon_degree(self.max_points));
        self
    }

    pub fn set_mode(&mut self, mode: InterpolationMode) {
        self.mode = mode;
    }

    pub fn get_mode(&self) -> InterpolationMode {
        self.mode
    }

    pub fn get_sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn get_max_points(&self) -> usize {
        self.max_points
    }

    /// Samples the curve through `points` with the active mode.
    ///
    /// Fewer than two points give an empty sample.
    pub fn sample(&mut self, points: &[ControlPoint]) -> CurveSample {
        let points = if points.len() > self.max_points {
            warn!(
                "{} control points given, only the first {} are used",
                points.len(),
                self.max_points
            );
            &points[..self.max_points]
        } else {
            points
        };

        debug!(
            "sampling {:?} curve through {} points with {} samples",
            self.mode,
            points.len(),
            self.sample_count
        );

        if points.len() < 2 {
            return CurveSample::default();
        }

        match self.mode {
            InterpolationMode::Newton => self.sample_newton(points),
            InterpolationMode::Bezier => self.sample_bezier(points),
        }
    }

    fn sample_newton(&self, points: &[ControlPoint]) -> CurveSample {
        let interpolant = NewtonInterpolant::from_points(points);
        let span = interpolant.parameter_span();

        let samples = parameter_steps(self.sample_count)
            .map(|t| interpolant.evaluate(t * span))
            .collect();
        CurveSample { points: samples, derived_motion: None }
    }

    fn sample_bezier(&mut self, points: &[ControlPoint]) -> CurveSample {
        match (points[0].get_velocity(), points[0].get_acceleration()) {
            (Some(velocity), Some(acceleration)) => {
                self.sample_propagated(points, velocity, acceleration)
            }
            _ => self.sample_anchors(points),
        }
    }

    fn sample_anchors(&mut self, points: &[ControlPoint]) -> CurveSample {
        let last = points.len() - 1;
        let (anchors, weights): (Vec<Vector2<f64>>, Vec<f64>) = points
            .iter()
            .enumerate()
            .filter(|(i, p)| *i == 0 || *i == last || p.get_velocity().is_some())
            .map(|(_, p)| (p.get_position(), p.get_weight()))
            .unzip();

        CurveSample { points: self.evaluate_polygon(&anchors, &weights), derived_motion: None }
    }

    fn sample_propagated(
        &mut self,
        points: &[ControlPoint],
        velocity: Vector2<f64>,
        acceleration: Vector2<f64>,
    ) -> CurveSample {
        let positions: Vec<Vector2<f64>> = points.iter().map(|p| p.get_position()).collect();
        let weights: Vec<f64> = points.iter().map(|p| p.get_weight()).collect();

        let motions = propagate_velocity_acceleration(&positions, velocity, acceleration);
        let (polygon, polygon_weights) = expand_to_control_polygon(&positions, &weights, &motions);

        CurveSample {
            points: self.evaluate_polygon(&polygon, &polygon_weights),
            derived_motion: Some(motions),
        }
    }

    fn evaluate_polygon(&mut self, polygon: &[Vector2<f64>], weights: &[f64]) -> Vec<Vector2<f64>> {
        if polygon.len() < 2 {
            return Vec::new();
        }

        let mut unweighted = 0;
        let samples: Vec<Vector2<f64>> = parameter_steps(self.sample_count)
            .map(|t| {
                try_evaluate_rational_bezier(&mut self.binomials, polygon, weights, t).unwrap_or_else(|| {
                    unweighted += 1;
                    evaluate_bezier(&mut self.binomials, polygon, t)
                })
            })
            .collect();

        if unweighted > 0 {
            warn!(
                "weight sum vanished at {} of {} samples, those were sampled unweighted",
                unweighted,
                samples.len()
            );
        }
        samples
    }
}

impl Default for CurveSampler {
    fn default() -> Self {
        CurveSampler::new(InterpolationMode::default())
    }
}

/// Degree of the propagated control polygon built from `points` anchors.
fn polygon_degree(points: usize) -> usize {
    3 * points.saturating_sub(1)
}

/// `count` values uniformly spaced over `[0, 1]`, both ends included.
fn parameter_steps(count: usize) -> impl Iterator<Item = f64> {
    let last = count.saturating_sub(1).max(1) as f64;
    (0..count).map(move |i| i as f64 / last)
}
