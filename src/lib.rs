//! Curve interpolation engine fitting a continuous parametric curve through an ordered set
//! of weighted control points. Points may carry velocity and acceleration vectors.
//!
//! Two schemes are available:
//! - global Newton polynomial interpolation over positions, velocities and accelerations,
//! - rational Bezier interpolation, either directly over anchor points or over a piecewise
//!   cubic control polygon whose motion is propagated from the first point.
//!
//! # Example
//! ```
//! use curve_fit::{ControlPoint, CurveSampler, InterpolationMode};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![
//!     ControlPoint::with_motion(0.0, 0.0, 2.0, 2.0, 1.0, 1.0),
//!     ControlPoint::at(5.0, 5.0),
//!     ControlPoint::at(10.0, 0.0)
//! ];
//! let mut sampler = CurveSampler::new(InterpolationMode::Bezier);
//! let sample = sampler.sample(&points);
//!
//! assert_eq!(sample.points.len(), 500);
//! assert_approx_eq!(sample.points[499].x, 10.0, 1e-9);
//! assert_eq!(sample.derived_motion.unwrap().len(), 3);
//! ```

mod bezier;
mod binomial;
mod continuity;
mod newton;
mod point;
mod polynomial;
mod sampler;

pub use bezier::{bernstein, de_casteljau, de_casteljau_rational, evaluate_bezier, evaluate_rational_bezier};
pub use binomial::{BinomialTable, MAX_EXACT_ROW};
pub use continuity::{derive_control_pair, expand_to_control_polygon, propagate_velocity_acceleration, Motion};
pub use newton::{divided_differences, newton_form, NewtonInterpolant};
pub use point::ControlPoint;
pub use polynomial::Polynomial;
pub use sampler::{CurveSample, CurveSampler, InterpolationMode, DEFAULT_MAX_POINTS, DEFAULT_SAMPLE_COUNT, MAX_POINTS_LIMIT};
