use std::{error::Error, fmt::Display};

use nalgebra::Vector2;

/// ControlPoint represents a point the curve is fitted through, with optional motion data.
/// - `position` - coordinates of the point,
/// - `velocity` - optional velocity vector, relative to `position`,
/// - `acceleration` - optional acceleration vector, relative to `position`,
/// - `weight` - rational weight, `1.0` by default.
///
/// An acceleration is never present without a velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    position: Vector2<f64>,
    velocity: Option<Vector2<f64>>,
    acceleration: Option<Vector2<f64>>,
    weight: f64,
}

impl ControlPoint {
    /// The most generic constructor of [ControlPoint].
    /// # Example
    /// ```
    /// use curve_fit::ControlPoint;
    /// use nalgebra::Vector2;
    ///
    /// let point = ControlPoint::new(Vector2::new(1.0, 2.0), Some(Vector2::new(0.5, 0.0)), None, 2.0);
    /// assert!(point.is_ok());
    /// ```
    /// # Errors
    /// Error is returned when `acceleration` is given without `velocity` or when any value is not finite.
    /// ```
    /// use curve_fit::ControlPoint;
    /// use nalgebra::Vector2;
    ///
    /// let point = ControlPoint::new(Vector2::new(1.0, 2.0), None, Some(Vector2::new(1.0, 1.0)), 1.0);
    /// assert!(point.is_err());
    /// ```
    pub fn new(
        position: Vector2<f64>,
        velocity: Option<Vector2<f64>>,
        acceleration: Option<Vector2<f64>>,
        weight: f64,
    ) -> Result<Self, Box<dyn Error>> {

        if acceleration.is_some() && velocity.is_none() {
            return Err(Box::new(
                PointError("acceleration is set while velocity is not".to_string())
            ))
        }

        let vectors_finite = [Some(position), velocity, acceleration]
            .iter()
            .flatten()
            .all(|v| v.iter().all(|c| c.is_finite()));
        if !vectors_finite || !weight.is_finite() {
            return Err(Box::new(PointError("values must be finite".to_string())))
        }

        Ok(ControlPoint { position, velocity, acceleration, weight })
    }

    /// Point with weight of 1 and no motion data.
    pub fn at(x: f64, y: f64) -> Self {
        ControlPoint { position: Vector2::new(x, y), velocity: None, acceleration: None, weight: 1.0 }
    }

    pub fn weighted(x: f64, y: f64, weight: f64) -> Self {
        ControlPoint { position: Vector2::new(x, y), velocity: None, acceleration: None, weight }
    }

    pub fn with_velocity(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        ControlPoint {
            position: Vector2::new(x, y),
            velocity: Some(Vector2::new(vx, vy)),
            acceleration: None,
            weight: 1.0,
        }
    }

    /// Point with both velocity and acceleration set.
    pub fn with_motion(x: f64, y: f64, vx: f64, vy: f64, ax: f64, ay: f64) -> Self {
        ControlPoint {
            position: Vector2::new(x, y),
            velocity: Some(Vector2::new(vx, vy)),
            acceleration: Some(Vector2::new(ax, ay)),
            weight: 1.0,
        }
    }

    pub fn set_position(&mut self, position: Vector2<f64>) {
        self.position = position;
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn set_velocity(&mut self, velocity: Vector2<f64>) {
        self.velocity = Some(velocity);
    }

    /// Sets acceleration, a point without velocity gets a zero velocity.
    /// # Example
    /// ```
    /// use curve_fit::ControlPoint;
    /// use nalgebra::Vector2;
    ///
    /// let mut point = ControlPoint::at(0.0, 0.0);
    /// point.set_acceleration(Vector2::new(1.0, 2.0));
    /// assert_eq!(point.get_velocity(), Some(Vector2::zeros()));
    /// ```
    pub fn set_acceleration(&mut self, acceleration: Vector2<f64>) {
        if self.velocity.is_none() {
            self.velocity = Some(Vector2::zeros());
        }
        self.acceleration = Some(acceleration);
    }

    /// Removes velocity together with acceleration.
    pub fn clear_velocity(&mut self) {
        self.velocity = None;
        self.acceleration = None;
    }

    pub fn clear_acceleration(&mut self) {
        self.acceleration = None;
    }

    pub fn get_position(&self) -> Vector2<f64> {
        self.position
    }

    pub fn get_velocity(&self) -> Option<Vector2<f64>> {
        self.velocity
    }

    pub fn get_acceleration(&self) -> Option<Vector2<f64>> {
        self.acceleration
    }

    pub fn get_weight(&self) -> f64 {
        self.weight
    }

    /// True when both velocity and acceleration are set.
    pub fn has_motion(&self) -> bool {
        self.velocity.is_some() && self.acceleration.is_some()
    }
}

#[derive(Debug)]
struct PointError(String);

impl Display for PointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in ControlPoint: {}", self.0)
    }
}

impl Error for PointError {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let position = Vector2::new(1.0, 2.5);
        let velocity = Vector2::new(0.5, -0.5);
        let acceleration = Vector2::new(-1.0, 3.0);
        let point = ControlPoint::new(position, Some(velocity), Some(acceleration), 0.5).unwrap();

        assert_eq!(position, point.position);
        assert_eq!(Some(velocity), point.velocity);
        assert_eq!(Some(acceleration), point.acceleration);
        assert_eq!(0.5, point.weight);
        assert!(point.has_motion());
    }

    #[test]
    fn test_at() {
        let point = ControlPoint::at(1.0, 2.5);

        assert_eq!(Vector2::new(1.0, 2.5), point.position);
        assert_eq!(None, point.velocity);
        assert_eq!(None, point.acceleration);
        assert_eq!(1.0, point.weight);
        assert!(!point.has_motion());
    }

    #[test]
    fn test_weighted_accepts_zero_and_negative() {
        assert_eq!(0.0, ControlPoint::weighted(1.0, 1.0, 0.0).weight);
        assert_eq!(-2.0, ControlPoint::weighted(1.0, 1.0, -2.0).weight);
        assert!(ControlPoint::new(Vector2::new(0.0, 0.0), None, None, -1.0).is_ok());
    }

    #[test]
    fn test_with_velocity() {
        let point = ControlPoint::with_velocity(1.0, 2.5, 3.0, 4.0);

        assert_eq!(Some(Vector2::new(3.0, 4.0)), point.velocity);
        assert_eq!(None, point.acceleration);
        assert!(!point.has_motion());
    }

    #[test]
    fn test_with_motion() {
        let point = ControlPoint::with_motion(1.0, 2.5, 3.0, 4.0, 5.0, 6.0);

        assert_eq!(Some(Vector2::new(3.0, 4.0)), point.velocity);
        assert_eq!(Some(Vector2::new(5.0, 6.0)), point.acceleration);
        assert!(point.has_motion());
    }

    #[test]
    fn test_acceleration_without_velocity_error() {
        let point = ControlPoint::new(Vector2::new(0.0, 0.0), None, Some(Vector2::new(1.0, 1.0)), 1.0);

        assert!(point.is_err());
    }

    #[test]
    fn test_non_finite_error() {
        assert!(ControlPoint::new(Vector2::new(f64::NAN, 0.0), None, None, 1.0).is_err());
        assert!(ControlPoint::new(Vector2::new(0.0, 0.0), Some(Vector2::new(f64::INFINITY, 0.0)), None, 1.0).is_err());
        assert!(ControlPoint::new(Vector2::new(0.0, 0.0), None, None, f64::NAN).is_err());
    }

    #[test]
    fn test_set_acceleration_synthesizes_velocity() {
        let mut point = ControlPoint::at(1.0, 1.0);
        point.set_acceleration(Vector2::new(2.0, 0.0));

        assert_eq!(Some(Vector2::zeros()), point.velocity);
        assert_eq!(Some(Vector2::new(2.0, 0.0)), point.acceleration);

        // existing velocity is kept
        let mut point = ControlPoint::with_velocity(1.0, 1.0, 3.0, 3.0);
        point.set_acceleration(Vector2::new(2.0, 0.0));
        assert_eq!(Some(Vector2::new(3.0, 3.0)), point.velocity);
    }

    #[test]
    fn test_clear_velocity_cascades() {
        let mut point = ControlPoint::with_motion(0.0, 0.0, 1.0, 1.0, 2.0, 2.0);
        point.clear_velocity();

        assert_eq!(None, point.velocity);
        assert_eq!(None, point.acceleration);
    }

    #[test]
    fn test_clear_acceleration_keeps_velocity() {
        let mut point = ControlPoint::with_motion(0.0, 0.0, 1.0, 1.0, 2.0, 2.0);
        point.clear_acceleration();

        assert_eq!(Some(Vector2::new(1.0, 1.0)), point.velocity);
        assert_eq!(None, point.acceleration);
    }

    #[test]
    fn test_setters() {
        let mut point = ControlPoint::at(0.0, 0.0);
        point.set_position(Vector2::new(-3.0, 4.0));
        point.set_weight(0.25);
        point.set_velocity(Vector2::new(1.0, 0.0));

        assert_eq!(Vector2::new(-3.0, 4.0), point.get_position());
        assert_eq!(0.25, point.get_weight());
        assert_eq!(Some(Vector2::new(1.0, 0.0)), point.get_velocity());
    }
}
