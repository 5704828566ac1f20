use nalgebra::Vector2;

use crate::{point::ControlPoint, polynomial::Polynomial};

/// Divided-difference pyramid of `values` sampled at unit parameter steps.
///
/// Stage 0 is `values` itself and every following stage is one element shorter.
/// # Example
/// ```
/// use curve_fit::divided_differences;
///
/// let table = divided_differences(&[1.0, 4.0, 9.0]);
/// assert_eq!(table, vec![vec![1.0, 4.0, 9.0], vec![3.0, 5.0], vec![1.0]]);
/// ```
pub fn divided_differences(values: &[f64]) -> Vec<Vec<f64>> {
    let mut table: Vec<Vec<f64>> = Vec::with_capacity(values.len());
    if values.is_empty() {
        return table;
    }

    table.push(values.to_vec());
    for stage in 0..values.len() - 1 {
        let next = table[stage]
            .windows(2)
            .map(|w| (w[1] - w[0]) / (stage + 1) as f64)
            .collect();
        table.push(next);
    }
    table
}

/// Newton form `sum_i table[i][0] * (t - 0)(t - 1)...(t - (i - 1))` in power form.
pub fn newton_form(table: &[Vec<f64>]) -> Polynomial {
    let mut result = Polynomial::zero();
    let mut basis = Polynomial::constant(1.0);

    for (i, stage) in table.iter().enumerate() {
        if i > 0 {
            basis = basis.multiply(&Polynomial::new(vec![-((i - 1) as f64), 1.0]));
        }
        let coefficient = stage.first().copied().unwrap_or(0.0);
        result = result.add(&basis.clone().scale(coefficient));
    }
    result
}

/// Pair of Newton polynomials interpolating x and y coordinates over `t = 0, 1, ..., len - 1`.
///
/// The power form is kept for inspection, while [NewtonInterpolant::evaluate] uses the
/// barycentric form of the same polynomial, which stays accurate at high degrees where
/// power sums lose all precision.
#[derive(Debug, Clone)]
pub struct NewtonInterpolant {
    x_polynomial: Polynomial,
    y_polynomial: Polynomial,
    samples: Vec<Vector2<f64>>,
    barycentric_weights: Vec<f64>,
}

impl NewtonInterpolant {

    /// Interpolant through the flattened point sequence: each point contributes its position,
    /// then its velocity and acceleration when present.
    pub fn from_points(points: &[ControlPoint]) -> Self {
        let samples: Vec<Vector2<f64>> = points
            .iter()
            .flat_map(|p| {
                std::iter::once(p.get_position())
                    .chain(p.get_velocity())
                    .chain(p.get_acceleration())
            })
            .collect();

        let xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
        let ys: Vec<f64> = samples.iter().map(|s| s.y).collect();
        NewtonInterpolant::from_samples(&xs, &ys)
    }

    /// Interpolant through `(xs[i], ys[i])` at `t = i`. The shorter slice bounds the samples.
    pub fn from_samples(xs: &[f64], ys: &[f64]) -> Self {
        let len = xs.len().min(ys.len());
        let (xs, ys) = (&xs[..len], &ys[..len]);

        NewtonInterpolant {
            x_polynomial: newton_form(&divided_differences(xs)),
            y_polynomial: newton_form(&divided_differences(ys)),
            samples: xs.iter().zip(ys).map(|(x, y)| Vector2::new(*x, *y)).collect(),
            barycentric_weights: equispaced_weights(len),
        }
    }

    /// Value of the interpolant at `t`, exact at the sample parameters.
    /// # Example
    /// ```
    /// use curve_fit::NewtonInterpolant;
    /// use nalgebra::Vector2;
    ///
    /// let interpolant = NewtonInterpolant::from_samples(&[0.0, 1.0, 4.0], &[2.0, 2.0, 2.0]);
    /// assert_eq!(interpolant.evaluate(2.0), Vector2::new(4.0, 2.0));
    /// assert!((interpolant.evaluate(1.5).x - 2.25).abs() < 1e-12);
    /// ```
    pub fn evaluate(&self, t: f64) -> Vector2<f64> {
        if self.samples.is_empty() {
            return Vector2::zeros();
        }

        let mut numerator: Vector2<f64> = Vector2::zeros();
        let mut denominator = 0.0;
        for (j, (sample, weight)) in self.samples.iter().zip(&self.barycentric_weights).enumerate() {
            let offset = t - j as f64;
            if offset == 0.0 {
                return *sample;
            }
            let term = weight / offset;
            numerator += sample * term;
            denominator += term;
        }
        numerator / denominator
    }

    /// Upper bound of the parameter range, the lower bound is 0.
    pub fn parameter_span(&self) -> f64 {
        self.samples.len().saturating_sub(1) as f64
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get_x_polynomial(&self) -> &Polynomial {
        &self.x_polynomial
    }

    pub fn get_y_polynomial(&self) -> &Polynomial {
        &self.y_polynomial
    }
}

/// Barycentric weights `(-1)^j C(n, j)` of `len` nodes at unit spacing.
fn equispaced_weights(len: usize) -> Vec<f64> {
    let n = len.saturating_sub(1);
    let mut weights = Vec::with_capacity(len);
    let mut weight = 1.0;
    for j in 0..len {
        weights.push(weight);
        weight *= -((n - j) as f64) / (j + 1) as f64;
    }
    weights
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn table_of_squares() {
        let table = divided_differences(&[0.0, 1.0, 4.0, 9.0, 16.0]);

        assert_eq!(table.len(), 5);
        assert_eq!(table[1], vec![1.0, 3.0, 5.0, 7.0]);
        assert_eq!(table[2], vec![1.0, 1.0, 1.0]);
        assert_eq!(table[3], vec![0.0, 0.0]);
        assert_eq!(table[4], vec![0.0]);
    }

    #[test]
    fn table_empty() {
        assert!(divided_differences(&[]).is_empty());
        assert_eq!(divided_differences(&[2.0]), vec![vec![2.0]]);
    }

    #[test]
    fn newton_form_of_squares() {
        let polynomial = newton_form(&divided_differences(&[0.0, 1.0, 4.0, 9.0]));

        assert_eq!(polynomial.get_coefficients(), &[0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn newton_form_degenerate() {
        assert_eq!(newton_form(&[]).degree(), None);

        let constant = newton_form(&divided_differences(&[3.5]));
        assert_eq!(constant.degree(), Some(0));
        assert_eq!(constant.evaluate(10.0), 3.5);
    }

    #[test]
    fn passes_through_samples() {
        use rand::Rng;

        let mut rng = rand::thread_rng();

        for size in 1..=8 {
            let values: Vec<f64> = (0..size).map(|_| rng.gen_range(-20.0..20.0)).collect();
            let polynomial = newton_form(&divided_differences(&values));

            assert_eq!(polynomial.degree(), Some(size - 1));
            for (i, value) in values.iter().enumerate() {
                assert_approx_eq!(polynomial.evaluate(i as f64), *value, 1e-6);
            }
        }
    }

    #[test]
    fn interpolant_passes_through_samples_at_full_size() {
        use rand::Rng;

        let eps = 1e-9;
        let mut rng = rand::thread_rng();

        // 20 points with velocity and acceleration flatten to 60 samples
        for size in [10, 20, 30, 60] {
            let alternating: Vec<f64> = (0..size).map(|i| if i % 2 == 0 { -20.0 } else { 20.0 }).collect();
            let random: Vec<f64> = (0..size).map(|_| rng.gen_range(-20.0..20.0)).collect();
            let interpolant = NewtonInterpolant::from_samples(&alternating, &random);

            for i in 0..size {
                let value = interpolant.evaluate(i as f64);
                assert_approx_eq!(value.x, alternating[i], eps);
                assert_approx_eq!(value.y, random[i], eps);
            }
        }
    }

    #[test]
    fn evaluate_matches_power_form() {
        use rand::Rng;

        let eps = 1e-6;
        let mut rng = rand::thread_rng();

        for size in 2..=8 {
            let xs: Vec<f64> = (0..size).map(|_| rng.gen_range(-20.0..20.0)).collect();
            let ys: Vec<f64> = (0..size).map(|_| rng.gen_range(-20.0..20.0)).collect();
            let interpolant = NewtonInterpolant::from_samples(&xs, &ys);

            for _ in 0..10 {
                let t = rng.gen_range(0.0..interpolant.parameter_span());
                let value = interpolant.evaluate(t);
                assert_approx_eq!(value.x, interpolant.get_x_polynomial().evaluate(t), eps);
                assert_approx_eq!(value.y, interpolant.get_y_polynomial().evaluate(t), eps);
            }
        }
    }

    #[test]
    fn barycentric_weights() {
        assert_eq!(equispaced_weights(0), Vec::<f64>::new());
        assert_eq!(equispaced_weights(1), vec![1.0]);
        assert_eq!(equispaced_weights(4), vec![1.0, -3.0, 3.0, -1.0]);
    }

    #[test]
    fn from_points_flattens_motion() {
        let eps = 1e-9;
        let points = vec![
            ControlPoint::at(0.0, 0.0),
            ControlPoint::with_motion(2.0, 1.0, 0.5, 0.5, -1.0, 1.0),
            ControlPoint::with_velocity(4.0, 0.0, 1.0, -2.0),
        ];

        let interpolant = NewtonInterpolant::from_points(&points);

        assert_eq!(interpolant.len(), 6);
        assert_eq!(interpolant.parameter_span(), 5.0);

        let expected = [
            (0.0, 0.0),
            (2.0, 1.0),
            (0.5, 0.5),
            (-1.0, 1.0),
            (4.0, 0.0),
            (1.0, -2.0),
        ];
        for (t, (x, y)) in expected.iter().enumerate() {
            let value = interpolant.evaluate(t as f64);
            assert_approx_eq!(value.x, *x, eps);
            assert_approx_eq!(value.y, *y, eps);
        }
    }

    #[test]
    fn from_points_degenerate() {
        let empty = NewtonInterpolant::from_points(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.parameter_span(), 0.0);
        assert_eq!(empty.evaluate(1.0), Vector2::zeros());

        let single = NewtonInterpolant::from_points(&[ControlPoint::at(3.0, -1.0)]);
        assert_eq!(single.len(), 1);
        assert_eq!(single.get_x_polynomial().degree(), Some(0));
        assert_approx_eq!(single.evaluate(0.7).x, 3.0, 1e-12);
        assert_approx_eq!(single.evaluate(0.7).y, -1.0, 1e-12);
        assert_eq!(single.evaluate(0.0), Vector2::new(3.0, -1.0));
    }

    #[test]
    fn two_points_are_a_line() {
        let eps = 1e-12;
        let interpolant = NewtonInterpolant::from_points(&[ControlPoint::at(0.0, 0.0), ControlPoint::at(10.0, 0.0)]);

        assert_eq!(interpolant.get_x_polynomial().get_coefficients(), &[0.0, 10.0]);
        assert_approx_eq!(interpolant.evaluate(0.25).x, 2.5, eps);
        assert_approx_eq!(interpolant.evaluate(0.25).y, 0.0, eps);
    }
}
