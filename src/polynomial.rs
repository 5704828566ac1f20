/// Polynomial in power form, coefficient index equals power of the parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {

    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { coefficients }
    }

    /// Polynomial without coefficients. Evaluates to 0 everywhere.
    pub fn zero() -> Self {
        Polynomial { coefficients: Vec::new() }
    }

    pub fn constant(value: f64) -> Self {
        Polynomial { coefficients: vec![value] }
    }

    /// Product of two polynomials (coefficient convolution).
    /// # Example
    /// ```
    /// use curve_fit::Polynomial;
    ///
    /// // (1 + t)(-1 + t) = -1 + t^2
    /// let product = Polynomial::new(vec![1.0, 1.0]).multiply(&Polynomial::new(vec![-1.0, 1.0]));
    /// assert_eq!(product.get_coefficients(), &[-1.0, 0.0, 1.0]);
    /// ```
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        if self.coefficients.is_empty() || other.coefficients.is_empty() {
            return Polynomial::zero();
        }

        let mut coefficients = vec![0.0; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        Polynomial { coefficients }
    }

    /// Coefficient-wise sum, missing coefficients of the shorter polynomial count as zero.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let size = self.coefficients.len().max(other.coefficients.len());
        let coefficients = (0..size)
            .map(|i| {
                self.coefficients.get(i).unwrap_or(&0.0) + other.coefficients.get(i).unwrap_or(&0.0)
            })
            .collect();
        Polynomial { coefficients }
    }

    pub fn scale(mut self, factor: f64) -> Polynomial {
        for c in self.coefficients.iter_mut() {
            *c *= factor;
        }
        self
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let mut result = 0.0;
        for (i, c) in self.coefficients.iter().enumerate() {
            result += x.powi(i as i32) * c
        }
        result
    }

    /// `None` for the empty polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn get_coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}
