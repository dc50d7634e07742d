use nalgebra::{DMatrix, DVector};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("least-squares system is singular: feature values have no variance")]
pub struct SingularError;

/// Ordinary least squares over a single feature: `y ≈ slope * x + intercept`.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    slope: f64,
    intercept: f64,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<(), SingularError> {
        assert_eq!(x.len(), y.len(), "x and y must have the same length");

        let samples_count = x.len();

        // X with a leading 1s column for the intercept
        let features = DMatrix::from_fn(samples_count, 2, |row, column| {
            if column == 0 {
                1.0
            } else {
                x[row]
            }
        });
        let targets = DVector::from_column_slice(y);

        let features_transpose = features.transpose();

        // (X^T * X)^-1
        let covariance = &features_transpose * &features;
        let covariance_inverse = covariance.try_inverse().ok_or(SingularError)?;

        // (X^T * X)^-1 * (X^T * y)
        let weights = covariance_inverse * features_transpose * targets;

        self.intercept = weights[0];
        self.slope = weights[1];

        Ok(())
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}
