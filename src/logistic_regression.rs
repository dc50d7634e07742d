use ndarray::{Array1, ArrayView1};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("gradient descent produced non-finite weights after {epochs} epochs")]
pub struct ConvergenceError {
    pub epochs: usize,
}

/// Binary logistic-regression classifier over `D` numeric features, trained
/// with full-batch gradient descent. Labels are 0.0 or 1.0.
pub struct LogisticRegression<const D: usize> {
    weights: Array1<f64>,
    bias: f64,
    means: [f64; D],
    std_devs: [f64; D],
    learning_rate: f64,
}

impl<const D: usize> LogisticRegression<D> {
    pub fn new(learning_rate: f64) -> Self {
        Self {
            weights: Array1::zeros(D),
            bias: 0.0,
            means: [0.0; D],
            std_devs: [1.0; D],
            learning_rate,
        }
    }

    pub fn fit(
        &mut self,
        features: &[[f64; D]],
        labels: &[f64],
        epochs: usize,
    ) -> Result<(), ConvergenceError> {
        assert_eq!(
            features.len(),
            labels.len(),
            "features and labels must have the same length"
        );

        self.fit_scaling(features);
        let scaled: Vec<[f64; D]> = features.iter().map(|sample| self.scale(sample)).collect();

        for _ in 0..epochs {
            self.step(&scaled, labels);
        }

        if self.bias.is_finite() && self.weights.iter().all(|weight| weight.is_finite()) {
            Ok(())
        } else {
            Err(ConvergenceError { epochs })
        }
    }

    pub fn predict(&self, features: &[f64; D]) -> f64 {
        let scaled = self.scale(features);
        let score = ArrayView1::from(&scaled[..]).dot(&self.weights) + self.bias;
        let predicted_probability = sigmoid(score);

        if predicted_probability > 0.5 {
            1.0
        } else {
            0.0
        }
    }

    fn step(&mut self, scaled_features: &[[f64; D]], labels: &[f64]) {
        let mut gradient = Array1::zeros(D);
        let mut bias_gradient = 0.0;
        let n_samples = scaled_features.len() as f64;

        for (sample, &label) in scaled_features.iter().zip(labels) {
            let score = ArrayView1::from(&sample[..]).dot(&self.weights) + self.bias;
            let residual = sigmoid(score) - label;

            let sample_features = ArrayView1::from(&sample[..]);
            gradient.zip_mut_with(&sample_features, |current_gradient, &feature_value| {
                *current_gradient += feature_value * residual;
            });
            bias_gradient += residual;
        }

        gradient /= n_samples;
        bias_gradient /= n_samples;

        self.weights = &self.weights - self.learning_rate * gradient;
        self.bias -= self.learning_rate * bias_gradient;
    }

    // Columns keep their mean and standard deviation from `fit` so raw
    // feature ranges can be fed back to `predict` unchanged.
    fn fit_scaling(&mut self, features: &[[f64; D]]) {
        let n_samples = features.len() as f64;

        for column in 0..D {
            let mean = features.iter().map(|sample| sample[column]).sum::<f64>() / n_samples;
            let variance = features
                .iter()
                .map(|sample| (sample[column] - mean).powi(2))
                .sum::<f64>()
                / n_samples;
            let std_dev = variance.sqrt();

            self.means[column] = mean;
            self.std_devs[column] = if std_dev > 0.0 { std_dev } else { 1.0 };
        }
    }

    fn scale(&self, features: &[f64; D]) -> [f64; D] {
        let mut scaled = [0.0; D];
        for (column, &value) in features.iter().enumerate() {
            scaled[column] = (value - self.means[column]) / self.std_devs[column];
        }

        scaled
    }
}

fn sigmoid(score: f64) -> f64 {
    1.0 / (1.0 + (-score).exp())
}
