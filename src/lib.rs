pub mod dataset;
pub mod linear_regression;
pub mod logistic_regression;
pub mod metrics;
pub mod plot;
pub mod prompt;
pub mod split;
