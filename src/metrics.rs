/// Fraction of positionally matching label pairs, in `[0, 1]`.
pub fn accuracy(actual: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(
        actual.len(),
        predicted.len(),
        "actual and predicted must have the same length"
    );
    assert!(!actual.is_empty(), "accuracy of an empty set is undefined");

    let mut correct_predictions = 0;
    for (actual_label, predicted_label) in actual.iter().zip(predicted) {
        #[allow(clippy::float_cmp)]
        if actual_label == predicted_label {
            correct_predictions += 1;
        }
    }

    correct_predictions as f64 / actual.len() as f64
}
