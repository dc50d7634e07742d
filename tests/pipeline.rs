use rand::prelude::*;

use tabfit::{
    dataset::{self, HealthRecord, Risk},
    linear_regression::LinearRegression,
    logistic_regression::LogisticRegression,
    metrics::accuracy,
    split::train_test_split,
};

/// Rows cleanly separated on glucose; age and bmi are uncorrelated noise.
fn separable_health_rows(count: usize, seed: u64) -> Vec<HealthRecord> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let high_risk = i % 2 == 0;
            let glucose = if high_risk {
                150.0 + rng.gen::<f64>() * 50.0
            } else {
                70.0 + rng.gen::<f64>() * 30.0
            };

            HealthRecord {
                age: 20.0 + rng.gen::<f64>() * 50.0,
                bmi: 18.0 + rng.gen::<f64>() * 17.0,
                glucose,
                risk: if high_risk { Risk::High } else { Risk::Low },
            }
        })
        .collect()
}

#[test]
fn separable_data_scores_above_ninety_percent_held_out() {
    let records = separable_health_rows(100, 7);

    let (train, test) = train_test_split(&records, 0.3, 42);
    assert_eq!(train.len(), 70);
    assert_eq!(test.len(), 30);

    let train_features: Vec<_> = train.iter().map(HealthRecord::features).collect();
    let train_labels: Vec<f64> = train.iter().map(|record| record.risk.as_f64()).collect();

    let mut model = LogisticRegression::new(0.1);
    model.fit(&train_features, &train_labels, 1000).unwrap();

    let predictions: Vec<f64> = test
        .iter()
        .map(|record| model.predict(&record.features()))
        .collect();
    let test_labels: Vec<f64> = test.iter().map(|record| record.risk.as_f64()).collect();

    assert!(accuracy(&test_labels, &predictions) > 0.9);
}

#[test]
fn shipped_health_dataset_trains_end_to_end() {
    let records = dataset::load_health("health_risk_small.csv").unwrap();
    assert_eq!(records.len(), 20);

    let (train, test) = train_test_split(&records, 0.3, 42);
    assert_eq!(test.len(), 6);

    let train_features: Vec<_> = train.iter().map(HealthRecord::features).collect();
    let train_labels: Vec<f64> = train.iter().map(|record| record.risk.as_f64()).collect();

    let mut model = LogisticRegression::new(0.1);
    model.fit(&train_features, &train_labels, 1000).unwrap();

    let predictions: Vec<f64> = test
        .iter()
        .map(|record| model.predict(&record.features()))
        .collect();
    let test_labels: Vec<f64> = test.iter().map(|record| record.risk.as_f64()).collect();

    let score = accuracy(&test_labels, &predictions);
    assert!((0.0..=1.0).contains(&score));
    assert!(score >= 0.8, "accuracy {score} on a separable dataset");
}

#[test]
fn shipped_salary_dataset_fits_a_plausible_line() {
    let records = dataset::load_salary("salary_dataset.csv").unwrap();
    assert_eq!(records.len(), 30);

    let (train, test) = train_test_split(&records, 0.2, 42);
    assert_eq!(test.len(), 6);
    assert_eq!(train.len(), 24);

    let train_x: Vec<f64> = train
        .iter()
        .map(|record| record.years_experience)
        .collect();
    let train_y: Vec<f64> = train.iter().map(|record| record.salary).collect();

    let mut model = LinearRegression::new();
    model.fit(&train_x, &train_y).unwrap();

    assert!(model.slope() > 7_000.0 && model.slope() < 12_000.0);
    assert!(model.intercept() > 15_000.0 && model.intercept() < 35_000.0);

    for record in &test {
        assert!(model.predict(record.years_experience).is_finite());
    }
}

#[test]
fn repeated_splits_of_the_same_dataset_are_identical() {
    let records = dataset::load_salary("salary_dataset.csv").unwrap();

    let (first_train, first_test) = train_test_split(&records, 0.2, 42);
    let (second_train, second_test) = train_test_split(&records, 0.2, 42);

    assert_eq!(first_train, second_train);
    assert_eq!(first_test, second_test);
}
