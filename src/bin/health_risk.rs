use tabfit::{
    dataset::{self, HealthRecord},
    logistic_regression::LogisticRegression,
    metrics::accuracy,
    plot,
    split::train_test_split,
};

fn print_table(records: &[HealthRecord]) {
    println!("{:>6} {:>6} {:>8} {:>5}", "age", "bmi", "glucose", "risk");
    for record in records {
        println!(
            "{:>6.1} {:>6.1} {:>8.1} {:>5}",
            record.age, record.bmi, record.glucose, record.risk
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const DATA_FILEPATH: &str = "health_risk_small.csv";
    const PLOT_FILEPATH: &str = "health_risk.png";

    const TEST_FRACTION: f64 = 0.3;
    const SEED: u64 = 42;
    const LEARNING_RATE: f64 = 0.1;
    const EPOCHS: usize = 1000;

    let records = dataset::load_health(DATA_FILEPATH)?;
    print_table(&records);

    let (train_records, test_records) = train_test_split(&records, TEST_FRACTION, SEED);

    let train_features: Vec<_> = train_records.iter().map(HealthRecord::features).collect();
    let train_labels: Vec<f64> = train_records
        .iter()
        .map(|record| record.risk.as_f64())
        .collect();

    let mut model = LogisticRegression::new(LEARNING_RATE);
    model.fit(&train_features, &train_labels, EPOCHS)?;

    let predictions: Vec<f64> = test_records
        .iter()
        .map(|record| model.predict(&record.features()))
        .collect();
    let test_labels: Vec<f64> = test_records
        .iter()
        .map(|record| record.risk.as_f64())
        .collect();

    println!("\nAccuracy: {:.3}", accuracy(&test_labels, &predictions));

    plot::health_scatter(&records, PLOT_FILEPATH)?;
    println!("saved {PLOT_FILEPATH}");

    Ok(())
}
