use std::io::{self, Write};

use tabfit::{
    dataset, linear_regression::LinearRegression, plot, prompt::read_number,
    split::train_test_split,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const DATA_FILEPATH: &str = "salary_dataset.csv";
    const PLOT_FILEPATH: &str = "salary_regression.png";

    const TEST_FRACTION: f64 = 0.2;
    const SEED: u64 = 42;

    let records = dataset::load_salary(DATA_FILEPATH)?;

    let (train_records, test_records) = train_test_split(&records, TEST_FRACTION, SEED);

    let train_x: Vec<f64> = train_records
        .iter()
        .map(|record| record.years_experience)
        .collect();
    let train_y: Vec<f64> = train_records.iter().map(|record| record.salary).collect();

    let mut model = LinearRegression::new();
    model.fit(&train_x, &train_y)?;

    println!("Model Coefficient (Slope): {}", model.slope());
    println!("Model Intercept: {}", model.intercept());

    println!("\n{:>15} {:>18}", "Actual Salary", "Predicted Salary");
    for record in &test_records {
        println!(
            "{:>15.2} {:>18.2}",
            record.salary,
            model.predict(record.years_experience)
        );
    }

    plot::salary_regression(&records, &model, PLOT_FILEPATH)?;
    println!("saved {PLOT_FILEPATH}");

    print!("Enter years of experience: ");
    io::stdout().flush()?;
    let years = read_number(io::stdin().lock())?;

    println!("Predicted Salary: {}", model.predict(years));

    Ok(())
}
