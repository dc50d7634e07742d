use std::error::Error;

use plotters::prelude::*;

use crate::dataset::{HealthRecord, Risk, SalaryRecord};
use crate::linear_regression::LinearRegression;

const CHART_SIZE: (u32, u32) = (800, 600);
const POINT_SIZE: i32 = 4;

/// Scatter of age against glucose, colored by the true risk label.
pub fn health_scatter(records: &[HealthRecord], path: &str) -> Result<(), Box<dyn Error>> {
    let drawing_area = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let (age_min, age_max) = padded_range(records.iter().map(|record| record.age));
    let (glucose_min, glucose_max) = padded_range(records.iter().map(|record| record.glucose));

    let mut chart = ChartBuilder::on(&drawing_area)
        .caption("Health Risk Dataset Visualization", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(age_min..age_max, glucose_min..glucose_max)?;

    chart
        .configure_mesh()
        .x_desc("Age")
        .y_desc("Glucose Level")
        .draw()?;

    chart.draw_series(records.iter().map(|record| {
        let color = match record.risk {
            Risk::High => RED,
            Risk::Low => BLUE,
        };
        Circle::new((record.age, record.glucose), POINT_SIZE, color.filled())
    }))?;

    drawing_area.present()?;

    Ok(())
}

/// Scatter of the raw salary pairs with the fitted line drawn across the
/// full feature range.
pub fn salary_regression(
    records: &[SalaryRecord],
    model: &LinearRegression,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let drawing_area = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let (years_min, years_max) = padded_range(records.iter().map(|record| record.years_experience));
    let (salary_min, salary_max) = padded_range(records.iter().map(|record| record.salary));

    let mut chart = ChartBuilder::on(&drawing_area)
        .caption("Salary Prediction Using Linear Regression", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(years_min..years_max, salary_min..salary_max)?;

    chart
        .configure_mesh()
        .x_desc("Years of Experience")
        .y_desc("Salary")
        .draw()?;

    chart.draw_series(records.iter().map(|record| {
        Circle::new(
            (record.years_experience, record.salary),
            POINT_SIZE,
            BLUE.filled(),
        )
    }))?;

    chart.draw_series(LineSeries::new(
        [years_min, years_max]
            .into_iter()
            .map(|years| (years, model.predict(years))),
        RED.stroke_width(3),
    ))?;

    drawing_area.present()?;

    Ok(())
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in values {
        min = min.min(value);
        max = max.max(value);
    }

    let padding = ((max - min) * 0.05).max(1.0);

    (min - padding, max + padding)
}
