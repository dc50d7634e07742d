use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed dataset {}: {}", .path.display(), .source)]
    Malformed { path: PathBuf, source: csv::Error },
    #[error("{}: missing column {:?}", .path.display(), .column)]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },
    #[error("{}:{}: invalid value {:?} in column {:?}", .path.display(), .line, .value, .column)]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Risk {
    Low,
    High,
}

impl Risk {
    pub fn as_f64(self) -> f64 {
        match self {
            Risk::Low => 0.0,
            Risk::High => 1.0,
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Risk::Low => f.pad("0"),
            Risk::High => f.pad("1"),
        }
    }
}

pub const HEALTH_FEATURES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthRecord {
    pub age: f64,
    pub bmi: f64,
    pub glucose: f64,
    pub risk: Risk,
}

impl HealthRecord {
    pub fn features(&self) -> [f64; HEALTH_FEATURES] {
        [self.age, self.bmi, self.glucose]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRecord {
    pub years_experience: f64,
    pub salary: f64,
}

pub fn load_health(path: impl AsRef<Path>) -> Result<Vec<HealthRecord>, DatasetError> {
    let path = path.as_ref();
    let mut reader = open(path)?;

    let headers = read_headers(&mut reader, path)?;
    let age_column = column_index(&headers, "age", path)?;
    let bmi_column = column_index(&headers, "bmi", path)?;
    let glucose_column = column_index(&headers, "glucose", path)?;
    let risk_column = column_index(&headers, "risk", path)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| DatasetError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        records.push(HealthRecord {
            age: numeric_field(&record, age_column, "age", path)?,
            bmi: numeric_field(&record, bmi_column, "bmi", path)?,
            glucose: numeric_field(&record, glucose_column, "glucose", path)?,
            risk: risk_field(&record, risk_column, path)?,
        });
    }

    Ok(records)
}

pub fn load_salary(path: impl AsRef<Path>) -> Result<Vec<SalaryRecord>, DatasetError> {
    let path = path.as_ref();
    let mut reader = open(path)?;

    let headers = read_headers(&mut reader, path)?;
    let years_column = column_index(&headers, "YearsExperience", path)?;
    let salary_column = column_index(&headers, "Salary", path)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| DatasetError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        records.push(SalaryRecord {
            years_experience: numeric_field(&record, years_column, "YearsExperience", path)?,
            salary: numeric_field(&record, salary_column, "Salary", path)?,
        });
    }

    Ok(records)
}

fn open(path: &Path) -> Result<csv::Reader<BufReader<File>>, DatasetError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file)))
}

fn read_headers(
    reader: &mut csv::Reader<BufReader<File>>,
    path: &Path,
) -> Result<StringRecord, DatasetError> {
    reader
        .headers()
        .map(StringRecord::clone)
        .map_err(|source| DatasetError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

fn column_index(
    headers: &StringRecord,
    column: &'static str,
    path: &Path,
) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            path: path.to_path_buf(),
            column,
        })
}

fn numeric_field(
    record: &StringRecord,
    index: usize,
    column: &'static str,
    path: &Path,
) -> Result<f64, DatasetError> {
    let raw = record.get(index).unwrap_or("").trim();

    raw.parse::<f64>().map_err(|_| DatasetError::InvalidValue {
        path: path.to_path_buf(),
        line: record.position().map_or(0, csv::Position::line),
        column,
        value: raw.to_string(),
    })
}

fn risk_field(record: &StringRecord, index: usize, path: &Path) -> Result<Risk, DatasetError> {
    let raw = record.get(index).unwrap_or("").trim();

    match raw {
        "0" => Ok(Risk::Low),
        "1" => Ok(Risk::High),
        _ => Err(DatasetError::InvalidValue {
            path: path.to_path_buf(),
            line: record.position().map_or(0, csv::Position::line),
            column: "risk",
            value: raw.to_string(),
        }),
    }
}
