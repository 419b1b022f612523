//! Dataset loading and synthesis.

use crate::diagnostics;
use crate::Result;

use anyhow::Context;
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Number of rows in a synthetic dataset.
pub const DATASET_SIZE: usize = 100;

/// Tiled scenario: fixed 20-row department pattern, repeated to fill the
/// dataset. No randomness in this column.
const DEPARTMENT_CYCLE: [&str; 20] = [
    "IT", "IT", "R&D", "Sales", "IT", "Finance", "Finance", "HR", "Sales", "Finance",
    "IT", "R&D", "Sales", "Finance", "HR", "IT", "Sales", "Finance", "R&D", "HR",
];

/// Tiled scenario: fixed 5-row region pattern, repeated to fill the dataset.
const REGION_CYCLE: [&str; 5] = [
    "Africa",
    "Middle East",
    "Africa",
    "North America",
    "Asia Pacific",
];

/// Sampled scenario: rows guaranteed to be Finance before any draws happen.
const FINANCE_HEADCOUNT: usize = 8;

/// Sampled scenario: departments drawn for the rows after the Finance block.
const SAMPLED_DEPARTMENTS: [&str; 6] = ["IT", "R&D", "Sales", "HR", "Operations", "Marketing"];

/// Sampled scenario: region vocabulary, drawn uniformly per row.
const SAMPLED_REGIONS: [&str; 5] = [
    "North America",
    "Europe",
    "Asia Pacific",
    "Middle East",
    "Africa",
];

/// A single employee observation.
///
/// When loading from a file only `department` is required; the remaining
/// columns default when absent, and columns we do not model are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub employee_id: String,
    pub department: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub performance_score: f64,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub satisfaction_rating: f64,
}

/// The full ordered collection of records for one run. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

/// How the synthetic department/region columns are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Fixed repeating department and region patterns.
    Tiled,
    /// Eight guaranteed Finance rows, the rest drawn uniformly.
    Sampled,
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scenario::Tiled => write!(f, "tiled"),
            Scenario::Sampled => write!(f, "sampled"),
        }
    }
}

/// Where the dataset comes from, decided once at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    FromFile(PathBuf),
    Synthesized { scenario: Scenario, seed: u64 },
}

impl DatasetSource {
    /// Prefer an existing dataset file; fall back to synthesis.
    pub fn detect(csv: PathBuf, scenario: Scenario, seed: u64) -> Self {
        if csv.exists() {
            DatasetSource::FromFile(csv)
        } else {
            DatasetSource::Synthesized { scenario, seed }
        }
    }

    pub fn load(&self) -> Result<Dataset> {
        match self {
            DatasetSource::FromFile(path) => Dataset::from_csv(path),
            DatasetSource::Synthesized { scenario, seed } => {
                diagnostics::note(format!(
                    "no dataset file found; synthesizing {} records ({} scenario, seed {})",
                    DATASET_SIZE, scenario, seed
                ));
                let mut rng = StdRng::seed_from_u64(*seed);
                Ok(Dataset::synthesize(*scenario, &mut rng))
            }
        }
    }
}

impl Dataset {
    /// Load records from a CSV file with a header row.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).with_context(|| {
            diagnostics::error_message(format!("read dataset file {}", path.display()))
        })?;

        let mut records = Vec::new();
        for (lineno, row) in reader.deserialize().enumerate() {
            // Header occupies line 1.
            let record: Record = row.with_context(|| {
                diagnostics::error_message(format!(
                    "bad record at {}:{}",
                    path.display(),
                    lineno + 2
                ))
            })?;
            records.push(record);
        }

        let dataset = Self { records };
        if dataset.is_empty() {
            diagnostics::warn(format!("dataset file {} contained no rows", path.display()));
        }

        Ok(dataset)
    }

    /// Generate the synthetic dataset.
    ///
    /// All draws come from the caller's generator, column by column in row
    /// order (departments, regions, then the numeric columns), so a given
    /// seed always yields the same dataset.
    pub fn synthesize(scenario: Scenario, rng: &mut impl Rng) -> Self {
        let departments: Vec<&str> = match scenario {
            Scenario::Tiled => (0..DATASET_SIZE)
                .map(|i| DEPARTMENT_CYCLE[i % DEPARTMENT_CYCLE.len()])
                .collect(),
            Scenario::Sampled => {
                let mut picks = vec!["Finance"; FINANCE_HEADCOUNT];
                picks.extend((FINANCE_HEADCOUNT..DATASET_SIZE).map(|_| {
                    SAMPLED_DEPARTMENTS[rng.gen_range(0..SAMPLED_DEPARTMENTS.len())]
                }));
                picks
            }
        };

        let regions: Vec<&str> = match scenario {
            Scenario::Tiled => (0..DATASET_SIZE)
                .map(|i| REGION_CYCLE[i % REGION_CYCLE.len()])
                .collect(),
            Scenario::Sampled => (0..DATASET_SIZE)
                .map(|_| SAMPLED_REGIONS[rng.gen_range(0..SAMPLED_REGIONS.len())])
                .collect(),
        };

        let performance: Vec<f64> = (0..DATASET_SIZE)
            .map(|_| round_to(rng.gen_range(60.0..100.0), 2))
            .collect();
        let experience: Vec<u32> = (0..DATASET_SIZE).map(|_| rng.gen_range(1..25)).collect();
        let satisfaction: Vec<f64> = (0..DATASET_SIZE)
            .map(|_| round_to(rng.gen_range(3.0..5.0), 1))
            .collect();

        let records = (0..DATASET_SIZE)
            .map(|i| Record {
                employee_id: format!("EMP{:03}", i + 1),
                department: departments[i].to_string(),
                region: regions[i].to_string(),
                performance_score: performance[i],
                years_experience: experience[i],
                satisfaction_rating: satisfaction[i],
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
