//! Aggregation model: department frequency table + the report view
//! consumed by both renderers.

use crate::dataset::Dataset;

use serde::Serialize;
use std::collections::BTreeMap;

/// Department singled out in the console report and the HTML summary.
pub const FINANCE_DEPARTMENT: &str = "Finance";

/// Records-per-department counts, keyed in ascending lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    /// Count records per department. The BTreeMap keeps keys sorted, so
    /// iteration order is the final output order.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for record in dataset.records() {
            *counts.entry(record.department.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for a department, 0 when absent.
    pub fn count(&self, department: &str) -> u64 {
        self.counts.get(department).copied().unwrap_or(0)
    }

    pub fn finance_count(&self) -> u64 {
        self.count(FINANCE_DEPARTMENT)
    }

    /// Departments in ascending name order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentView {
    pub department: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub records: usize,
    pub departments: usize,
    pub finance_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub departments: Vec<DepartmentView>,
    pub totals: TotalsView,
}

/// Build the report view shared by the console and HTML renderers.
pub fn build_report_data(dataset: &Dataset, table: &FrequencyTable) -> ReportData {
    let departments: Vec<DepartmentView> = table
        .iter()
        .map(|(department, count)| DepartmentView {
            department: department.to_string(),
            count,
        })
        .collect();

    ReportData {
        totals: TotalsView {
            records: dataset.len(),
            departments: departments.len(),
            finance_count: table.finance_count(),
        },
        departments,
    }
}
