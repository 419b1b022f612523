//! Console rendering of the frequency report.

use crate::view::ReportData;

use std::io::{self, Write};

/// Write the frequency table and the Finance count line.
///
/// Department names are left-aligned in a common column, counts
/// right-aligned, one department per line in the view's (sorted) order.
pub fn write_report<W: Write>(writer: &mut W, data: &ReportData) -> io::Result<()> {
    writeln!(writer, "Department frequency counts:")?;

    let name_width = data
        .departments
        .iter()
        .map(|d| d.department.len())
        .max()
        .unwrap_or(0);
    let count_width = data
        .departments
        .iter()
        .map(|d| d.count.to_string().len())
        .max()
        .unwrap_or(1);

    for dept in &data.departments {
        writeln!(
            writer,
            "{:<name_width$}  {:>count_width$}",
            dept.department, dept.count
        )?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "Frequency count for the 'Finance' department: {}",
        data.totals.finance_count
    )
}
