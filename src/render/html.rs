use crate::view::ReportData;

/// Render a standalone HTML report (data embedded as JSON, Plotly from CDN).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from
/// JS template literals (e.g., `${x}`), which would conflict with Rust
/// formatting.
pub fn render_html_report(data: &ReportData) -> anyhow::Result<String> {
    let json = serde_json::to_string(data)?; // embedded as JS object literal

    const TEMPLATE: &str = r##"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Employee Department Distribution</title>
<script src="https://cdn.plot.ly/plotly-2.32.0.min.js" charset="utf-8"></script>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }
  .focus { padding: 0 16px; font-size: 15px; color: #333; }
  #chart { width: 100%; height: 560px; }
</style>
</head>
<body>
<header>
  <div class="summary" id="summary"></div>
</header>

<p class="focus" id="focusLine"></p>
<div id="chart"></div>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

const COLORWAY = [
  "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a",
  "#19d3f3", "#ff6692", "#b6e880", "#ff97ff", "#fecb52",
];

function renderSummary() {
  const t = DATA.totals;
  const el = document.getElementById("summary");
  el.innerHTML = `
    <span class="pill">records: <b>${t.records}</b></span>
    <span class="pill">departments: <b>${t.departments}</b></span>
    <span class="pill">Finance: <b>${t.finance_count}</b></span>
  `;
}

function renderFocusLine() {
  document.getElementById("focusLine").textContent =
    `Frequency count for the 'Finance' department: ${DATA.totals.finance_count}`;
}

function renderChart() {
  const names = DATA.departments.map((d) => d.department);
  const counts = DATA.departments.map((d) => d.count);

  const trace = {
    type: "bar",
    x: names,
    y: counts,
    text: counts.map(String),
    textposition: "outside",
    marker: {
      color: names.map((_, i) => COLORWAY[i % COLORWAY.length]),
      line: { width: 0.5 },
    },
  };

  const layout = {
    title: {
      text: "Distribution of Employees by Department",
      x: 0.5,
      font: { size: 18, family: "Arial" },
    },
    // Categories already arrive sorted; pin the axis to that order.
    xaxis: { title: { text: "Department" }, categoryorder: "array", categoryarray: names },
    yaxis: { title: { text: "Number of Employees" } },
    showlegend: false,
    paper_bgcolor: "#ffffff",
    plot_bgcolor: "#ffffff",
  };

  Plotly.newPlot("chart", [trace], layout, { responsive: true, displaylogo: false });
}

renderSummary();
renderFocusLine();
renderChart();
</script>
</body>
</html>
"##;

    Ok(TEMPLATE.replace("__DATA__", &json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{DepartmentView, TotalsView};

    fn sample_data() -> ReportData {
        ReportData {
            departments: vec![
                DepartmentView {
                    department: "Finance".to_string(),
                    count: 8,
                },
                DepartmentView {
                    department: "IT".to_string(),
                    count: 92,
                },
            ],
            totals: TotalsView {
                records: 100,
                departments: 2,
                finance_count: 8,
            },
        }
    }

    #[test]
    fn embeds_the_report_data() {
        let html = render_html_report(&sample_data()).unwrap();

        assert!(!html.contains("__DATA__"));
        assert!(html.contains(r#""department":"Finance","count":8"#));
        assert!(html.contains(r#""finance_count":8"#));
    }

    #[test]
    fn references_the_chart_library_and_titles() {
        let html = render_html_report(&sample_data()).unwrap();

        assert!(html.contains("cdn.plot.ly"));
        assert!(html.contains("Distribution of Employees by Department"));
        assert!(html.contains("Number of Employees"));
    }
}
