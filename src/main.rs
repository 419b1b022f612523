mod dataset;
mod diagnostics;
mod render;
mod view;

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "employee-report")]
#[command(about = "Employee department distribution report generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the department distribution report (console + HTML).
    Report {
        /// Dataset to load; when the file does not exist a synthetic
        /// dataset is generated instead.
        #[arg(long, default_value = "employees.csv")]
        csv: PathBuf,

        /// Synthesis scenario used when no dataset file is present.
        #[arg(long, value_enum, default_value_t = dataset::Scenario::Sampled)]
        scenario: dataset::Scenario,

        /// Seed for the synthetic dataset generator.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(short = 'o', long, default_value = "employee_department_distribution.html")]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            csv,
            scenario,
            seed,
            out,
        } => {
            // 1) Resolve the dataset source once, up front.
            let source = dataset::DatasetSource::detect(csv, scenario, seed);

            // 2) Load or synthesize.
            let employees = source.load()?;

            // 3) Aggregate.
            let table = view::FrequencyTable::from_dataset(&employees);
            let data = view::build_report_data(&employees, &table);

            // 4) Report: console first, then the HTML artifact.
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            render::console::write_report(&mut handle, &data)?;
            handle.flush()?;

            let html = render::html::render_html_report(&data)?;
            std::fs::write(&out, html)?;
            eprintln!("Wrote {}", out);
        }
    }

    Ok(())
}
