//! Reports how often each record is drawn, for the tables in a settings file
use clap::Parser;
use env_logger::fmt::Formatter;
use log::Record;
use rndrec::frequency::{frequency_report, FrequencyReport};
use rndrec::rndrec::{delimiter_byte, WeightColumn, WeightedSampler};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::{fs, thread};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: String,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    /// Save each report as JSON in this folder
    #[arg(short, long)]
    reports_folder: Option<String>,
    /// Save reports in a timestamped folder under reports/
    #[arg(short, long)]
    save: bool,
}

#[derive(Debug, Deserialize)]
struct ReportSettings {
    tables: Vec<TableSettings>,
}

#[derive(Debug, Deserialize, Clone)]
struct TableSettings {
    path: String,
    /// null weights every record equally
    #[serde(default)]
    weight_column: Option<usize>,
    #[serde(default = "default_delimiter")]
    delimiter: char,
    #[serde(default)]
    seed: u64,
    #[serde(default = "default_draws")]
    draws: usize,
    #[serde(default)]
    key_field: usize,
}

fn default_delimiter() -> char {
    '|'
}

fn default_draws() -> usize {
    100000
}

#[derive(Debug, Serialize)]
struct TableReport<'a> {
    path: &'a str,
    total_weight: f64,
    records: usize,
    report: FrequencyReport,
}

fn run_table(table: &TableSettings) -> Result<(f64, usize, FrequencyReport), String> {
    let delimiter = delimiter_byte(table.delimiter)?;
    let mut sampler = WeightedSampler::from_path(
        &table.path,
        WeightColumn::from(table.weight_column),
        delimiter,
        table.seed,
    )
    .map_err(|err| format!("{}: {}", table.path, err))?;
    log::info!(
        "Drawing {} records from {} ({} records, total weight {})",
        table.draws,
        table.path,
        sampler.len(),
        sampler.total()
    );
    let report = frequency_report(&mut sampler, table.draws, table.key_field);
    Ok((sampler.total(), sampler.len(), report))
}

fn parse_settings(text: &str) -> Result<ReportSettings, serde_json::Error> {
    serde_json::from_str(text)
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let thread_id = thread::current().id();
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [Thread: {:?}] [{}] - {}",
                timestamp,
                thread_id,
                record.level(),
                record.args()
            )
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = match fs::read_to_string(&args.config_file)
        .map_err(|err| err.to_string())
        .and_then(|text| parse_settings(&text).map_err(|err| err.to_string()))
    {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Failed to load config file {}: {}", args.config_file, err);
            std::process::exit(1);
        }
    };

    let reports_folder = args.reports_folder.or_else(|| {
        args.save.then(|| {
            format!(
                "reports/{}",
                chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
            )
        })
    });
    if let Some(folder) = &reports_folder {
        if let Err(err) = fs::create_dir_all(folder) {
            eprintln!("Failed to create reports folder {}: {}", folder, err);
            std::process::exit(1);
        }
    }

    for (i, table) in settings.tables.iter().enumerate() {
        let (total_weight, records, report) = match run_table(table) {
            Ok(result) => result,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        };
        println!("=== {}", table.path);
        print!("{}", report);

        if let Some(folder) = &reports_folder {
            let filename = format!("{}/{}.json", folder, i);
            let table_report = TableReport {
                path: &table.path,
                total_weight,
                records,
                report,
            };
            let written = serde_json::to_string_pretty(&table_report)
                .map_err(|err| err.to_string())
                .and_then(|serialized| fs::write(&filename, serialized).map_err(|err| err.to_string()));
            if let Err(err) = written {
                eprintln!("Failed to write report {}: {}", filename, err);
                std::process::exit(1);
            }
        }
    }
}
