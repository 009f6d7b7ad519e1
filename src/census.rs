//! Converts US census name frequency files into pipe-delimited weighted records
use clap::Parser;
use rndrec::preprocess::{
    convert_file, load_corrections_from_path, CensusError, Corrections, DEFAULT_THRESHOLD,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder holding dist.all.last, dist.female.first and dist.male.first
    #[arg(short, long, default_value = ".")]
    input_folder: String,
    #[arg(short, long, default_value = "data/us")]
    output_folder: String,
    /// Properly punctuated names, one per line
    #[arg(short, long, default_value = "corrections.txt")]
    corrections: String,
    /// Names with this frequency (percent) or less are dropped
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

const TABLES: [(&str, &str); 3] = [
    ("dist.all.last", "name_last.csv"),
    ("dist.female.first", "name_first_female.csv"),
    ("dist.male.first", "name_first_male.csv"),
];

fn run(args: &Args, corrections: &Corrections) -> Result<(), CensusError> {
    std::fs::create_dir_all(&args.output_folder)?;
    for (input, output) in TABLES {
        let input = format!("{}/{}", args.input_folder, input);
        let output = format!("{}/{}", args.output_folder, output);
        let stats = convert_file(&input, &output, corrections, args.threshold)?;
        println!(
            "{} -> {}: {} names written, {} below threshold, {} unmatched lines",
            input, output, stats.written, stats.below_threshold, stats.unmatched
        );
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let result = load_corrections_from_path(&args.corrections)
        .and_then(|corrections| run(&args, &corrections));
    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
