//! Draws weighted random records from a delimited file
use clap::Parser;
use rndrec::rndrec::{delimiter_byte, WeightColumn, WeightedSampler};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Delimited file with one record per line
    #[arg()]
    file: String,

    /// Field holding each record's weight; leave out to weight records equally
    #[arg(short, long)]
    weight_column: Option<usize>,

    #[arg(short, long, default_value = "|", value_parser = parse_delimiter)]
    delimiter: u8,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    #[arg(short('n'), long, default_value_t = 10)]
    count: usize,

    /// Only print this field of each record
    #[arg(short, long)]
    field: Option<usize>,

    /// Print the sampler's cumulative weights before drawing
    #[arg(long)]
    dump: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => delimiter_byte(c),
        _ => Err(format!("delimiter {:?} must be a single character", s)),
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut sampler = match WeightedSampler::from_path(
        &args.file,
        WeightColumn::from(args.weight_column),
        args.delimiter,
        args.seed,
    ) {
        Ok(sampler) => sampler,
        Err(err) => {
            eprintln!("{}: {}", args.file, err);
            std::process::exit(1);
        }
    };

    if args.dump {
        print!("{}", sampler);
    }

    let separator = char::from(args.delimiter).to_string();
    for _ in 0..args.count {
        let record = sampler.next();
        match args.field {
            Some(field) => println!("{}", record.get(field).map(String::as_str).unwrap_or("")),
            None => println!("{}", record.join(&separator)),
        }
    }
}
