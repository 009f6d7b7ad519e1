//! Makes up plausible names from census-derived frequency tables
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rndrec::rndrec::{SamplerError, WeightColumn, WeightedSampler};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "data/us/name_last.csv")]
    last: String,
    #[arg(long, default_value = "data/us/name_first_female.csv")]
    female: String,
    #[arg(long, default_value = "data/us/name_first_male.csv")]
    male: String,
    #[arg(short('n'), long, default_value_t = 16)]
    count: usize,
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// Chance that a name is female
    #[arg(short, long, default_value_t = 0.8)]
    female_ratio: f64,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

struct NameTables {
    last: WeightedSampler,
    female: WeightedSampler,
    male: WeightedSampler,
}

impl NameTables {
    fn load(args: &Args) -> Result<NameTables, (String, SamplerError)> {
        let load = |path: &String| {
            WeightedSampler::from_path(path, WeightColumn::Index(1), b'|', args.seed)
                .map_err(|err| (path.clone(), err))
        };
        Ok(NameTables {
            last: load(&args.last)?,
            female: load(&args.female)?,
            male: load(&args.male)?,
        })
    }

    /// "First M Last", with the middle initial drawn from the same table as the first name
    fn name<R: Rng>(&mut self, rng: &mut R, female_ratio: f64) -> String {
        let first_names = if rng.gen_bool(female_ratio) {
            &mut self.female
        } else {
            &mut self.male
        };
        let first = first_names.next()[0].clone();
        let middle = first_names.next()[0].chars().next().unwrap_or(' ');
        let last = &self.last.next()[0];
        format!("{} {} {}", first, middle, last)
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if !(0.0..=1.0).contains(&args.female_ratio) {
        eprintln!("female ratio {} must be between 0 and 1", args.female_ratio);
        std::process::exit(1);
    }

    let mut tables = match NameTables::load(&args) {
        Ok(tables) => tables,
        Err((path, err)) => {
            eprintln!("{}: {}", path, err);
            std::process::exit(1);
        }
    };
    let mut rng = StdRng::seed_from_u64(args.seed);
    for _ in 0..args.count {
        println!("{}", tables.name(&mut rng, args.female_ratio));
    }
}
