use clap::{App, Arg, ArgMatches};
use log::{info, warn};
use std::path::PathBuf;

/// Builds the command line shared by all generator binaries
pub fn app<'a>(name: &str, about: &'a str) -> App<'a, 'a> {
    App::new(name)
        .version("0.1")
        .author("ICEY <icey@icey.tech>")
        .about(about)
        .arg(Arg::with_name("input")
            .value_name("INPUT_FILE")
            .help("File the generated input is written to")
            .required(true)
            .index(1))
        .arg(Arg::with_name("output")
            .value_name("OUTPUT_FILE")
            .help("File the expected answer is written to")
            .required(true)
            .index(2))
        .arg(Arg::with_name("seed")
            .short("s")
            .long("seed")
            .value_name("SEED")
            .help("Seed the random source, making the run reproducible")
            .takes_value(true))
        .arg(Arg::with_name("solve-existing")
            .short("e")
            .long("solve-existing")
            .help("Read INPUT_FILE instead of generating it, only write OUTPUT_FILE"))
}

pub struct GenConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub seed: Option<u64>,
    pub solve_existing: bool
}

impl GenConfig {
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        GenConfig { input_path, output_path, seed: None, solve_existing: false }
    }

    pub fn from_arg_matches(matches: &ArgMatches) -> Self {
        // both positionals are `required`, clap refuses to produce matches without them
        let input_path = PathBuf::from(matches.value_of_os("input").unwrap_or_default());
        let output_path = PathBuf::from(matches.value_of_os("output").unwrap_or_default());
        let seed = match matches.value_of("seed") {
            Some(seed) => seed.parse().map(Some).unwrap_or_else(|_| {
                warn!("seed `{}` provided from commandline was invalid, using a random seed", seed);
                None
            }),
            None => {
                info!("no seed provided from commandline, using a random seed");
                None
            }
        };
        let solve_existing = matches.is_present("solve-existing");
        if solve_existing {
            info!("solving existing input file {}", input_path.display());
        }
        GenConfig { input_path, output_path, seed, solve_existing }
    }
}
