use judgegen::config::{app, GenConfig};
use judgegen::pairsum::PairSumCase;
use judgegen::testcase::run;

use log::error;
use std::process;

fn main() {
    env_logger::init();

    let app = app("Two Sum test case generator",
                  "Writes a random array with a target sum and one pair of indices reaching it");
    let matches = match app.get_matches_safe() {
        Ok(matches) => matches,
        Err(e) => {
            // wrong arguments are not an error for the judge, just show the usage
            println!("{}", e.message);
            return;
        }
    };

    let config = GenConfig::from_arg_matches(&matches);
    if let Err(e) = run::<PairSumCase>(&config) {
        error!("failed generating pairsum test case");
        error!("extra info: {}", e);
        process::exit(1);
    }
}
