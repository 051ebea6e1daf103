use judgegen::config::{app, GenConfig};
use judgegen::islands::Grid;
use judgegen::testcase::run;

use log::error;
use std::process;

fn main() {
    env_logger::init();

    let app = app("Number of Islands test case generator",
                  "Writes a random land/water grid and its number of 4-connected islands");
    let matches = match app.get_matches_safe() {
        Ok(matches) => matches,
        Err(e) => {
            // wrong arguments are not an error for the judge, just show the usage
            println!("{}", e.message);
            return;
        }
    };

    let config = GenConfig::from_arg_matches(&matches);
    if let Err(e) = run::<Grid>(&config) {
        error!("failed generating islands test case");
        error!("extra info: {}", e);
        process::exit(1);
    }
}
