use std::env;

use log::error;

use huffman_codes::config::{Config, USAGE};
use huffman_codes::report::render_report;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            error!("{}\n{}", e, USAGE);
            std::process::exit(1);
        }
    };

    match render_report(&config.symbols, &config.frequencies) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            error!("Could not build Huffman codes: {}", e);
            std::process::exit(1);
        }
    }
}
