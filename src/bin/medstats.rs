//! Command-line median of a whitespace-delimited data file.
//!
//! With no arguments the bundled self-check suite runs; with a declared
//! element count and a path, the file is loaded and solved with the
//! shard count taken from the environment.

use std::env;
use std::process::exit;
use std::time::Instant;

use medscan::{config, loader, selfcheck, SolverConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Running self-check suite");
        let failures = selfcheck::run();
        if failures > 0 {
            eprintln!("{} scenario(s) failed", failures);
            exit(1);
        }
        println!("All scenarios passed");
        return;
    }

    let ndata: usize = match args[1].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("n is not an integer");
            exit(1);
        }
    };
    if ndata == 0 {
        eprintln!("n should be larger than 0");
        exit(1);
    }

    let data = match loader::load_values(&args[2], ndata) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    };

    let solver = SolverConfig {
        shards: config::shards_from_env(),
        ..SolverConfig::default()
    };

    println!("{}", data.len());
    let start = Instant::now();
    let median = medscan::median_with(&data, &solver);
    let elapsed = start.elapsed().as_secs_f64();
    println!("Median = {:.15} ({:.6} sec)", median, elapsed);
}
