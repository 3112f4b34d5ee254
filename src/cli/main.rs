#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;

use heron_sat::{formula::Formula, reports::Report};

mod parse_args;
mod read;
mod summary;

use read::ReadError;
use summary::Summary;

#[derive(Default)]
struct CliOptions {
    model: bool,
    verify: bool,
    json: bool,
}

/// Exit codes, following the DIMACS competition convention.
mod exit {
    pub const UNKNOWN: i32 = 0;
    pub const INPUT: i32 = 1;
    pub const INTERNAL: i32 = 2;
    pub const SATISFIABLE: i32 = 10;
    pub const UNSATISFIABLE: i32 = 20;
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse_args::cli().get_matches();

    let config = parse_args::config_from_args(&matches);
    let cli_options = CliOptions::from_args(&matches);

    let Some(path) = matches.get_one::<PathBuf>("path") else {
        println!("c Path to CNF required");
        std::process::exit(exit::INPUT);
    };

    println!("c Branching: {}", config.branching.value);

    let mut the_formula = Formula::from_config(config);

    match read::read_dimacs(path, &mut the_formula) {
        Ok(_) => {}

        Err(ReadError::EmptyClause) => {
            println!("c {}", ReadError::EmptyClause);
            println!("s {}", Report::Unsatisfiable);
            std::process::exit(exit::UNSATISFIABLE);
        }

        Err(e) => {
            println!("c {e}");
            std::process::exit(exit::INPUT);
        }
    }

    let result = match the_formula.solve() {
        Ok(report) => report,

        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(exit::INTERNAL);
        }
    };

    let counters = &the_formula.counters;
    println!(
        "c Conflicts: {}, decisions: {}, propagations: {}, restarts: {}, decays: {}",
        counters.total_conflicts,
        counters.total_decisions,
        counters.total_propagations,
        counters.restarts,
        counters.decays
    );
    println!("c Time: {:.2?}", counters.time);

    if result == Report::Satisfiable && cli_options.verify {
        match the_formula.verify() {
            Ok(()) => println!("c Verified"),
            Err(e) => {
                println!("c Verification failed: {e}");
                std::process::exit(exit::INTERNAL);
            }
        }
    }

    println!("s {result}");

    if result == Report::Satisfiable && cli_options.model {
        println!("v {} 0", the_formula.valuation_string());
    }

    if cli_options.json {
        match Summary::new(path, the_formula.counters.time, &the_formula).to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => println!("c Failed to write summary: {e}"),
        }
    }

    std::process::exit(match result {
        Report::Satisfiable => exit::SATISFIABLE,
        Report::Unsatisfiable => exit::UNSATISFIABLE,
        Report::Unknown => exit::UNKNOWN,
    });
}
