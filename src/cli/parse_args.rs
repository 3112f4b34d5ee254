use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use heron_sat::config::{Activity, Branching, Config, ConfigOption};

use crate::CliOptions;

pub fn cli() -> Command {
    Command::new("heron_sat")
        .about("Determines whether a formula is satisfiable or unsatisfiable")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to parse."))

        .arg(Arg::new("branching")
            .long("branching")
            .value_parser(["dlcs", "dlis", "bohm", "jw", "moms", "vsids"])
            .required(false)
            .num_args(1)
            .help("The strategy used to choose a literal when no literal is implied.
Default: dlcs"))

        .arg(Arg::new("bohm_alpha")
            .long("bohm-alpha")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help("The weight of the larger polarity count under Böhm's heuristic.
Default: 1"))

        .arg(Arg::new("bohm_beta")
            .long("bohm-beta")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help("The weight of the smaller polarity count under Böhm's heuristic.
Default: 2"))

        .arg(Arg::new("moms_k")
            .long("moms-k")
            .value_parser(value_parser!(u32))
            .required(false)
            .num_args(1)
            .help("The exponent of the weight given to the combined count under MOMS.
Default: 2"))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The seed of the source of randomness used by vsids.
Default: 0"))

        .arg(Arg::new("decay_factor")
            .long("decay-factor")
            .value_parser(value_parser!(Activity))
            .required(false)
            .num_args(1)
            .help("The factor by which every activity is multiplied on a decay, in (0, 1].
Default: 0.95"))

        .arg(Arg::new("decay_interval")
            .long("decay-interval")
            .value_parser(value_parser!(u32))
            .required(false)
            .num_args(1)
            .help("The number of assignments between decays.
Default: 65536"))

        .arg(Arg::new("no_restart")
            .long("no-restart")
            .action(ArgAction::SetTrue)
            .help("Prevent choices from being forgotten."))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Time limit for the solve in seconds.
Default: No limit"))

        .arg(Arg::new("model")
            .long("model")
            .short('m')
            .action(ArgAction::SetTrue)
            .help("Display a satisfying valuation, if one is found."))

        .arg(Arg::new("verify")
            .long("verify")
            .action(ArgAction::SetTrue)
            .help("Check a satisfying valuation against the formula, if one is found."))

        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Display a one-line JSON summary of the solve."))
}

/// Sets `option` to `value`, or ends the process if `value` is out of bounds.
fn bounded<T: PartialOrd + Copy + std::fmt::Display>(option: &mut ConfigOption<T>, value: T) {
    if option.set(value) {
        println!("c {} set to: {value}", option.name);
    } else {
        let (min, max) = option.min_max();
        println!("c {} requires a value between {min} and {max}", option.name);
        std::process::exit(1);
    }
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Some(name) = args.get_one::<String>("branching") {
        match name.parse::<Branching>() {
            Ok(branching) => bounded(&mut the_config.branching, branching),
            Err(_) => {
                println!("c Unknown branching strategy: {name}");
                std::process::exit(1);
            }
        }
    };

    if let Some(alpha) = args.get_one::<f64>("bohm_alpha") {
        bounded(&mut the_config.bohm_alpha, *alpha)
    };

    if let Some(beta) = args.get_one::<f64>("bohm_beta") {
        bounded(&mut the_config.bohm_beta, *beta)
    };

    if let Some(k) = args.get_one::<u32>("moms_k") {
        bounded(&mut the_config.moms_k, *k)
    };

    if let Some(seed) = args.get_one::<u64>("seed") {
        bounded(&mut the_config.seed, *seed)
    };

    if let Some(factor) = args.get_one::<Activity>("decay_factor") {
        bounded(&mut the_config.decay_factor, *factor)
    };

    if let Some(interval) = args.get_one::<u32>("decay_interval") {
        bounded(&mut the_config.decay_interval, *interval)
    };

    if args.get_flag("no_restart") {
        bounded(&mut the_config.restart, false)
    };

    if let Some(secs) = args.get_one::<u64>("time_limit") {
        println!("c Time limit: {secs}s");
        the_config.time_limit = Some(std::time::Duration::from_secs(*secs))
    };

    the_config
}

impl CliOptions {
    pub fn from_args(args: &ArgMatches) -> Self {
        CliOptions {
            model: args.get_flag("model"),
            verify: args.get_flag("verify"),
            json: args.get_flag("json"),
        }
    }
}
