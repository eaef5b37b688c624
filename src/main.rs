use std::{path::PathBuf, process::ExitCode, str::FromStr};

use clap::{Arg, ArgAction, ArgMatches, Command};
use rand::{rngs::StdRng, SeedableRng};

use tsp_tour_eval::{
    compute_tour_distance, compute_tour_distance_with_matrix,
    generate::generate_instance,
    logging::init_logger,
    options::{LogFormat, LogLevel, LogOptions},
    DistanceMatrix, Error, Result, TSPInstance,
};

struct CliOptions {
    data_path: PathBuf,
    generate: Option<(usize, usize)>,
    seed: Option<u64>,
    use_matrix: bool,
    log: LogOptions,
}

fn build_command() -> Command {
    // Data Path
    let data_path_arg = Arg::new("data-path")
        .short('d')
        .long("data-path")
        .action(ArgAction::Set)
        .required(true)
        .value_parser(PathBuf::from_str)
        .help(
            "Path to the instance JSON file. If you are generating an instance, this is where it will be stored."
        );
    // Generate a random instance: number of cities then number of tours
    let generate_arg = Arg::new("generate")
        .short('g')
        .long("generate")
        .action(ArgAction::Set)
        .required(false)
        .num_args(2)
        .value_parser(clap::value_parser!(usize))
        .help(
            "Generate a random instance. The first argument is the number of cities, the second the number of random tours to store with it."
        );
    let seed_arg = Arg::new("seed")
        .short('s')
        .long("seed")
        .action(ArgAction::Set)
        .required(false)
        .value_parser(clap::value_parser!(u64))
        .help("Seed for instance generation. Uses entropy when omitted.");
    let matrix_arg = Arg::new("matrix")
        .short('m')
        .long("matrix")
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Evaluate tours with a precomputed distance matrix.");
    let log_level_arg = Arg::new("log-level")
        .long("log-level")
        .action(ArgAction::Set)
        .default_value("info")
        .value_parser(LogLevel::from_str)
        .help("One of error, warn, info, debug, trace.");
    let log_format_arg = Arg::new("log-format")
        .long("log-format")
        .action(ArgAction::Set)
        .default_value("compact")
        .value_parser(LogFormat::from_str)
        .help("Either compact or pretty.");
    let log_timestamp_arg = Arg::new("log-timestamp")
        .long("log-timestamp")
        .action(ArgAction::SetTrue)
        .help("Prefix log lines with a millisecond timestamp.");

    Command::new("tsp-tour-eval")
        .about("Computes the closed Euclidean length of TSP tours.")
        .arg(data_path_arg)
        .arg(generate_arg)
        .arg(seed_arg)
        .arg(matrix_arg)
        .arg(log_level_arg)
        .arg(log_format_arg)
        .arg(log_timestamp_arg)
}

fn parse_options(matches: &ArgMatches) -> Result<CliOptions> {
    let data_path = matches
        .get_one::<PathBuf>("data-path")
        .cloned()
        .ok_or_else(|| Error::invalid_input("a data path is required"))?;

    let generate_values: Option<Vec<usize>> = matches
        .get_many::<usize>("generate")
        .map(|values| values.copied().collect());
    let generate = match generate_values.as_deref() {
        Some(values) => match *values {
            [num_cities, num_tours] => Some((num_cities, num_tours)),
            _ => {
                return Err(Error::invalid_input(
                    "generate takes exactly two arguments: number of cities and number of tours",
                ))
            }
        },
        None => None,
    };

    Ok(CliOptions {
        data_path,
        generate,
        seed: matches.get_one::<u64>("seed").copied(),
        use_matrix: matches.get_flag("matrix"),
        log: LogOptions {
            log_level: matches.get_one::<LogLevel>("log-level").copied().unwrap_or_default(),
            log_format: matches.get_one::<LogFormat>("log-format").copied().unwrap_or_default(),
            log_timestamp: matches.get_flag("log-timestamp"),
        },
    })
}

fn load_or_generate(options: &CliOptions) -> Result<TSPInstance> {
    let Some((num_cities, num_tours)) = options.generate else {
        return TSPInstance::from_json(&options.data_path);
    };

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let name = options
        .data_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "generated".to_string());

    log::info!(
        "generating instance with {} cities and {} tours at {}",
        num_cities,
        num_tours,
        options.data_path.display()
    );
    let instance = generate_instance(name, num_cities, num_tours, &mut rng)?;
    instance.store_as_json(&options.data_path)?;

    Ok(instance)
}

/// Prints each tour's distance and returns how many tours failed to evaluate.
fn evaluate_instance(instance: &TSPInstance, use_matrix: bool) -> usize {
    let matrix = use_matrix.then(|| DistanceMatrix::from_city_table(&instance.cities));
    let mut num_failed = 0;

    for (i, tour) in instance.tours.iter().enumerate() {
        let result = match &matrix {
            Some(matrix) => compute_tour_distance_with_matrix(tour, matrix),
            None => compute_tour_distance(tour, &instance.cities),
        };

        match result {
            Ok(distance) => println!("tour {}: {}", i + 1, distance),
            Err(e) => {
                log::error!("tour {} of {} could not be evaluated: {}", i + 1, instance.name, e);
                num_failed += 1;
            }
        }
    }

    num_failed
}

fn run(options: &CliOptions) -> Result<usize> {
    let instance = load_or_generate(options)?;
    log::info!(
        "evaluating {} tours over {} cities",
        instance.tours.len(),
        instance.cities.len()
    );

    Ok(evaluate_instance(&instance, options.use_matrix))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    let options = match parse_options(&matches) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logger(&options.log) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(&options) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(num_failed) => {
            log::error!("{} tours failed to evaluate", num_failed);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("failed to evaluate {}: {}", options.data_path.display(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn parses_generate_and_logging_flags() {
        let matches = build_command()
            .try_get_matches_from([
                "tsp-tour-eval",
                "-d",
                "out/instance.json",
                "-g",
                "12",
                "3",
                "--seed",
                "42",
                "-m",
                "--log-level",
                "debug",
                "--log-format",
                "pretty",
            ])
            .unwrap();
        let options = parse_options(&matches).unwrap();

        assert_eq!(options.data_path, PathBuf::from("out/instance.json"));
        assert_eq!(options.generate, Some((12, 3)));
        assert_eq!(options.seed, Some(42));
        assert!(options.use_matrix);
        assert_eq!(options.log.log_level, LogLevel::Debug);
        assert_eq!(options.log.log_format, LogFormat::Pretty);
        assert!(!options.log.log_timestamp);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = build_command().try_get_matches_from([
            "tsp-tour-eval",
            "-d",
            "instance.json",
            "--log-level",
            "loud",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn counts_failed_tours() {
        let instance = TSPInstance::new(
            "mixed",
            vec![(0.0, 0.0), (5.0, 0.0)]
                .into_iter()
                .map(tsp_tour_eval::Location::from)
                .collect(),
            vec![vec![1, 2], vec![1, 3], vec![]],
        );

        assert_eq!(evaluate_instance(&instance, false), 2);
        assert_eq!(evaluate_instance(&instance, true), 2);
    }
}
