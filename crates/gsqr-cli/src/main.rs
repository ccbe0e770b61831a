use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use gsqr_cli::commands::{run_orbit, run_population, run_system};
use gsqr_cli::config::{load_run_config, RunConfig};
use gsqr_cli::menu::run_menu;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("GSQR_LOG", "error,gsqr=info"))
        .init();

    let input_arg = |help: &'static str| {
        Arg::new("input")
            .help(help)
            .required(true)
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    };

    let matches = Command::new("gsqr")
        .version(clap::crate_version!())
        .about("Least-squares and linear-system solving through Gram-Schmidt QR")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("Path to a JSON run configuration. Defaults are used when omitted.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("system")
                .about("Solve a linear system given as an augmented matrix file")
                .arg(input_arg("Path to the system file: header 'L C', then rows of coefficients and right-hand side")),
        )
        .subcommand(
            Command::new("population")
                .about("Fit a polynomial trend to a population series and extrapolate it")
                .arg(input_arg("Path to the population file: header 'N', then rows 'year value'"))
                .arg(
                    Arg::new("predict_year")
                        .short('p')
                        .long("predict-year")
                        .help("Year to extrapolate to. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("degree")
                        .short('d')
                        .long("degree")
                        .help("Polynomial degree of the trend. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("orbit")
                .about("Fit the conic a*x^2 + b*xy + c*y^2 + d*x + e*y = -1 to orbit observations")
                .arg(input_arg("Path to the orbit file: header 'N', then rows 'x y'")),
        )
        .subcommand(Command::new("menu").about("Choose problems and input files interactively"))
        .get_matches();

    if let Err(e) = run(&matches) {
        log::error!("{:#}", e);
        std::process::exit(1)
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = match matches.subcommand() {
        Some((_, sub_m)) => resolve_config(sub_m)?,
        None => unreachable!("Subcommand is required by CLI configuration"),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match matches.subcommand() {
        Some(("system", sub_m)) => run_system(input(sub_m), &config, &mut out),
        Some(("population", sub_m)) => {
            let mut config = config;
            if let Some(year) = sub_m.get_one::<f64>("predict_year") {
                config.predict_year = *year;
            }
            if let Some(degree) = sub_m.get_one::<usize>("degree") {
                config.population.degree = *degree;
            }
            run_population(input(sub_m), &config, &mut out)
        }
        Some(("orbit", sub_m)) => run_orbit(input(sub_m), &config, &mut out),
        Some(("menu", _)) => {
            let stdin = io::stdin();
            run_menu(&mut stdin.lock(), &mut out, &config)
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };
    out.flush()?;
    result
}

fn input(matches: &ArgMatches) -> &PathBuf {
    matches
        .get_one::<PathBuf>("input")
        .expect("input is a required argument")
}

fn resolve_config(matches: &ArgMatches) -> Result<RunConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[gsqr] Using config: {:?}", path);
            load_run_config(path)
        }
        None => {
            log::debug!("[gsqr] No config provided; using defaults.");
            Ok(RunConfig::default())
        }
    }
}
