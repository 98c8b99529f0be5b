//! CLI driver for the TSP solvers with ASCII map output.

use anyhow::{bail, Result};
use clap::{arg, Command};
use u_exact::distance::DistanceMatrix;
use u_exact::io;
use u_exact::render::TextMap;
use u_exact::tsp::{self, HillClimbConfig};

/// Branch-and-bound is O((n-1)!); beyond this it is not worth waiting for.
const EXHAUSTIVE_LIMIT: usize = 10;

fn cli() -> Command {
    Command::new("tsp")
        .about("Solves a TSP instance and plots the tour on an ASCII map")
        .arg(arg!(<FILE> "Binary city file"))
        .arg(arg!(--exhaustive "Exact branch-and-bound search (small instances only)"))
        .arg(
            arg!(--seed [SEED] "Random seed for hill climbing")
                .value_parser(clap::value_parser!(u64)),
        )
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = cli().get_matches();
    let file = matches.get_one::<String>("FILE").unwrap();

    let cities = io::load_cities(file)?;
    let n = cities.len();
    if n < 2 {
        bail!("{file}: at least two cities are required, got {n}");
    }

    let distances = DistanceMatrix::from_cities(&cities);
    let map = TextMap::default();

    println!("----------");
    print!("{}", map.plot(&cities, None));

    let answer = if matches.get_flag("exhaustive") {
        if n > EXHAUSTIVE_LIMIT {
            bail!("exhaustive search is limited to {EXHAUSTIVE_LIMIT} cities, got {n}");
        }
        tsp::exhaustive::solve(&cities, &distances)
    } else {
        let mut config = HillClimbConfig::default();
        if let Some(&seed) = matches.get_one::<u64>("seed") {
            config = config.with_seed(seed);
        }
        tsp::hill_climb::solve(&cities, &distances, &config).best
    };

    println!("----------");
    print!("{}", map.plot(&cities, Some(&answer.route)));
    println!("total distance = {:.6}", answer.total_distance);
    println!("{}", answer.route_string());
    Ok(())
}
