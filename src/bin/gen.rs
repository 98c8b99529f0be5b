//! Generates binary problem instance files for the knapsack and TSP CLIs.

use anyhow::{anyhow, bail, Context, Result};
use clap::{arg, Command};
use std::path::PathBuf;
use u_exact::io;
use u_exact::models::{MAX_CITIES, MAX_ITEMS};

fn cli() -> Command {
    Command::new("gen")
        .about("Generates binary problem instance files")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("items")
                .about("Writes a random knapsack instance")
                .arg(arg!(<N> "Number of items").value_parser(clap::value_parser!(usize)))
                .arg(arg!(<SEED> "Random seed").value_parser(clap::value_parser!(u64)))
                .arg(arg!(<OUT> "Output file").value_parser(clap::value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new("cities")
                .about("Writes a random TSP instance on the default 70x40 map")
                .arg(arg!(<N> "Number of cities").value_parser(clap::value_parser!(usize)))
                .arg(arg!(<SEED> "Random seed").value_parser(clap::value_parser!(u64)))
                .arg(arg!(<OUT> "Output file").value_parser(clap::value_parser!(PathBuf))),
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
    match matches.subcommand() {
        Some(("items", sub)) => {
            let n = *sub.get_one::<usize>("N").unwrap();
            let seed = *sub.get_one::<u64>("SEED").unwrap();
            let out = sub.get_one::<PathBuf>("OUT").unwrap();
            if n == 0 || n > MAX_ITEMS {
                bail!("the number of items must be in 1..={MAX_ITEMS}, got {n}");
            }
            let items = io::random_itemset(n, seed).context("instance generation failed")?;
            io::save_itemset(out, &items)?;
            println!("wrote {n} items to {}", out.display());
            Ok(())
        }
        Some(("cities", sub)) => {
            let n = *sub.get_one::<usize>("N").unwrap();
            let seed = *sub.get_one::<u64>("SEED").unwrap();
            let out = sub.get_one::<PathBuf>("OUT").unwrap();
            if n == 0 || n > MAX_CITIES {
                bail!("the number of cities must be in 1..={MAX_CITIES}, got {n}");
            }
            let cities =
                io::random_cities(n, seed, 70, 40).context("instance generation failed")?;
            io::save_cities(out, &cities)?;
            println!("wrote {n} cities to {}", out.display());
            Ok(())
        }
        _ => Err(anyhow!("invalid subcommand")),
    }
}
