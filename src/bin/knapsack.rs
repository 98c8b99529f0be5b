//! CLI driver for the exhaustive 0/1 knapsack solver.

use anyhow::{bail, Context, Result};
use clap::{arg, Command};
use u_exact::io;
use u_exact::knapsack;
use u_exact::models::MAX_ITEMS;

fn cli() -> Command {
    Command::new("knapsack")
        .about("Solves a 0/1 knapsack instance by exhaustive recursive search")
        .arg(arg!(<N> "Number of items").value_parser(clap::value_parser!(usize)))
        .arg(arg!(<CAPACITY> "Knapsack capacity").value_parser(clap::value_parser!(f64)))
        .arg(arg!([FILE] "Binary instance file to load instead of generating"))
        .arg(
            arg!(--seed [SEED] "Random seed for instance generation")
                .value_parser(clap::value_parser!(u64))
                .default_value("1"),
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
    let n = *matches.get_one::<usize>("N").unwrap();
    let capacity = *matches.get_one::<f64>("CAPACITY").unwrap();
    let seed = *matches.get_one::<u64>("seed").unwrap();

    if n > MAX_ITEMS {
        bail!("the number of items must be at most {MAX_ITEMS}, got {n}");
    }
    if !(capacity >= 0.0) {
        bail!("capacity must be non-negative, got {capacity}");
    }

    let items = match matches.get_one::<String>("FILE") {
        Some(path) => {
            let items = io::load_itemset(path)?;
            if items.len() != n {
                bail!(
                    "{path}: file holds {} items but {n} were requested",
                    items.len()
                );
            }
            println!("open file {path}");
            items
        }
        None => io::random_itemset(n, seed).context("instance generation failed")?,
    };

    println!("max capacity: W = {capacity:.0}, # of items: {n}");
    print!("{items}");
    println!("----");

    let answer = match knapsack::solve(&items, capacity) {
        Some(answer) => answer,
        None => bail!("no feasible packing: capacity {capacity} admits no selection"),
    };

    println!("----");
    println!("best solution:");
    println!("value: {:4.1}", answer.total_value);
    println!("answer: {}", answer.flags_string());
    Ok(())
}
