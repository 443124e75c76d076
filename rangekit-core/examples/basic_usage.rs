//! Basic usage example for rangekit Core.
//!
//! Run with `RUST_LOG=rangekit_core=trace` to see the adapters being built.

use std::collections::{BTreeMap, HashMap};

use rangekit_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("rangekit Core Basic Usage Example");
    println!("=================================\n");

    // Example 1: one loop body, direction chosen at runtime
    println!("Example 1: Reversible Views");
    println!("---------------------------");

    let values = vec![0, 1, 2, 3];
    for setting in ["forward", "backward"] {
        let direction: Direction = setting.parse()?;
        let walked: Vec<_> = reversible(&values, direction).into_iter().collect();
        println!("{direction:>8}: {walked:?}");
    }

    let mut balances = vec![10, 20, 30];
    let mut carry = 0;
    for balance in reversible_mut(&mut balances, Direction::Backward) {
        carry += *balance;
        *balance = carry;
    }
    println!("suffix sums: {balances:?}\n");

    // Example 2: lockstep over containers of different lengths
    println!("Example 2: Synchronized Views");
    println!("-----------------------------");

    let names = vec!["ada", "grace", "barbara", "frances"];
    let born = [1815, 1906, 1939];
    let fields: Vec<String> = ["math", "navy", "systems"].iter().map(ToString::to_string).collect();

    for (name, year, field) in rangekit_core::synchronized!(names, born, fields) {
        println!("{name:<8} {year} {field}");
    }

    match synchronized((&names, &born)).check_equal_lengths() {
        Ok(view) => println!("equal lengths: {:?}", view.lengths()),
        Err(error) => println!("checked view rejected: {error}"),
    }
    println!();

    // Example 3: key/value pairs from maps and pair lists
    println!("Example 3: Key/Value Views");
    println!("--------------------------");

    let capitals: BTreeMap<&str, &str> =
        [("France", "Paris"), ("Peru", "Lima"), ("Japan", "Tokyo")].into_iter().collect();
    for (country, capital) in key_values(&capitals) {
        println!("{country:<8} -> {capital}");
    }

    let mut stock: HashMap<&str, u32> = [("bolts", 40), ("nuts", 12)].into_iter().collect();
    for (_, count) in key_values_mut(&mut stock) {
        *count *= 2;
    }
    let total: u32 = key_values(&stock).values().sum();
    println!("restocked total: {total}");

    let ranking = vec![("gold", 1), ("silver", 2), ("bronze", 3)];
    for (medal, place) in &key_values_owned(ranking) {
        println!("{place}. {medal}");
    }

    Ok(())
}
