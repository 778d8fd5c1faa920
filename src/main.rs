use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bsarray::{BinarySearchArray, NaturalOrder, Signed};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bsarray", about = "Pointer-free balanced binary search tree in a flat array")]
struct Cli {
    /// Emit debug-level build and search events (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the two sample trees, print their slots and look up one key.
    Demo {
        /// Key searched in both sample trees.
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        key: i32,
    },
    /// Build a tree from a file of ascending integers and look up keys.
    Lookup {
        /// Whitespace-separated, strictly ascending integers.
        input: PathBuf,
        /// Keys to search for.
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<i64>,
        /// Print every slot of the built tree first.
        #[arg(long)]
        dump: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { key } => run_demo(key),
        Commands::Lookup { input, keys, dump } => run_lookup(&input, &keys, dump)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Three-way integer comparison in the negative/zero/positive convention.
fn compare(left: &i32, right: &i32) -> i32 {
    if left < right {
        -1
    } else if left > right {
        1
    } else {
        0
    }
}

fn run_demo(key: i32) {
    let samples: [&[i32]; 2] = [
        &[0, 1, 2, 3, 4, 5, 6],
        &[7, 8, 9, 10, 11, 12, 13, 14, 15],
    ];

    let mut tree = BinarySearchArray::new(i32::MIN, Signed(compare));
    for sample in samples {
        tree.prepare(sample);
        println!("{}", tree.dump());
        let found = tree.search(&key) != 0;
        println!("{} => {}", key, if found { "found" } else { "not found" });
    }
}

fn run_lookup(input_path: &Path, keys: &[i64], dump: bool) -> Result<()> {
    let values = read_integer_file(input_path)
        .with_context(|| format!("failed to read input from {}", input_path.display()))?;

    let mut tree = BinarySearchArray::new(i64::MIN, NaturalOrder);
    tree.try_prepare(&values)
        .with_context(|| format!("cannot build tree from {}", input_path.display()))?;
    info!(
        elements = tree.len(),
        capacity = tree.size(),
        height = tree.height(),
        "tree ready"
    );

    if dump {
        println!("{}", tree.dump());
    }

    for key in keys {
        match tree.find(key) {
            Some(slot) => println!("{} => found at [{}]", key, slot),
            None => println!("{} => not found", key),
        }
    }

    Ok(())
}

fn read_integer_file(path: &Path) -> Result<Vec<i64>> {
    let contents = std::fs::read_to_string(path)?;
    let mut values = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        for token in line.split_whitespace() {
            let value: i64 = token.parse().with_context(|| {
                format!("invalid integer '{}' on line {}", token, line_no + 1)
            })?;
            values.push(value);
        }
    }

    debug!(count = values.len(), path = %path.display(), "parsed input");
    Ok(values)
}
