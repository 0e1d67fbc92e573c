use anyhow::{Context, Result};
use binsym::instance::Instance;
use binsym::model::Symmetry;
use binsym::report::Comparison;
use binsym::runner;
use clap::Parser;
use std::path::PathBuf;

/// Solve a bin-packing instance as an integer program, first without and then
/// with symmetry-breaking constraints, and compare the two runs.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// instance file: name, "capacity count unused", then one size per line
    instance: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let instance = Instance::from_file(&args.instance)
        .with_context(|| format!("failed to load instance {}", args.instance.display()))?;

    println!("Running without symmetry-breaking constraints...\n");
    let without = runner::solve(&instance, Symmetry::NONE);
    println!("{}", without);

    println!("\nRunning with symmetry-breaking constraints...\n");
    let with = runner::solve(&instance, Symmetry::ALL);
    println!("{}", with);

    println!("\n{}", Comparison::new(&without, &with));
    Ok(())
}
