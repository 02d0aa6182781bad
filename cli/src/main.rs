mod demo;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use neighborhood_core::{pcs, weights, Change, NeighborGenerator, ParameterSpace, Point};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use util::{load_config, parse_point_arg, parse_seed, read_points_file, seed_to_hex};

#[derive(Parser, Debug)]
#[command(name = "neighborhood")]
#[command(about = "Generate weighted (1+1)-style neighbors in a discrete parameter space")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate distinct neighbors of a start point
    Generate {
        /// Parameter space file; the built-in ten-parameter space otherwise
        #[arg(long)]
        pcs: Option<PathBuf>,
        /// Start point, e.g. "0 2 5 1000 1"; defaults to the space's defaults
        #[arg(long)]
        start: Option<String>,
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Search iteration used to seed the generator (decimal or 0x hex)
        #[arg(long, default_value = "1")]
        seed: String,
        /// Generator config JSON
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        max_attempts: Option<u64>,
        /// Points from earlier iterations that must not be returned
        #[arg(long)]
        exclude: Option<PathBuf>,
        /// Print per-parameter changes from the start point
        #[arg(long)]
        diff: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the mutation weights for one position of a domain
    Weights {
        #[arg(long)]
        index: usize,
        #[arg(long)]
        len: usize,
    },
    /// Describe a parameter space
    Space {
        #[arg(long)]
        pcs: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct GeneratedReport<'a> {
    seed: u64,
    start: &'a Point,
    points: Vec<GeneratedPoint<'a>>,
}

#[derive(Serialize)]
struct GeneratedPoint<'a> {
    point: &'a Point,
    changes: Vec<Change>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Generate {
            pcs,
            start,
            count,
            seed,
            config,
            max_attempts,
            exclude,
            diff,
            json,
        } => {
            let (space, default_start) = load_space(pcs.as_deref())?;
            let start = match start {
                Some(raw) => parse_point_arg(&space, &raw, &default_start)?,
                None => default_start.clone(),
            };
            let seed = parse_seed(&seed)?;
            let cfg = load_config(config.as_deref(), max_attempts)?;
            let exclude = match exclude {
                Some(path) => read_points_file(&path, &space, &default_start)?,
                None => BTreeSet::new(),
            };

            let points = NeighborGenerator::with_config(&space, cfg)
                .generate_excluding(&start, count, seed, &exclude)
                .with_context(|| {
                    format!(
                        "failed generating neighbors for seed={}",
                        seed_to_hex(seed)
                    )
                })?;

            if json {
                let report = GeneratedReport {
                    seed,
                    start: &start,
                    points: points
                        .iter()
                        .map(|point| GeneratedPoint {
                            point,
                            changes: space.diff(&start, point),
                        })
                        .collect(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("seed={}", seed_to_hex(seed));
                println!("start={start}");
                println!("generated={}", points.len());
                for point in &points {
                    println!("point={point}");
                    if diff {
                        for change in space.diff(&start, point) {
                            println!("  {}: {} -> {}", change.name, change.from, change.to);
                        }
                    }
                }
            }
        }
        Commands::Weights { index, len } => {
            let w = weights(index, len)
                .with_context(|| format!("no schedule for index={index} len={len}"))?;
            let rendered: Vec<String> = w.iter().map(f64::to_string).collect();
            println!("{}", rendered.join(" "));
        }
        Commands::Space { pcs } => {
            let (space, default_start) = load_space(pcs.as_deref())?;
            println!("dimensions={}", space.dimensions());
            for (i, domain) in space.domains().iter().enumerate() {
                let values: Vec<String> = domain.values().iter().map(i64::to_string).collect();
                println!(
                    "{:20} size={:<3} default={:<8} values={}",
                    space.name(i),
                    domain.len(),
                    default_start[i],
                    values.join(",")
                );
            }
            println!("reachable_neighbors={}", space.reachable_neighbors());
        }
    }

    Ok(())
}

fn load_space(path: Option<&Path>) -> Result<(ParameterSpace, Point)> {
    match path {
        Some(path) => {
            let pcs = pcs::read(path)?;
            if pcs.skipped_clauses() > 0 {
                tracing::warn!(
                    skipped = pcs.skipped_clauses(),
                    "condition/forbidden clauses are not applied"
                );
            }
            Ok(pcs.into_parts())
        }
        None => Ok((demo::space()?, demo::start())),
    }
}
