use anyhow::{anyhow, Context, Result};
use neighborhood_core::{GeneratorConfig, ParameterSpace, Point};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub fn parse_seed(seed: &str) -> Result<u64> {
    let s = seed.trim();
    if s.is_empty() {
        return Err(anyhow!("empty seed"));
    }
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).with_context(|| format!("invalid hex seed: {s}"))
    } else {
        s.parse::<u64>()
            .with_context(|| format!("invalid decimal seed: {s}"))
    }
}

pub fn seed_to_hex(seed: u64) -> String {
    format!("0x{seed:016x}")
}

/// Plain coordinates, or `--name=value` assignments over `base`.
pub fn parse_point_arg(space: &ParameterSpace, input: &str, base: &Point) -> Result<Point> {
    space
        .parse_point(input, base)
        .with_context(|| format!("invalid point: {input}"))
}

/// Points handed out by earlier iterations, one per line.
pub fn read_points_file(
    path: &Path,
    space: &ParameterSpace,
    base: &Point,
) -> Result<BTreeSet<Point>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed reading points file {}", path.display()))?;
    let points = space
        .parse_points(&data, base)
        .with_context(|| format!("failed parsing points file {}", path.display()))?;
    Ok(points.into_iter().collect())
}

/// JSON config file first, then command-line overrides.
pub fn load_config(path: Option<&Path>, max_attempts: Option<u64>) -> Result<GeneratorConfig> {
    let mut cfg = match path {
        Some(path) => {
            let raw = fs::read(path)
                .with_context(|| format!("failed reading config {}", path.display()))?;
            serde_json::from_slice::<GeneratorConfig>(&raw)
                .with_context(|| format!("failed parsing config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };
    if let Some(max_attempts) = max_attempts {
        cfg.max_attempts = max_attempts;
    }
    Ok(cfg)
}
