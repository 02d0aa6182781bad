//! Neighbor generation: the (1+1)-style mutation loop.
//!
//! Each candidate starts as a copy of the start point. A random subset of
//! dimensions is mutated, every mutated value drawn relative to the start
//! point's value in that dimension (never relative to a value already changed
//! in the same candidate). Candidates that are duplicates, or that the caller
//! has excluded, are dropped and the loop draws again until the target count
//! is reached.

use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::error::{InputIssue, NeighborError};
use crate::point::Point;
use crate::rng::seeded;
use crate::sampler::mutate_value;
use crate::selector::select_dimensions;
use crate::space::ParameterSpace;

/// Generate `count` distinct neighbors of `start` with the default config.
pub fn generate_neighbors(
    start: &Point,
    space: &ParameterSpace,
    count: usize,
    seed: u64,
) -> Result<BTreeSet<Point>, NeighborError> {
    NeighborGenerator::new(space).generate(start, count, seed)
}

#[derive(Clone, Debug)]
pub struct NeighborGenerator<'a> {
    space: &'a ParameterSpace,
    config: GeneratorConfig,
}

impl<'a> NeighborGenerator<'a> {
    pub fn new(space: &'a ParameterSpace) -> Self {
        Self::with_config(space, GeneratorConfig::default())
    }

    pub fn with_config(space: &'a ParameterSpace, config: GeneratorConfig) -> Self {
        NeighborGenerator { space, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(
        &self,
        start: &Point,
        count: usize,
        seed: u64,
    ) -> Result<BTreeSet<Point>, NeighborError> {
        self.generate_excluding(start, count, seed, &BTreeSet::new())
    }

    /// Like [`generate`](Self::generate), but never returns a point in
    /// `exclude`. Used to skip points handed out by earlier iterations.
    pub fn generate_excluding(
        &self,
        start: &Point,
        count: usize,
        seed: u64,
        exclude: &BTreeSet<Point>,
    ) -> Result<BTreeSet<Point>, NeighborError> {
        let mut rng = seeded(seed);
        debug!(seed, count, dimensions = self.space.dimensions(), "generating neighbors");
        self.generate_with_rng(start, count, exclude, &mut rng)
    }

    /// Core loop over a caller-owned random source.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        start: &Point,
        count: usize,
        exclude: &BTreeSet<Point>,
        rng: &mut R,
    ) -> Result<BTreeSet<Point>, NeighborError> {
        self.check_request(start, count, exclude)?;

        let dimensions = self.space.dimensions();
        let mut points = BTreeSet::new();
        let mut attempts = 0u64;
        let mut skipped_empty = 0u64;
        let mut skipped_repeat = 0u64;

        while points.len() < count {
            if attempts >= self.config.max_attempts {
                debug!(attempts, found = points.len(), count, "attempt limit reached");
                return Err(NeighborError::AttemptsExhausted {
                    requested: count,
                    found: points.len(),
                    attempts,
                });
            }
            attempts += 1;

            let selected = select_dimensions(dimensions, rng);
            if selected.is_empty() {
                skipped_empty += 1;
                continue;
            }

            let mut values = start.values().to_vec();
            for dimension in selected {
                let domain = &self.space.domains()[dimension];
                values[dimension] = mutate_value(domain, start[dimension], rng)
                    .map_err(|issue| NeighborError::domain(dimension, issue))?;
            }
            let candidate = Point::new(values);

            if exclude.contains(&candidate) || points.contains(&candidate) {
                trace!(point = %candidate, "skipping repeated point");
                skipped_repeat += 1;
                continue;
            }
            points.insert(candidate);
        }

        debug!(
            attempts,
            skipped_empty,
            skipped_repeat,
            generated = points.len(),
            "neighbors generated"
        );
        Ok(points)
    }

    fn check_request(
        &self,
        start: &Point,
        count: usize,
        exclude: &BTreeSet<Point>,
    ) -> Result<(), NeighborError> {
        self.space.validate_point(start)?;
        if count == 0 {
            return Err(InputIssue::ZeroTarget.into());
        }
        self.space.validate_mutable()?;

        let reachable = self.space.reachable_neighbors();
        let available = if reachable == u128::MAX {
            reachable
        } else {
            reachable - self.space.count_neighbors(start, exclude)
        };
        if count as u128 > available {
            return Err(NeighborError::Unsatisfiable {
                requested: count,
                reachable: available,
            });
        }
        Ok(())
    }
}
