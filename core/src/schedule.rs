//! Position-based weight schedule for a single dimension.
//!
//! Weight halves with every step away from the current index and is anchored
//! so the farthest position on the longer side gets exactly 1. The current
//! index always gets 0, so a draw from the schedule never returns it.

use rand::Rng;

use crate::error::DomainIssue;

/// Weights as floats: powers of two are exact up to `2^1023`, past that the
/// nearest positions read as infinity. Sampling never goes through this
/// vector, so it has no effect on draws.
pub type WeightVector = Vec<f64>;

/// Schedule for the value at `index` in a domain of `len` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightSchedule {
    index: usize,
    len: usize,
    max_distance: usize,
}

impl WeightSchedule {
    pub fn new(index: usize, len: usize) -> Result<Self, DomainIssue> {
        if len == 0 {
            return Err(DomainIssue::Empty);
        }
        if index >= len {
            return Err(DomainIssue::IndexOutOfRange { index, len });
        }
        Ok(WeightSchedule {
            index,
            len,
            max_distance: index.max(len - index - 1),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `log2` of the weight at `position`; `None` for the current index or
    /// out-of-range positions.
    pub fn exponent(&self, position: usize) -> Option<usize> {
        let distance = position.abs_diff(self.index);
        if position >= self.len || distance == 0 {
            return None;
        }
        Some(self.max_distance - distance)
    }

    pub fn to_vec(&self) -> WeightVector {
        (0..self.len)
            .map(|j| match self.exponent(j) {
                Some(e) => 2f64.powi(i32::try_from(e).unwrap_or(i32::MAX)),
                None => 0.0,
            })
            .collect()
    }

    /// Draw a position with probability proportional to its weight. `None`
    /// when there is no other position to move to.
    ///
    /// Exact for any length: the distance `d` is drawn from a geometric
    /// distribution truncated at `max_distance` (`P(d) ∝ 2^-d`), then a side is
    /// picked by a fair coin. Draws that land outside the domain are redrawn,
    /// which leaves every in-range position with probability `∝ 2^-d`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.len < 2 {
            return None;
        }
        loop {
            let mut distance = 1;
            while distance <= self.max_distance && !rng.gen::<bool>() {
                distance += 1;
            }
            if distance > self.max_distance {
                continue;
            }
            let position = if rng.gen::<bool>() {
                self.index.checked_sub(distance)
            } else {
                Some(self.index + distance).filter(|&j| j < self.len)
            };
            if position.is_some() {
                return position;
            }
        }
    }
}

/// Weights for every position of a domain of `len` values when the current
/// value sits at `index`.
///
/// `len == 1` yields `[0]`; callers must not sample from it.
pub fn weights(index: usize, len: usize) -> Result<WeightVector, DomainIssue> {
    Ok(WeightSchedule::new(index, len)?.to_vec())
}
