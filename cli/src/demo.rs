use neighborhood_core::{NeighborError, ParameterSpace, Point};

/// Ten solver-style parameters used when no PCS file is given.
const DEMO_DOMAINS: [&[i64]; 10] = [
    &[0, 1],
    &[1, 2, 3],
    &[5, 10, 25, 50, 100],
    &[10, 100, 1000, 10000],
    &[0, 1],
    &[0, 1],
    &[1, 2, 3],
    &[5, 10, 25, 50, 100],
    &[10, 100, 1000, 10000],
    &[0, 1],
];

const DEMO_START: [i64; 10] = [0, 2, 5, 1000, 1, 0, 2, 5, 1000, 1];

pub fn space() -> Result<ParameterSpace, NeighborError> {
    ParameterSpace::from_values(DEMO_DOMAINS.iter().map(|values| values.to_vec()).collect())
}

pub fn start() -> Point {
    Point::new(DEMO_START.to_vec())
}
