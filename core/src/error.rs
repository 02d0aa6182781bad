use thiserror::Error;

/// Why a single domain cannot be used for mutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomainIssue {
    #[error("domain is empty")]
    Empty,
    #[error("value {0} appears more than once")]
    DuplicateValue(i64),
    #[error("value {0} is not in the domain")]
    ValueAbsent(i64),
    #[error("domain has {len} value(s), at least 2 are needed to mutate")]
    TooFewValues { len: usize },
    #[error("index {index} out of range for domain of {len} values")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Malformed request shape, independent of any particular domain.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputIssue {
    #[error("start point is empty")]
    EmptyStartPoint,
    #[error("parameter space has no dimensions")]
    EmptySpace,
    #[error("target count must be at least 1")]
    ZeroTarget,
    #[error("start point has {point} coordinates but the space has {space} dimensions")]
    LengthMismatch { point: usize, space: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NeighborError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputIssue),
    #[error("invalid domain for dimension {dimension}: {issue}")]
    InvalidDomain { dimension: usize, issue: DomainIssue },
    #[error("cannot produce {requested} distinct neighbors, only {reachable} reachable")]
    Unsatisfiable { requested: usize, reachable: u128 },
    #[error("gave up after {attempts} attempts with {found} of {requested} neighbors")]
    AttemptsExhausted {
        requested: usize,
        found: usize,
        attempts: u64,
    },
}

impl NeighborError {
    pub fn domain(dimension: usize, issue: DomainIssue) -> Self {
        NeighborError::InvalidDomain { dimension, issue }
    }

    /// True for both the reachable-count precheck and the attempt bound.
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(
            self,
            NeighborError::Unsatisfiable { .. } | NeighborError::AttemptsExhausted { .. }
        )
    }
}
