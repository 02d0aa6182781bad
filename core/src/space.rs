use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::error::{DomainIssue, InputIssue, NeighborError};
use crate::point::{self, Point, PointParseError};

/// Ordered, distinct legal values for one dimension. Order defines adjacency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Domain {
    values: Vec<i64>,
}

impl Domain {
    pub fn new(values: Vec<i64>) -> Result<Self, DomainIssue> {
        if values.is_empty() {
            return Err(DomainIssue::Empty);
        }
        let mut seen = HashSet::with_capacity(values.len());
        for &value in &values {
            if !seen.insert(value) {
                return Err(DomainIssue::DuplicateValue(value));
            }
        }
        Ok(Domain { values })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    pub fn position(&self, value: i64) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }

    /// Whether this domain can be sampled from at all.
    pub fn check_mutable(&self) -> Result<(), DomainIssue> {
        if self.len() < 2 {
            return Err(DomainIssue::TooFewValues { len: self.len() });
        }
        Ok(())
    }
}

impl TryFrom<Vec<i64>> for Domain {
    type Error = DomainIssue;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Domain::new(values)
    }
}

impl From<Domain> for Vec<i64> {
    fn from(domain: Domain) -> Self {
        domain.values
    }
}

/// One changed coordinate between two points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Change {
    pub dimension: usize,
    pub name: String,
    pub from: i64,
    pub to: i64,
}

/// One domain per dimension, optionally named.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpace {
    domains: Vec<Domain>,
    #[serde(default)]
    names: Vec<String>,
}

impl ParameterSpace {
    pub fn new(domains: Vec<Domain>) -> Self {
        ParameterSpace {
            domains,
            names: Vec::new(),
        }
    }

    /// Build from raw value lists; reports the first offending dimension.
    pub fn from_values(values: Vec<Vec<i64>>) -> Result<Self, NeighborError> {
        let domains = values
            .into_iter()
            .enumerate()
            .map(|(dimension, v)| {
                Domain::new(v).map_err(|issue| NeighborError::domain(dimension, issue))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ParameterSpace::new(domains))
    }

    /// Attach one name per dimension. Ignored unless the count matches.
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        if names.len() == self.domains.len() {
            self.names = names;
        }
        self
    }

    pub fn dimensions(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn domain(&self, dimension: usize) -> Option<&Domain> {
        self.domains.get(dimension)
    }

    /// Name of a dimension, falling back to its index.
    pub fn name(&self, dimension: usize) -> String {
        self.names
            .get(dimension)
            .cloned()
            .unwrap_or_else(|| format!("p{dimension}"))
    }

    /// Dimension carrying `name`, if names are attached.
    pub fn dimension_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Parse one point. Plain lines list every coordinate; lines of
    /// `--name=value` assignments (as written by SMAC/ParamILS tooling)
    /// override the matching coordinates of `base`.
    pub fn parse_point(&self, line: &str, base: &Point) -> Result<Point, PointParseError> {
        if !line.contains('=') {
            return line.parse();
        }
        let mut point = base.clone();
        for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let (name, raw) = token
                .trim_start_matches('-')
                .split_once('=')
                .ok_or_else(|| PointParseError::InvalidCoordinate(token.to_string()))?;
            let dimension = self
                .dimension_of(name)
                .filter(|&d| d < point.len())
                .ok_or_else(|| PointParseError::UnknownParameter(name.to_string()))?;
            let value = point::parse_value(raw.trim_matches(|c| c == '\'' || c == '"'))
                .ok_or_else(|| PointParseError::InvalidCoordinate(token.to_string()))?;
            point.set(dimension, value);
        }
        Ok(point)
    }

    /// Points file in either form accepted by [`parse_point`](Self::parse_point).
    pub fn parse_points(&self, input: &str, base: &Point) -> Result<Vec<Point>, PointParseError> {
        point::parse_lines(input, |line| self.parse_point(line, base))
    }

    /// Shape and membership check for a point in this space.
    pub fn validate_point(&self, point: &Point) -> Result<(), NeighborError> {
        if point.is_empty() {
            return Err(InputIssue::EmptyStartPoint.into());
        }
        if self.is_empty() {
            return Err(InputIssue::EmptySpace.into());
        }
        if point.len() != self.dimensions() {
            return Err(InputIssue::LengthMismatch {
                point: point.len(),
                space: self.dimensions(),
            }
            .into());
        }
        for (dimension, (domain, &value)) in self.domains.iter().zip(point.values()).enumerate() {
            if !domain.contains(value) {
                return Err(NeighborError::domain(dimension, DomainIssue::ValueAbsent(value)));
            }
        }
        Ok(())
    }

    /// Every domain must admit a mutation.
    pub fn validate_mutable(&self) -> Result<(), NeighborError> {
        for (dimension, domain) in self.domains.iter().enumerate() {
            domain
                .check_mutable()
                .map_err(|issue| NeighborError::domain(dimension, issue))?;
        }
        Ok(())
    }

    /// Number of points reachable by mutating any nonempty subset of
    /// dimensions: every in-space point except the start. Saturates at
    /// `u128::MAX`.
    pub fn reachable_neighbors(&self) -> u128 {
        if self.is_empty() {
            return 0;
        }
        let total = self
            .domains
            .iter()
            .try_fold(1u128, |acc, d| acc.checked_mul(d.len() as u128));
        match total {
            Some(total) => total - 1,
            None => u128::MAX,
        }
    }

    /// Whether `point` is a neighbor of `start` inside this space.
    pub fn is_neighbor(&self, start: &Point, point: &Point) -> bool {
        point.len() == self.dimensions()
            && point != start
            && self
                .domains
                .iter()
                .zip(point.values())
                .all(|(domain, &value)| domain.contains(value))
    }

    /// How many of `points` are neighbors of `start`.
    pub fn count_neighbors(&self, start: &Point, points: &BTreeSet<Point>) -> u128 {
        points.iter().filter(|p| self.is_neighbor(start, p)).count() as u128
    }

    /// Per-dimension changes from `from` to `to`.
    pub fn diff(&self, from: &Point, to: &Point) -> Vec<Change> {
        from.values()
            .iter()
            .zip(to.values())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(dimension, (&a, &b))| Change {
                dimension,
                name: self.name(dimension),
                from: a,
                to: b,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(values: Vec<Vec<i64>>) -> ParameterSpace {
        ParameterSpace::from_values(values).unwrap()
    }

    #[test]
    fn test_domain_rejects_empty_and_duplicates() {
        assert_eq!(Domain::new(vec![]), Err(DomainIssue::Empty));
        assert_eq!(
            Domain::new(vec![1, 2, 1]),
            Err(DomainIssue::DuplicateValue(1))
        );
        let d = Domain::new(vec![10, 100, 1000]).unwrap();
        assert_eq!(d.position(100), Some(1));
        assert_eq!(d.position(5), None);
    }

    #[test]
    fn test_from_values_reports_dimension() {
        let err = ParameterSpace::from_values(vec![vec![0, 1], vec![3, 3]]).unwrap_err();
        assert_eq!(
            err,
            NeighborError::domain(1, DomainIssue::DuplicateValue(3))
        );
    }

    #[test]
    fn test_validate_point() {
        let s = space(vec![vec![0, 1], vec![1, 2, 3]]);
        assert!(s.validate_point(&Point::new(vec![0, 1])).is_ok());
        assert_eq!(
            s.validate_point(&Point::new(vec![])),
            Err(InputIssue::EmptyStartPoint.into())
        );
        assert_eq!(
            s.validate_point(&Point::new(vec![0])),
            Err(InputIssue::LengthMismatch { point: 1, space: 2 }.into())
        );
        assert_eq!(
            s.validate_point(&Point::new(vec![0, 7])),
            Err(NeighborError::domain(1, DomainIssue::ValueAbsent(7)))
        );
        assert_eq!(
            ParameterSpace::new(vec![]).validate_point(&Point::new(vec![0])),
            Err(InputIssue::EmptySpace.into())
        );
    }

    #[test]
    fn test_reachable_neighbors() {
        assert_eq!(space(vec![vec![0, 1]]).reachable_neighbors(), 1);
        assert_eq!(
            space(vec![vec![0, 1], vec![1, 2, 3]]).reachable_neighbors(),
            5
        );
        let wide: Vec<Vec<i64>> = (0..40).map(|_| (0..64).collect()).collect();
        assert_eq!(space(wide).reachable_neighbors(), u128::MAX);
    }

    #[test]
    fn test_validate_mutable_flags_single_value_domain() {
        let s = space(vec![vec![0, 1], vec![5]]);
        assert_eq!(
            s.validate_mutable(),
            Err(NeighborError::domain(1, DomainIssue::TooFewValues { len: 1 }))
        );
    }

    #[test]
    fn test_diff_uses_names() {
        let s = space(vec![vec![0, 1], vec![1, 2, 3]])
            .with_names(vec!["backbone".to_string(), "tier".to_string()]);
        let changes = s.diff(&Point::new(vec![0, 1]), &Point::new(vec![0, 3]));
        assert_eq!(
            changes,
            vec![Change {
                dimension: 1,
                name: "tier".to_string(),
                from: 1,
                to: 3
            }]
        );
        assert_eq!(space(vec![vec![0, 1]]).name(0), "p0");
    }

    #[test]
    fn test_parse_named_point_overrides_base() {
        let s = space(vec![vec![0, 1], vec![1, 2, 3], vec![0, 1]])
            .with_names(vec!["backbone".into(), "tier".into(), "chrono".into()]);
        let base = Point::new(vec![0, 1, 1]);
        assert_eq!(
            s.parse_point("--tier=3 --chrono=false", &base).unwrap(),
            Point::new(vec![0, 3, 0])
        );
        assert_eq!(
            s.parse_point("-backbone='1'", &base).unwrap(),
            Point::new(vec![1, 1, 1])
        );
        assert_eq!(s.parse_point("1 2 0", &base).unwrap(), Point::new(vec![1, 2, 0]));
        assert_eq!(
            s.parse_point("--restarts=4", &base),
            Err(PointParseError::UnknownParameter("restarts".to_string()))
        );
        assert_eq!(
            s.parse_point("--tier=fast", &base),
            Err(PointParseError::InvalidCoordinate("--tier=fast".to_string()))
        );
    }

    #[test]
    fn test_parse_points_mixes_forms() {
        let s = space(vec![vec![0, 1], vec![1, 2, 3]])
            .with_names(vec!["backbone".into(), "tier".into()]);
        let base = Point::new(vec![0, 1]);
        let points = s
            .parse_points("# earlier
--tier=2
1 3
--backbone=1 --tier=2
", &base)
            .unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(vec![0, 2]),
                Point::new(vec![1, 3]),
                Point::new(vec![1, 2])
            ]
        );
        match s.parse_points("--tier=2
--nope=1
", &base) {
            Err(PointParseError::AtLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_domain_serde_validates() {
        let d: Domain = serde_json::from_str("[5, 10, 25]").unwrap();
        assert_eq!(d.values(), &[5, 10, 25]);
        assert!(serde_json::from_str::<Domain>("[1, 1]").is_err());
    }
}
