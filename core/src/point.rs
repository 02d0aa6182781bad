use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// One configuration: a value per dimension.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(Vec<i64>);

impl Point {
    pub fn new(values: Vec<i64>) -> Self {
        Point(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }

    pub(crate) fn set(&mut self, dimension: usize, value: i64) {
        self.0[dimension] = value;
    }
}

impl From<Vec<i64>> for Point {
    fn from(values: Vec<i64>) -> Self {
        Point(values)
    }
}

impl Index<usize> for Point {
    type Output = i64;

    fn index(&self, index: usize) -> &i64 {
        &self.0[index]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PointParseError {
    #[error("point has no coordinates")]
    Empty,
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<PointParseError>,
    },
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Integers separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for token in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let value = token
                .parse::<i64>()
                .map_err(|_| PointParseError::InvalidCoordinate(token.to_string()))?;
            values.push(value);
        }
        if values.is_empty() {
            return Err(PointParseError::Empty);
        }
        Ok(Point(values))
    }
}

/// Parse a points file: one point per line, blank lines and `#` comments
/// skipped.
pub fn parse_points(input: &str) -> Result<Vec<Point>, PointParseError> {
    parse_lines(input, str::parse::<Point>)
}

pub(crate) fn parse_lines<F>(input: &str, parse_line: F) -> Result<Vec<Point>, PointParseError>
where
    F: Fn(&str) -> Result<Point, PointParseError>,
{
    let mut points = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let point = parse_line(trimmed).map_err(|err| PointParseError::AtLine {
            line: i + 1,
            source: Box::new(err),
        })?;
        points.push(point);
    }
    Ok(points)
}

/// Parameter value as written in PCS and solver command lines.
pub(crate) fn parse_value(token: &str) -> Option<i64> {
    match token {
        "true" => Some(1),
        "false" => Some(0),
        _ => token.parse().ok(),
    }
}
