//! Parameter configuration space (PCS) files.
//!
//! One parameter per line:
//!
//! ```text
//! # comment
//! backbone {0, 1, 2}[1]
//! eliminate {true, false}[true]
//! ```
//!
//! Values are integers; `true`/`false` map to `1`/`0`. Condition (`a | b in
//! {..}`) and forbidden (`{a=1, b=2}`) clauses are skipped with a warning.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::error::DomainIssue;
use crate::point::{self, Point};
use crate::space::{Domain, ParameterSpace};

#[derive(Debug, Error)]
pub enum PcsError {
    #[error("failed reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {issue}")]
    Line { line: usize, issue: LineIssue },
    #[error("no parameters defined")]
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LineIssue {
    #[error("missing parameter name")]
    MissingName,
    #[error("missing '{{...}}' value list")]
    MissingValues,
    #[error("missing '[default]'")]
    MissingDefault,
    #[error("invalid value '{0}'")]
    InvalidValue(String),
    #[error("parameter '{name}': {issue}")]
    Domain { name: String, issue: DomainIssue },
    #[error("parameter '{name}': default {default} is not one of its values")]
    DefaultNotInValues { name: String, default: i64 },
    #[error("parameter '{0}' defined twice")]
    DuplicateName(String),
}

/// A parsed PCS file: the space and its default point.
#[derive(Clone, Debug)]
pub struct PcsSpace {
    space: ParameterSpace,
    defaults: Point,
    skipped_clauses: usize,
}

impl PcsSpace {
    pub fn space(&self) -> &ParameterSpace {
        &self.space
    }

    pub fn default_point(&self) -> &Point {
        &self.defaults
    }

    /// Condition/forbidden lines that were ignored.
    pub fn skipped_clauses(&self) -> usize {
        self.skipped_clauses
    }

    pub fn into_parts(self) -> (ParameterSpace, Point) {
        (self.space, self.defaults)
    }
}

pub fn read(path: &Path) -> Result<PcsSpace, PcsError> {
    let data = fs::read_to_string(path).map_err(|source| PcsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&data)
}

pub fn parse(input: &str) -> Result<PcsSpace, PcsError> {
    let mut names = Vec::new();
    let mut seen = HashSet::new();
    let mut domains = Vec::new();
    let mut defaults = Vec::new();
    let mut skipped_clauses = 0;

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.starts_with('{') || trimmed.contains('|') {
            warn!(line = line_no, clause = trimmed, "skipping unsupported pcs clause");
            skipped_clauses += 1;
            continue;
        }

        let (name, domain, default) = parse_parameter(trimmed).map_err(|issue| PcsError::Line {
            line: line_no,
            issue,
        })?;
        if !seen.insert(name.clone()) {
            return Err(PcsError::Line {
                line: line_no,
                issue: LineIssue::DuplicateName(name),
            });
        }
        names.push(name);
        domains.push(domain);
        defaults.push(default);
    }

    if domains.is_empty() {
        return Err(PcsError::Empty);
    }
    Ok(PcsSpace {
        space: ParameterSpace::new(domains).with_names(names),
        defaults: Point::new(defaults),
        skipped_clauses,
    })
}

fn parse_parameter(line: &str) -> Result<(String, Domain, i64), LineIssue> {
    let open = line.find('{').ok_or(LineIssue::MissingValues)?;
    let close = line[open..]
        .find('}')
        .map(|offset| open + offset)
        .ok_or(LineIssue::MissingValues)?;

    let name = line[..open]
        .split_whitespace()
        .next()
        .ok_or(LineIssue::MissingName)?
        .to_string();

    let values = line[open + 1..close]
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_value)
        .collect::<Result<Vec<_>, _>>()?;

    let rest = &line[close + 1..];
    let default_open = rest.find('[').ok_or(LineIssue::MissingDefault)?;
    let default_close = rest[default_open..]
        .find(']')
        .map(|offset| default_open + offset)
        .ok_or(LineIssue::MissingDefault)?;
    let default = parse_value(rest[default_open + 1..default_close].trim())?;

    let domain = Domain::new(values).map_err(|issue| LineIssue::Domain {
        name: name.clone(),
        issue,
    })?;
    domain.check_mutable().map_err(|issue| LineIssue::Domain {
        name: name.clone(),
        issue,
    })?;
    if !domain.contains(default) {
        return Err(LineIssue::DefaultNotInValues { name, default });
    }
    Ok((name, domain, default))
}

fn parse_value(token: &str) -> Result<i64, LineIssue> {
    point::parse_value(token).ok_or_else(|| LineIssue::InvalidValue(token.to_string()))
}
