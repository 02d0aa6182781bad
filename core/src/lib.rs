//! Weighted neighbor sampling over discrete parameter spaces.
//!
//! Given a start point and one ordered domain per dimension, generate a set of
//! distinct neighbors the way a (1+1) evolutionary step would: mutate a random
//! subset of dimensions, favouring values adjacent in domain order.

pub mod config;
pub mod error;
pub mod generator;
pub mod pcs;
pub mod point;
pub mod rng;
pub mod sampler;
pub mod schedule;
pub mod selector;
pub mod space;

pub use config::GeneratorConfig;
pub use error::{DomainIssue, InputIssue, NeighborError};
pub use generator::{generate_neighbors, NeighborGenerator};
pub use pcs::{PcsError, PcsSpace};
pub use point::{parse_points, Point, PointParseError};
pub use rng::{seeded, SearchRng};
pub use sampler::mutate_value;
pub use schedule::{weights, WeightSchedule, WeightVector};
pub use selector::select_dimensions;
pub use space::{Change, Domain, ParameterSpace};
