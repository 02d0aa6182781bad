use rand::Rng;

use crate::error::DomainIssue;
use crate::schedule::WeightSchedule;
use crate::space::Domain;

/// Draw a replacement for `current` from `domain`, favouring values next to it
/// in domain order. Never returns `current`.
pub fn mutate_value<R: Rng + ?Sized>(
    domain: &Domain,
    current: i64,
    rng: &mut R,
) -> Result<i64, DomainIssue> {
    let index = domain
        .position(current)
        .ok_or(DomainIssue::ValueAbsent(current))?;
    domain.check_mutable()?;

    let next = WeightSchedule::new(index, domain.len())?
        .sample(rng)
        .ok_or(DomainIssue::TooFewValues { len: domain.len() })?;
    Ok(domain.values()[next])
}
