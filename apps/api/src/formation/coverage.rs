#![allow(dead_code)]

//! Coverage Calculator — how much of a requirement set a hand-picked team meets.
//!
//! Stateless: callers recompute after every team edit.

use serde::Serialize;

use crate::models::person::Person;
use crate::models::requirement::SkillRequirement;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub coverage: u32, // 0 – 100
    pub covered: Vec<String>,
    pub uncovered: Vec<String>,
}

/// Percentage of requirements met by at least one member, rounded half-up.
/// An empty requirement set is fully covered.
pub fn coverage(team: &[Person], requirements: &[SkillRequirement]) -> u32 {
    let covered = requirements
        .iter()
        .filter(|req| is_covered(team, req))
        .count();
    percentage(covered, requirements.len())
}

/// [`coverage`] plus the ids of the requirements on each side.
pub fn coverage_report(team: &[Person], requirements: &[SkillRequirement]) -> CoverageReport {
    let (covered, uncovered): (Vec<&SkillRequirement>, Vec<&SkillRequirement>) =
        requirements.iter().partition(|req| is_covered(team, req));

    CoverageReport {
        coverage: percentage(covered.len(), requirements.len()),
        covered: covered.into_iter().map(|r| r.id.clone()).collect(),
        uncovered: uncovered.into_iter().map(|r| r.id.clone()).collect(),
    }
}

fn is_covered(team: &[Person], req: &SkillRequirement) -> bool {
    team.iter().any(|member| {
        member
            .proficiency_in(&req.name)
            .is_some_and(|level| req.is_met_by(level))
    })
}

// Integer half-up rounding of 100 × covered / total.
fn percentage(covered: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((200 * covered + total) / (2 * total)) as u32
}
