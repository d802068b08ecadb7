//! Match Scorer — measures one candidate (or a whole team) against a weighted
//! requirement set, and ranks a roster by that measure.
//!
//! Algorithm, per requirement:
//! - weight = priority weight (Critical=3, Important=2, NiceToHave=1)
//! - skill held → contribution = weight × min(proficiency / minimum, 1.0)
//! - skill absent → contribution = 0
//!
//! score = Σ(contribution) / Σ(weight) × 100, and 0 for an empty requirement set.

use serde::Serialize;
use tracing::debug;

use crate::models::person::Person;
use crate::models::requirement::SkillRequirement;

/// How one requirement contributed to a candidate's score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementMatch {
    pub requirement_id: String,
    pub skill: String,
    pub weight: u32,
    /// The candidate's level in this skill, `None` when not held.
    pub proficiency: Option<u8>,
    pub contribution: f64,
}

/// A score together with the per-requirement contributions behind it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub score: f64, // 0 – 100
    pub matches: Vec<RequirementMatch>,
}

/// A roster entry with its score, in ranked order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate<'a> {
    pub person: &'a Person,
    pub score: f64,
}

/// Fit of a single person against `requirements`, in [0, 100].
pub fn score(person: &Person, requirements: &[SkillRequirement]) -> f64 {
    weighted_score(requirements, |req| contribution(person, req))
}

/// Same as [`score`], keeping the per-requirement detail.
pub fn explain(person: &Person, requirements: &[SkillRequirement]) -> MatchBreakdown {
    let matches = requirements
        .iter()
        .map(|req| RequirementMatch {
            requirement_id: req.id.clone(),
            skill: req.name.clone(),
            weight: req.weight(),
            proficiency: person.proficiency_in(&req.name).map(|p| p.level()),
            contribution: contribution(person, req),
        })
        .collect();

    MatchBreakdown {
        score: score(person, requirements),
        matches,
    }
}

/// Aggregate fit of a team: each requirement takes the best contribution any
/// member offers, then the single-person formula applies.
pub fn team_score(team: &[&Person], requirements: &[SkillRequirement]) -> f64 {
    weighted_score(requirements, |req| {
        team.iter()
            .map(|member| contribution(member, req))
            .fold(0.0, f64::max)
    })
}

/// Drops unavailable people, scores the rest and sorts them best first.
/// The sort is stable, so equal scores keep their roster order.
pub fn rank<'a>(
    requirements: &[SkillRequirement],
    roster: impl IntoIterator<Item = &'a Person>,
) -> Vec<RankedCandidate<'a>> {
    let mut ranked: Vec<RankedCandidate<'a>> = roster
        .into_iter()
        .filter(|person| !person.is_unavailable())
        .map(|person| RankedCandidate {
            person,
            score: score(person, requirements),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        candidates = ranked.len(),
        requirements = requirements.len(),
        "Ranked roster"
    );

    ranked
}

fn contribution(person: &Person, req: &SkillRequirement) -> f64 {
    match person.proficiency_in(&req.name) {
        Some(level) => f64::from(req.weight()) * req.attainment(level),
        None => 0.0,
    }
}

fn weighted_score(
    requirements: &[SkillRequirement],
    mut contribution_of: impl FnMut(&SkillRequirement) -> f64,
) -> f64 {
    let total_weight: u32 = requirements.iter().map(SkillRequirement::weight).sum();
    if total_weight == 0 {
        return 0.0;
    }

    let achieved: f64 = requirements.iter().map(&mut contribution_of).sum();
    (achieved / f64::from(total_weight) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::person::{Availability, Skill};
    use crate::models::requirement::Priority;

    fn person(id: &str, skills: &[(&str, i64)], availability: Availability) -> Person {
        Person::new(
            id,
            id.to_uppercase(),
            "Frontend Dev",
            skills.iter().map(|(n, l)| Skill::new(*n, *l)),
            availability,
        )
    }

    fn sample_requirements() -> Vec<SkillRequirement> {
        vec![
            SkillRequirement::new("req1", "React", 4, Priority::Critical),
            SkillRequirement::new("req2", "Node.js", 4, Priority::Critical),
            SkillRequirement::new("req3", "Figma", 3, Priority::Important),
            SkillRequirement::new("req4", "Docker", 3, Priority::NiceToHave),
        ]
    }

    #[test]
    fn test_empty_requirements_score_zero() {
        let p = person("u1", &[("React", 5)], Availability::Available);
        assert_eq!(score(&p, &[]), 0.0);
    }

    #[test]
    fn test_all_skills_met_scores_hundred() {
        let p = person(
            "u1",
            &[("React", 5), ("Node.js", 4), ("Figma", 3), ("Docker", 5)],
            Availability::Available,
        );
        assert!((score(&p, &sample_requirements()) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_matching_skills_scores_zero() {
        let p = person("u1", &[("Cobol", 5)], Availability::Available);
        assert_eq!(score(&p, &sample_requirements()), 0.0);
    }

    #[test]
    fn test_full_proficiency_contributes_full_weight() {
        let alice = person("alice", &[("React", 5)], Availability::Available);
        let breakdown = explain(&alice, &sample_requirements());
        assert_eq!(breakdown.matches[0].contribution, 3.0);
        assert_eq!(breakdown.matches[0].proficiency, Some(5));
        assert_eq!(breakdown.matches[1].proficiency, None);
        // 3 / 9 × 100
        assert!((breakdown.score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_proficiency_scales_linearly() {
        let p = person("u1", &[("React", 2)], Availability::Available);
        let breakdown = explain(&p, &sample_requirements());
        assert!(
            (breakdown.matches[0].contribution - 1.5).abs() < 1e-9,
            "React=2 vs min 4 Critical should contribute 1.5, got {}",
            breakdown.matches[0].contribution
        );
    }

    #[test]
    fn test_zero_minimum_counts_as_met() {
        let reqs = vec![SkillRequirement::new("r", "Agile", 0, Priority::Important)];
        let holder = person("u1", &[("Agile", 1)], Availability::Available);
        let other = person("u2", &[], Availability::Available);
        assert_eq!(score(&holder, &reqs), 100.0);
        assert_eq!(score(&other, &reqs), 0.0);
    }

    #[test]
    fn test_duplicate_requirement_names_scored_independently() {
        let reqs = vec![
            SkillRequirement::new("r1", "React", 2, Priority::Critical),
            SkillRequirement::new("r2", "React", 4, Priority::NiceToHave),
            SkillRequirement::new("r3", "Go", 3, Priority::Important),
        ];
        let p = person("u1", &[("React", 2)], Availability::Available);
        // (3 × 1.0 + 1 × 0.5 + 0) / 6 × 100
        assert!((score(&p, &reqs) - 3.5 / 6.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounded_0_to_100() {
        let reqs = vec![
            SkillRequirement::new("r1", "React", -4, Priority::Critical),
            SkillRequirement::new("r2", "Go", 100, Priority::NiceToHave),
        ];
        let p = person("u1", &[("React", 5), ("Go", 5)], Availability::Available);
        let s = score(&p, &reqs);
        assert!((0.0..=100.0).contains(&s), "score out of range: {s}");
    }

    #[test]
    fn test_rank_excludes_unavailable_and_sorts_descending() {
        let roster = vec![
            person("low", &[("Docker", 3)], Availability::Available),
            person("gone", &[("React", 5), ("Node.js", 5)], Availability::Unavailable),
            person("high", &[("React", 5)], Availability::PartiallyAvailable),
        ];
        let ranked = rank(&sample_requirements(), &roster);
        let ids: Vec<&str> = ranked.iter().map(|c| c.person.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "low"]);
    }

    #[test]
    fn test_rank_ties_keep_roster_order() {
        let roster = vec![
            person("a", &[("React", 4)], Availability::Available),
            person("b", &[("React", 5)], Availability::Available),
            person("c", &[], Availability::Available),
            person("d", &[("React", 4)], Availability::Available),
        ];
        let ranked = rank(&sample_requirements(), &roster);
        let ids: Vec<&str> = ranked.iter().map(|c| c.person.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_team_score_takes_best_member_per_requirement() {
        let reqs = sample_requirements();
        let front = person("f", &[("React", 5), ("Docker", 1)], Availability::Available);
        let back = person("b", &[("Node.js", 4), ("Docker", 3)], Availability::Available);

        let solo = team_score(&[&front], &reqs);
        let pair = team_score(&[&front, &back], &reqs);
        // React 3 + Node 3 + Docker 1 out of 9
        assert!((pair - 700.0 / 9.0).abs() < 1e-9);
        assert!(pair >= solo);
        assert_eq!(team_score(&[], &reqs), 0.0);
    }
}
