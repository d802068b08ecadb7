//! Team Assembler — turns a ranked roster into up to three team proposals.
//!
//! Each strategy runs independently over the same candidate pool and is
//! omitted when it cannot produce a non-empty team:
//! 1. Best-fit: top four by score.
//! 2. Balanced: best unclaimed candidate for each canonical role.
//! 3. Most-available: first four fully available people in roster order.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::formation::match_scoring::{rank, team_score, RankedCandidate};
use crate::models::person::{Availability, Person};
use crate::models::requirement::SkillRequirement;

pub const MAX_TEAM_SIZE: usize = 4;

/// Roles the balanced strategy tries to fill, in this order.
pub const CANONICAL_ROLES: [&str; 4] = [
    "Frontend Dev",
    "Backend Dev",
    "UI/UX Designer",
    "Project Manager",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BestFit,
    Balanced,
    MostAvailable,
}

impl Strategy {
    pub fn id(self) -> &'static str {
        match self {
            Strategy::BestFit => "best-fit",
            Strategy::Balanced => "balanced",
            Strategy::MostAvailable => "most-available",
        }
    }

    /// Constant figure shown by the dashboard for this strategy.
    pub fn display_score(self) -> u32 {
        match self {
            Strategy::BestFit => 92,
            Strategy::Balanced => 85,
            Strategy::MostAvailable => 78,
        }
    }

    pub fn justification(self) -> &'static str {
        match self {
            Strategy::BestFit => {
                "This team has the highest overall skill proficiency match. \
                 Optimized for technical excellence."
            }
            Strategy::Balanced => {
                "This composition ensures all key roles are filled with skilled individuals, \
                 providing a balanced approach."
            }
            Strategy::MostAvailable => {
                "This team is composed of members with full availability, \
                 optimizing for project velocity and responsiveness."
            }
        }
    }
}

/// How a recommendation's `match_score` is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamScorePolicy {
    /// Team-level weighted score over the proposed members.
    #[default]
    Aggregate,
    /// Per-strategy constants (92 / 85 / 78).
    Fixed,
}

impl FromStr for TeamScorePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggregate" => Ok(TeamScorePolicy::Aggregate),
            "fixed" => Ok(TeamScorePolicy::Fixed),
            other => Err(format!(
                "unknown team score policy '{other}' (expected 'aggregate' or 'fixed')"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecommendation {
    pub id: String,
    pub strategy: Strategy,
    pub team: Vec<Person>,
    pub match_score: u32, // 0 – 100
    pub justification: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TeamAssembler {
    policy: TeamScorePolicy,
}

impl TeamAssembler {
    pub fn new(policy: TeamScorePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TeamScorePolicy {
        self.policy
    }

    /// Builds 0–3 recommendations. With no requirements every candidate
    /// scores 0, so the teams follow roster order.
    pub fn assemble(
        &self,
        requirements: &[SkillRequirement],
        roster: &[Person],
    ) -> Vec<TeamRecommendation> {
        let pool = candidate_pool(roster);
        let ranked = rank(requirements, pool.iter().copied());

        [
            (Strategy::BestFit, best_fit(&ranked)),
            (Strategy::Balanced, balanced(&ranked)),
            (Strategy::MostAvailable, most_available(&pool)),
        ]
        .into_iter()
        .filter_map(|(strategy, team)| {
            if team.is_empty() {
                debug!(strategy = strategy.id(), "Strategy produced no team, omitted");
                return None;
            }
            Some(self.recommend(strategy, &team, requirements))
        })
        .collect()
    }

    fn recommend(
        &self,
        strategy: Strategy,
        team: &[&Person],
        requirements: &[SkillRequirement],
    ) -> TeamRecommendation {
        let match_score = match self.policy {
            TeamScorePolicy::Aggregate => team_score(team, requirements).round() as u32,
            TeamScorePolicy::Fixed => strategy.display_score(),
        };

        TeamRecommendation {
            id: strategy.id().to_string(),
            strategy,
            team: team.iter().map(|p| (*p).clone()).collect(),
            match_score,
            justification: strategy.justification().to_string(),
        }
    }
}

/// Available or partially available people, first occurrence of each id.
fn candidate_pool(roster: &[Person]) -> Vec<&Person> {
    let mut seen = HashSet::new();
    roster
        .iter()
        .filter(|p| !p.is_unavailable())
        .filter(|p| seen.insert(p.id.as_str()))
        .collect()
}

fn best_fit<'a>(ranked: &[RankedCandidate<'a>]) -> Vec<&'a Person> {
    ranked
        .iter()
        .take(MAX_TEAM_SIZE)
        .map(|c| c.person)
        .collect()
}

fn balanced<'a>(ranked: &[RankedCandidate<'a>]) -> Vec<&'a Person> {
    let mut team: Vec<&'a Person> = Vec::new();
    for role in CANONICAL_ROLES {
        let pick = ranked
            .iter()
            .map(|c| c.person)
            .find(|p| p.role == role && !team.iter().any(|m| m.id == p.id));
        if let Some(person) = pick {
            team.push(person);
        }
    }
    team
}

fn most_available<'a>(pool: &[&'a Person]) -> Vec<&'a Person> {
    pool.iter()
        .copied()
        .filter(|p| p.availability == Availability::Available)
        .take(MAX_TEAM_SIZE)
        .collect()
}
