//! Axum route handlers for the Team Formation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::formation::assembler::TeamRecommendation;
use crate::formation::coverage::{coverage_report, CoverageReport};
use crate::formation::match_scoring::{explain, rank, MatchBreakdown};
use crate::models::person::Person;
use crate::models::requirement::SkillRequirement;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Requirements plus an optional roster. The directory's people are used when
/// `roster` is omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    pub requirements: Vec<SkillRequirement>,
    #[serde(default)]
    pub roster: Option<Vec<Person>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageRequest {
    #[serde(default)]
    pub team: Vec<Person>,
    #[serde(default)]
    pub requirements: Vec<SkillRequirement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidateResponse {
    pub person: Person,
    #[serde(flatten)]
    pub breakdown: MatchBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/team/rank
///
/// Every available candidate with its score and per-requirement breakdown, best first.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<TeamRequest>,
) -> Result<Json<Vec<RankedCandidateResponse>>, AppError> {
    let roster = resolve_roster(&state, request.roster).await?;

    let ranked = rank(&request.requirements, &roster)
        .into_iter()
        .map(|c| RankedCandidateResponse {
            person: c.person.clone(),
            breakdown: explain(c.person, &request.requirements),
        })
        .collect();

    Ok(Json(ranked))
}

/// POST /api/v1/team/recommendations
///
/// Up to three team proposals (best-fit, balanced, most-available).
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<TeamRequest>,
) -> Result<Json<Vec<TeamRecommendation>>, AppError> {
    let roster = resolve_roster(&state, request.roster).await?;

    let recommendations = state.assembler.assemble(&request.requirements, &roster);
    info!(
        requirements = request.requirements.len(),
        roster = roster.len(),
        recommendations = recommendations.len(),
        policy = ?state.assembler.policy(),
        "Assembled team recommendations"
    );

    Ok(Json(recommendations))
}

/// POST /api/v1/team/coverage
///
/// Skill coverage of a hand-picked team. Empty requirements are fully covered.
pub async fn handle_coverage(Json(request): Json<CoverageRequest>) -> Json<CoverageReport> {
    Json(coverage_report(&request.team, &request.requirements))
}

async fn resolve_roster(
    state: &AppState,
    roster: Option<Vec<Person>>,
) -> Result<Vec<Person>, AppError> {
    match roster {
        Some(roster) => Ok(roster),
        None => Ok(state.directory.people().await?),
    }
}
