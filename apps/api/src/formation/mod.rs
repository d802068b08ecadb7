// Team formation engine: match scoring, team assembly, skill coverage.
// Pure functions over caller-supplied requirements and rosters; only
// handlers.rs touches application state.

pub mod assembler;
pub mod coverage;
pub mod handlers;
pub mod match_scoring;
