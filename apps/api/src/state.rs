use std::sync::Arc;

use crate::analysis::analyzer::DocumentAnalyzer;
use crate::directory::Directory;
use crate::formation::assembler::TeamAssembler;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Source of the default roster and of projects.
    pub directory: Arc<dyn Directory>,
    /// Document analysis backend. `DisabledAnalyzer` when no API key is configured.
    pub analyzer: Arc<dyn DocumentAnalyzer>,
    pub assembler: TeamAssembler,
}
