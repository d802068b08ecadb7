use serde::{Deserialize, Serialize};

use crate::models::person::Person;

/// A requirement or indicator pulled out of a project document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedItem {
    pub id: String,
    pub description: String,
    /// 0.0 – 1.0, as reported by the model.
    pub confidence: f64,
    /// Where in the document it came from, e.g. "Section 2.1".
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedArchitecture {
    pub frontend: String,
    pub backend: String,
    pub database: String,
    pub deployment: String,
}

/// Structured analysis returned by the document-analysis collaborator.
/// Deserialized as-is; field values are not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub summary: String,
    pub functional_requirements: Vec<ExtractedItem>,
    pub non_functional_requirements: Vec<ExtractedItem>,
    pub timeline_indicators: Vec<ExtractedItem>,
    pub suggested_team: Vec<Person>,
    pub suggested_architecture: SuggestedArchitecture,
}
