//! Document analyzer — pluggable collaborator that turns document text into a
//! `DocumentAnalysis`.
//!
//! `AppState` holds an `Arc<dyn DocumentAnalyzer>`: `LlmDocumentAnalyzer` when an
//! API key is configured, `DisabledAnalyzer` otherwise.

use async_trait::async_trait;

use crate::analysis::models::DocumentAnalysis;
use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_ROLE};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_RULES;
use crate::llm_client::LlmClient;

#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze(&self, document_text: &str) -> Result<DocumentAnalysis, AppError>;

    /// "llm" | "disabled" — surfaced in logs and health output.
    fn backend(&self) -> &'static str;
}

pub struct LlmDocumentAnalyzer {
    llm: LlmClient,
    system: String,
}

impl LlmDocumentAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: system_prompt(),
        }
    }
}

#[async_trait]
impl DocumentAnalyzer for LlmDocumentAnalyzer {
    async fn analyze(&self, document_text: &str) -> Result<DocumentAnalysis, AppError> {
        self.llm
            .call_json::<DocumentAnalysis>(&build_prompt(document_text), &self.system)
            .await
            .map_err(|e| AppError::Llm(format!("Document analysis failed: {e}")))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Used when no LLM credentials are configured; every call is refused.
pub struct DisabledAnalyzer;

#[async_trait]
impl DocumentAnalyzer for DisabledAnalyzer {
    async fn analyze(&self, _document_text: &str) -> Result<DocumentAnalysis, AppError> {
        Err(AppError::AnalysisDisabled)
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}

fn system_prompt() -> String {
    format!("{ANALYSIS_ROLE} {JSON_ONLY_RULES}")
}

fn build_prompt(document_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{document_text}", document_text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_document() {
        let prompt = build_prompt("  Project Brief: E-commerce Overhaul.  ");
        assert!(prompt.ends_with("DOCUMENT:\nProject Brief: E-commerce Overhaul."));
        assert!(!prompt.contains("{document_text}"));
    }

    #[test]
    fn test_system_prompt_demands_json() {
        let system = system_prompt();
        assert!(system.starts_with(ANALYSIS_ROLE));
        assert!(system.contains("valid JSON only"));
    }

    #[tokio::test]
    async fn test_disabled_analyzer_refuses() {
        let err = DisabledAnalyzer.analyze("anything").await.unwrap_err();
        assert!(matches!(err, AppError::AnalysisDisabled));
        assert_eq!(DisabledAnalyzer.backend(), "disabled");
    }
}
