// LLM prompt constants for document analysis.

/// Role statement for document analysis; `JSON_ONLY_RULES` is appended at call time.
pub const ANALYSIS_ROLE: &str = "You are an expert technical project analyst. \
    You read project documents and extract requirements, timelines, \
    a suggested team, and a suggested technology stack.";

/// Analysis prompt template. Replace `{document_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following project document and extract the key information.

Return a JSON object with this EXACT schema (populate every field):
{
  "summary": "One paragraph on the document's purpose and key goals",
  "functionalRequirements": [
    {"id": "fr1", "description": "User authentication", "confidence": 0.95, "source": "Section 2.1"}
  ],
  "nonFunctionalRequirements": [
    {"id": "nfr1", "description": "p95 response time under 200ms", "confidence": 0.9, "source": "Section 3"}
  ],
  "timelineIndicators": [
    {"id": "tl1", "description": "Design phase ends by Q3", "confidence": 0.8, "source": "Section 4"}
  ],
  "suggestedTeam": [
    {
      "id": "u1",
      "name": "Realistic Name",
      "avatarUrl": "https://picsum.photos/seed/name/100",
      "role": "Frontend Dev",
      "skills": [{"name": "React", "proficiency": 4}],
      "availability": "Available"
    }
  ],
  "suggestedArchitecture": {
    "frontend": "...",
    "backend": "...",
    "database": "...",
    "deployment": "..."
  }
}

Rules:
- confidence is a number from 0.0 to 1.0
- proficiency is an integer from 1 (Novice) to 5 (Expert)
- availability is one of "Available", "PartiallyAvailable", "Unavailable"
- Prefer these role labels where they fit: "Frontend Dev", "Backend Dev", "UI/UX Designer", "Project Manager"

DOCUMENT:
{document_text}"#;
