// Cross-cutting prompt fragments. Each service that calls the LLM keeps its
// own prompts.rs alongside it and composes these in.

/// Appended to every system prompt that expects a JSON reply.
pub const JSON_ONLY_RULES: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
