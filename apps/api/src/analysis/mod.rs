// Document analysis: the boundary with the generative-AI collaborator.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
