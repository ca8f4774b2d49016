// Career recommendations: prompt building, response parsing, rule-based fallback
// and the resolver that chooses between them.
// All model calls go through llm_client; nothing here talks HTTP to the model directly.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod resolver;
