// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting pieces.

/// Persona line opening every advisory prompt.
pub const COUNSELOR_PERSONA: &str =
    "You are an expert career counselor with access to real-time job market data.";

/// Closing instruction for prompts whose output is parsed as a JSON array.
pub const JSON_ARRAY_ONLY: &str = "Provide ONLY the JSON array, no other text.";
