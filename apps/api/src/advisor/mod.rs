// Career advisor: profile validation, prompt building, completion, emoji labels, resources.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod formatter;
pub mod handlers;
pub mod profile;
pub mod prompt_builder;
pub mod prompts;
pub mod resources;
pub mod service;
