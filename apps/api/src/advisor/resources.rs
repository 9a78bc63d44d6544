//! Resource Suggester — asks for learning resources for a career goal.

use tracing::warn;

use crate::advisor::prompts::{RESOURCES_PROMPT_TEMPLATE, RESOURCES_SYSTEM};
use crate::llm_client::{CompletionBackend, CompletionRequest};

/// Token budget for the resources call.
pub const RESOURCES_MAX_TOKENS: u32 = 500;

pub fn build_resources_prompt(career_goals: &str) -> String {
    RESOURCES_PROMPT_TEMPLATE.replace("{career_goals}", career_goals)
}

/// Returns the response split into lines, one entry per `\n` segment.
///
/// On failure the warning text is returned as the only element, so callers
/// can always iterate the result.
pub async fn suggest_resources(backend: &dyn CompletionBackend, career_goals: &str) -> Vec<String> {
    let request = CompletionRequest::new(RESOURCES_SYSTEM, build_resources_prompt(career_goals))
        .with_max_tokens(RESOURCES_MAX_TOKENS);

    match backend.complete(&request).await {
        Ok(text) => text.split('\n').map(str::to_string).collect(),
        Err(e) => {
            warn!("Resource suggestion failed: {e}");
            vec![e.warning_text()]
        }
    }
}
