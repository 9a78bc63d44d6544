//! Career advisor pipeline: Prompt Builder → completion → Formatter, then resources.
//!
//! Both remote calls run one after the other within a single submission.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::advisor::formatter::add_emoji_labels;
use crate::advisor::prompt_builder::{build_recommendation_prompt, ProfileError};
use crate::advisor::prompts::COUNSELOR_SYSTEM;
use crate::advisor::profile::StudentProfile;
use crate::advisor::resources::suggest_resources;
use crate::llm_client::{CompletionBackend, CompletionRequest, LlmError};

/// Token budget for the recommendation call.
pub const RECOMMENDATION_MAX_TOKENS: u32 = 1000;

/// Result of the recommendation step.
#[derive(Debug)]
pub enum RecommendationOutcome {
    /// Model text as returned by the backend.
    Ready(String),
    /// Presence check failed; nothing was sent.
    Invalid(ProfileError),
    /// The completion call failed.
    Failed(LlmError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Ok,
    Invalid,
    Failed,
}

impl RecommendationOutcome {
    pub fn status(&self) -> OutcomeStatus {
        match self {
            RecommendationOutcome::Ready(_) => OutcomeStatus::Ok,
            RecommendationOutcome::Invalid(_) => OutcomeStatus::Invalid,
            RecommendationOutcome::Failed(_) => OutcomeStatus::Failed,
        }
    }

    /// The emoji-labelled text shown in the recommendation panel.
    ///
    /// Messages and warnings go through the same labels as model text.
    pub fn display_text(&self) -> String {
        let text = match self {
            RecommendationOutcome::Ready(text) => text.clone(),
            RecommendationOutcome::Invalid(e) => e.to_string(),
            RecommendationOutcome::Failed(e) => e.warning_text(),
        };
        add_emoji_labels(&text)
    }
}

/// Everything one submission produces.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorReport {
    pub status: OutcomeStatus,
    pub recommendation: String,
    pub resources: Vec<String>,
}

#[derive(Clone)]
pub struct CareerAdvisor {
    backend: Arc<dyn CompletionBackend>,
}

impl CareerAdvisor {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    pub async fn recommend(&self, profile: &StudentProfile) -> RecommendationOutcome {
        let prompt = match build_recommendation_prompt(profile) {
            Ok(prompt) => prompt,
            Err(e) => return RecommendationOutcome::Invalid(e),
        };

        let request = CompletionRequest::new(COUNSELOR_SYSTEM, prompt)
            .with_max_tokens(RECOMMENDATION_MAX_TOKENS);

        match self.backend.complete(&request).await {
            Ok(text) => RecommendationOutcome::Ready(text),
            Err(e) => {
                warn!("Career recommendation failed: {e}");
                RecommendationOutcome::Failed(e)
            }
        }
    }

    pub async fn resources(&self, career_goals: &str) -> Vec<String> {
        suggest_resources(self.backend.as_ref(), career_goals).await
    }

    /// Runs the full pipeline for one submission.
    ///
    /// Resources are only requested when the profile passed its presence checks.
    pub async fn advise(&self, profile: &StudentProfile) -> AdvisorReport {
        let outcome = self.recommend(profile).await;

        let resources = match outcome {
            RecommendationOutcome::Invalid(_) => Vec::new(),
            _ => self.resources(&profile.career_goals).await,
        };

        info!(
            "Advice produced: status={:?}, resources={}",
            outcome.status(),
            resources.len()
        );

        AdvisorReport {
            status: outcome.status(),
            recommendation: outcome.display_text(),
            resources,
        }
    }
}
