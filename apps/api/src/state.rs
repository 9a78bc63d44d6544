use crate::advisor::service::CareerAdvisor;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-request data; every submission is independent.
#[derive(Clone)]
pub struct AppState {
    pub advisor: CareerAdvisor,
    /// Model identifier reported by `/health`.
    pub model: String,
}
