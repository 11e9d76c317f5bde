//! Goal-conflict analysis pipeline.
//!
//! A single pass per request: length gate, prompt composition, one model
//! call, fence-stripping JSON parse, per-entry validation, sort. No state
//! survives the request.

pub mod extract;
pub mod prompt;
pub mod schema;
pub mod validate;

use crate::provider::{ChatRequest, Message, Provider, ProviderError};
use schema::{MultiConflictResponse, PolicyText};
use thiserror::Error;

/// Model identifier sent with every analysis request.
pub const ANALYSIS_MODEL: &str = "claude-sonnet-4-20250514";

/// Output-token budget for one analysis.
pub const ANALYSIS_MAX_TOKENS: i64 = 4000;

/// Failure modes of the analysis pipeline.
///
/// User-facing messages are German, matching the service's audience.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input shorter than the minimum, rejected before any model call.
    #[error("Text zu kurz. Bitte geben Sie einen aussagekräftigen Politiktext ein.")]
    TextTooShort,

    /// Upstream provider failure (network, auth, API error).
    #[error("Fehler bei der Analyse: {0}")]
    Provider(#[from] ProviderError),

    /// The model reply was not valid JSON after fence stripping.
    #[error("Fehler beim Parsen der Analyseergebnisse")]
    MalformedReply(#[source] serde_json::Error),

    /// The multi pipeline found nothing; only an error for the single
    /// endpoint.
    #[error("Kein Zielkonflikt im Text identifiziert")]
    NoConflictFound,
}

/// Run the full multi-conflict analysis for one request.
pub async fn analyze_multi(
    provider: &dyn Provider,
    data: &PolicyText,
) -> Result<MultiConflictResponse, AnalysisError> {
    if !data.is_long_enough() {
        return Err(AnalysisError::TextTooShort);
    }

    let request = ChatRequest {
        model: ANALYSIS_MODEL.into(),
        messages: vec![Message::user(prompt::compose_prompt(&data.policy_text))],
        max_tokens: Some(ANALYSIS_MAX_TOKENS),
        temperature: Some(0.0),
    };

    let response = provider.chat(request).await?;

    let parsed = extract::parse_reply(&response.content).map_err(|error| {
        tracing::error!(%error, reply = %response.content, "Model reply is not valid JSON");
        AnalysisError::MalformedReply(error)
    })?;

    let validated = validate::validate_conflicts(&parsed);

    if validated.conflicts.len() < validated.attempted {
        tracing::info!(
            attempted = validated.attempted,
            kept = validated.conflicts.len(),
            "Dropped conflict entries during validation"
        );
    }

    Ok(MultiConflictResponse {
        total_count: validated.conflicts.len(),
        attempted_count: validated.attempted,
        conflicts: validated.conflicts,
    })
}
