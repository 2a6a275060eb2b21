//! Pure mapping from orchestrator state to what the UI draws, plus the
//! intents the UI can raise in return.

use std::sync::Arc;

use chrono::Local;

use studio_core::error::ControlError;
use studio_core::models::{Accent, ActionKind, DeploymentStatus, OrchestratorState, Studio};
use studio_core::services::orchestrator::Orchestrator;

/// One renderable studio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioCard {
    pub identifier: &'static str,
    pub badge: String,
    pub display_name: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub status: DeploymentStatus,
    pub label: &'static str,
    pub disabled: bool,
}

/// Something the operator asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    RequestAction { studio: String, action: ActionKind },
    RequestRefresh,
}

pub fn present(catalog: &[Studio], state: &OrchestratorState) -> Vec<StudioCard> {
    catalog
        .iter()
        .map(|studio| {
            let status = state.statuses.status_of(studio.identifier);
            StudioCard {
                identifier: studio.identifier,
                badge: studio.identifier.to_uppercase(),
                display_name: studio.display_name,
                description: studio.description,
                accent: studio.accent,
                status,
                label: status.label(),
                disabled: state.is_busy,
            }
        })
        .collect()
}

pub fn last_check_label(state: &OrchestratorState) -> String {
    match state.last_health_check_at {
        Some(at) => format!("Last check {}", at.with_timezone(&Local).format("%H:%M")),
        None => "Health check pending".to_string(),
    }
}

/// Hand an intent to the orchestrator on its own task.
///
/// The result reaches the UI through the orchestrator's state channel, so the
/// handle only matters to callers that want to wait for completion.
pub fn forward(intent: Intent, orchestrator: &Arc<Orchestrator>) -> tokio::task::JoinHandle<()> {
    let orchestrator = Arc::clone(orchestrator);
    tokio::spawn(async move {
        let result = match &intent {
            Intent::RequestAction { studio, action } => {
                orchestrator.dispatch_action(studio, *action).await
            }
            Intent::RequestRefresh => orchestrator.check_health().await,
        };
        match result {
            Ok(()) => tracing::debug!(?intent, "intent_completed"),
            Err(ControlError::Busy) => tracing::debug!(?intent, "intent_dropped_busy"),
            Err(e) => tracing::warn!(?intent, error = %e, "intent_failed"),
        }
    })
}
