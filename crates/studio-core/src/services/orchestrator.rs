use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use crate::error::{ControlError, Result};
use crate::models::{find_studio, ActionKind, ActionRequest, MessageKind, OrchestratorState};
use crate::services::backend::DeploymentBackend;
use crate::services::payload;

/// Sole writer of `OrchestratorState`.
///
/// Every mutation goes through the watch sender, so readers holding a
/// receiver see each completed transition and never a half-applied one.
/// `dispatch_action` and `check_health` are single-flight: a call made while
/// another is outstanding returns `ControlError::Busy` and changes nothing.
pub struct Orchestrator {
    backend: Arc<dyn DeploymentBackend>,
    state: watch::Sender<OrchestratorState>,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn DeploymentBackend>) -> Self {
        let (state, _) = watch::channel(OrchestratorState::default());
        Self { backend, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<OrchestratorState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> OrchestratorState {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy
    }

    /// First status load. Does not mark the orchestrator busy.
    pub async fn initialize(&self) {
        if let Err(e) = self.fetch_statuses().await {
            self.report_refresh_failure(&e);
        }
    }

    /// Replace the status map with the backend's current view.
    ///
    /// On error the existing map is left untouched.
    pub async fn fetch_statuses(&self) -> Result<()> {
        let body = self.backend.status().await?;
        let statuses = payload::parse_statuses(&body)?;
        tracing::debug!(count = statuses.len(), "statuses_replaced");
        self.state.send_modify(|s| s.statuses = statuses);
        Ok(())
    }

    /// Run `action` against `studio`, then refresh statuses.
    ///
    /// Backend failures end up in the status message; the only error returned
    /// is `Busy`.
    pub async fn dispatch_action(&self, studio: &str, action: ActionKind) -> Result<()> {
        self.begin(format!("{} {studio}...", action.verb()))?;
        tracing::info!(studio, %action, "dispatch_action");
        if find_studio(studio).is_none() {
            tracing::warn!(studio, "studio is not in the catalog, sending anyway");
        }

        let request = ActionRequest::new(studio, action);
        let (message, kind) = match self.backend.action(&request).await {
            Ok(body) => payload::action_message(&body),
            Err(e) => {
                tracing::warn!(studio, %action, error = %e, "action_failed");
                (format!("Warning: {e}"), MessageKind::Warning)
            }
        };
        self.state.send_modify(|s| {
            s.status_message = message;
            s.message_kind = kind;
        });

        self.finish().await;
        Ok(())
    }

    /// Probe `/health`, record when it happened, then refresh statuses.
    pub async fn check_health(&self) -> Result<()> {
        self.begin("Checking backend health...".to_string())?;
        tracing::info!("check_health");

        let (message, kind) = match self.backend.health().await {
            Ok(body) => (payload::health_message(&body), MessageKind::Info),
            Err(e) => {
                tracing::warn!(error = %e, "health_check_failed");
                (format!("Warning: Backend unreachable: {e}"), MessageKind::Warning)
            }
        };
        let checked_at = Utc::now();
        self.state.send_modify(|s| {
            s.status_message = message;
            s.message_kind = kind;
            s.last_health_check_at = Some(checked_at);
        });

        self.finish().await;
        Ok(())
    }

    /// Idle -> Busy. Check and set happen under the channel's lock.
    fn begin(&self, message: String) -> Result<()> {
        let started = self.state.send_if_modified(|s| {
            if s.is_busy {
                return false;
            }
            s.is_busy = true;
            s.status_message = message;
            s.message_kind = MessageKind::Progress;
            true
        });
        if started {
            Ok(())
        } else {
            tracing::debug!("rejected_while_busy");
            Err(ControlError::Busy)
        }
    }

    /// Busy -> Idle, after one refresh attempt has completed.
    async fn finish(&self) {
        if let Err(e) = self.fetch_statuses().await {
            self.report_refresh_failure(&e);
        }
        self.state.send_modify(|s| s.is_busy = false);
    }

    /// A refresh failure never replaces a message that is already showing.
    fn report_refresh_failure(&self, error: &ControlError) {
        tracing::warn!(error = %error, "status_update_failed");
        self.state.send_if_modified(|s| {
            if !s.status_message.is_empty() {
                return false;
            }
            s.status_message = format!("Warning: Status update failed: {error}");
            s.message_kind = MessageKind::Warning;
            true
        });
    }
}
