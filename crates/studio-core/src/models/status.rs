use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// What the backend last reported for a studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentStatus {
    Deployed,
    NotDeployed,
    Unknown,
}

impl DeploymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            DeploymentStatus::Deployed => "Deployed",
            DeploymentStatus::NotDeployed => "Not deployed",
            DeploymentStatus::Unknown => "Status unknown",
        }
    }
}

impl From<Option<bool>> for DeploymentStatus {
    fn from(deployed: Option<bool>) -> Self {
        match deployed {
            Some(true) => DeploymentStatus::Deployed,
            Some(false) => DeploymentStatus::NotDeployed,
            None => DeploymentStatus::Unknown,
        }
    }
}

/// Studio identifier to deployed flag, as of the last completed status fetch.
///
/// Studios missing from the map are `Unknown`. The map is only ever replaced
/// as a whole; there is no per-entry update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentStatusMap {
    entries: HashMap<String, bool>,
}

impl DeploymentStatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_of(&self, identifier: &str) -> DeploymentStatus {
        self.entries.get(identifier).copied().into()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, bool)> for DeploymentStatusMap {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// How the current status message should be read.
///
/// Set by whoever writes the message, so presentation never has to guess from
/// the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Info,
    Progress,
    Warning,
    /// The backend answered, but reported a failure of its own.
    Error,
}

/// Everything the UI shows that comes from the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrchestratorState {
    pub status_message: String,
    pub message_kind: MessageKind,
    pub is_busy: bool,
    pub last_health_check_at: Option<DateTime<Utc>>,
    pub statuses: DeploymentStatusMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(DeploymentStatus::Deployed.label(), "Deployed");
        assert_eq!(DeploymentStatus::NotDeployed.label(), "Not deployed");
        assert_eq!(DeploymentStatus::Unknown.label(), "Status unknown");
    }

    #[test]
    fn absent_studio_is_unknown() {
        let map: DeploymentStatusMap = [("audio".to_string(), true), ("3d".to_string(), false)]
            .into_iter()
            .collect();
        assert_eq!(map.status_of("audio"), DeploymentStatus::Deployed);
        assert_eq!(map.status_of("3d"), DeploymentStatus::NotDeployed);
        assert_eq!(map.status_of("video"), DeploymentStatus::Unknown);
    }

    #[test]
    fn initial_state_is_idle_and_empty() {
        let state = OrchestratorState::default();
        assert!(!state.is_busy);
        assert!(state.status_message.is_empty());
        assert_eq!(state.message_kind, MessageKind::Info);
        assert!(state.last_health_check_at.is_none());
        assert!(state.statuses.is_empty());
    }
}
