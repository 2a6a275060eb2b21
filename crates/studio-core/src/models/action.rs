use serde::Serialize;

/// Lifecycle action the backend can run against a studio.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Apply,
    Destroy,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Apply => "apply",
            ActionKind::Destroy => "destroy",
        }
    }

    /// Progressive verb shown while the action is in flight.
    pub fn verb(self) -> &'static str {
        match self {
            ActionKind::Apply => "Deploying",
            ActionKind::Destroy => "Destroying",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /action`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActionRequest {
    pub studio: String,
    pub action: ActionKind,
}

impl ActionRequest {
    pub fn new(studio: impl Into<String>, action: ActionKind) -> Self {
        Self {
            studio: studio.into(),
            action,
        }
    }
}
