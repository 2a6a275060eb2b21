pub mod action;
pub mod config;
pub mod status;
pub mod studio;

pub use action::{ActionKind, ActionRequest};
pub use config::ControlConfig;
pub use status::{DeploymentStatus, DeploymentStatusMap, MessageKind, OrchestratorState};
pub use studio::{find_studio, Accent, Studio, STUDIOS};
