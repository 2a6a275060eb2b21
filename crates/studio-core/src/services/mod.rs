pub mod backend;
pub mod config_loader;
pub mod orchestrator;
pub mod payload;
