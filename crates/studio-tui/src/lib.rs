pub mod app;
pub mod event;
pub mod keys;
pub mod presenter;
pub mod ui;
