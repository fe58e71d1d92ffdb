pub mod app;
pub mod probe;
pub mod session;
pub mod targets;
pub mod ui;
