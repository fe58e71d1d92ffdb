mod common;
mod features;

pub mod app;
pub mod config;
pub mod data_model;
pub mod input;
pub mod logging;
pub mod lookup;
pub mod probe;
pub mod probe_engine;
pub mod session;
pub mod settings;
pub mod storage;
pub mod ui;
