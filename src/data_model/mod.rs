pub mod settings;
pub mod target;
