use std::path::PathBuf;

/// Settings resolved from the command line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AppSettings {
    pub config_path: Option<PathBuf>,
    pub redraw_every: usize,
}
