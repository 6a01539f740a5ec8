use crossterm::tty::IsTty;
use std::path::PathBuf;

pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Runtime settings. The session takes no flags, so these come from defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backing file, relative to the working directory unless absolute.
    pub tasks_file: PathBuf,
    /// Style success and error lines with terminal colours.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            color: std::io::stdout().is_tty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_working_directory_file() {
        let config = Config::default();
        assert_eq!(config.tasks_file, PathBuf::from("tasks.json"));
        assert!(config.tasks_file.is_relative());
    }
}
