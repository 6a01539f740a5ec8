use chrono::Local;
use serde::{Deserialize, Serialize};

/// Format used for `created_at` and `completed_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    /// Empty when a hand-edited record left it out.
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl Task {
    pub fn new(id: u32, title: String, description: String, created_at: String) -> Self {
        Self {
            id,
            title,
            description,
            done: false,
            created_at,
            completed_at: None,
        }
    }

    /// Glyph shown in listings: `✓` once done, `○` while pending.
    pub fn status_glyph(&self) -> char {
        if self.done {
            '✓'
        } else {
            '○'
        }
    }
}

fn untitled() -> String {
    "Untitled".to_string()
}

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
