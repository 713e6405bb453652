use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub details: String,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_done: false,
            details: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub auto_delete_done: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: default_language(),
            auto_delete_done: false,
        }
    }
}

impl Settings {
    /// Returns a copy with `language` trimmed, lowercased and restricted to the
    /// supported values.
    pub fn normalized(mut self) -> Self {
        let language = self.language.trim().to_lowercase();
        self.language = match language.as_str() {
            "auto" | "pt" | "en" => language,
            _ => default_language(),
        };
        self
    }
}

fn default_language() -> String {
    "auto".to_string()
}
