//! To-do data shapes.

use serde::{Deserialize, Serialize};

/// A locally editable task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub editing: bool,
}

impl Task {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            editing: false,
        }
    }
}

/// A task as delivered by a remote source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFromFetch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_task_optional_fields() {
        let task: TaskFromFetch = toml::from_str(
            r#"
            id = "a1"
            name = "Water plants"
            "#,
        )
        .unwrap();
        assert_eq!(task.description, "");
        assert!(!task.done);
    }
}
