use crate::record::{DimensionKey, Record};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{ParseEnumError, normalize};

/// Lifecycle of a delegated task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

/// A task delegated to a virtual assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub notes: Option<String>,
    pub status: TaskStatus,
    pub assignee: Option<String>,
    /// Owning business entity id.
    pub entity: String,
    pub tags: Vec<String>,
    pub due_at_us: Option<i64>,
    pub created_at_us: i64,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            notes: None,
            status: TaskStatus::Todo,
            assignee: None,
            entity: String::new(),
            tags: Vec::new(),
            due_at_us: None,
            created_at_us: 0,
        }
    }
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn dimension(&self, key: DimensionKey) -> Option<&str> {
        match key {
            DimensionKey::Entity => Some(&self.entity),
            DimensionKey::Status => Some(self.status.as_str()),
            DimensionKey::Assignee => self.assignee.as_deref(),
            _ => None,
        }
    }

    /// Tasks order by due date, falling back to creation time.
    fn sort_timestamp_us(&self) -> i64 {
        self.due_at_us.unwrap_or(self.created_at_us)
    }

    fn engagement(&self) -> u64 {
        0
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(ref notes) = self.notes {
            fields.push(notes.as_str());
        }
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" | "doing" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseEnumError {
                expected: "task status",
                got: s.to_string(),
            }),
        }
    }
}
