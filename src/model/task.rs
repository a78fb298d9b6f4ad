use serde::{Deserialize, Serialize};

/// A single task owned by a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier, unique within the owning category
    pub id: String,
    /// Task label (never empty, never edited after creation)
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

impl Task {
    /// Create a new, not-yet-completed task
    pub fn new(id: String, text: String, created_at: i64) -> Self {
        Task {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// The character shown inside the `[ ]` checkbox
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

/// Direction for reordering a task within its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}
