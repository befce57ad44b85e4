use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Pipeline stage of a task, in board order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    ToDo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses, left to right as the columns are laid out
    pub const ALL: [Status; 3] = [Status::ToDo, Status::InProgress, Status::Done];

    /// Column slot for this status
    pub fn index(self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// One forward step, wrapping Done back to ToDo
    pub fn next(self) -> Self {
        match self {
            Self::ToDo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::ToDo,
        }
    }

    /// One backward step, wrapping ToDo around to Done
    pub fn prev(self) -> Self {
        match self {
            Self::ToDo => Self::Done,
            Self::InProgress => Self::ToDo,
            Self::Done => Self::InProgress,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToDo => write!(f, "To Do"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Done => write!(f, "Done"),
        }
    }
}

impl FromStr for Status {
    type Err = crate::error::KancliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "to_do" | "todo" | "to do" => Ok(Self::ToDo),
            "in_progress" | "in progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(crate::error::KancliError::InvalidStatus(s.to_string())),
        }
    }
}
