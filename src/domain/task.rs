use crate::domain::status::Status;
use serde::{Deserialize, Serialize};

/// A card on the board
///
/// A task has no identifier of its own. It lives in exactly one column at a
/// time and its status always matches that column's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    status: Status,
    title: String,
    #[serde(default)]
    description: String,
}

impl Task {
    pub fn new(status: Status, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Status this task would have after one activation
    pub fn next_status(&self) -> Status {
        self.status.next()
    }

    /// Text a list filter matches against
    pub fn filter_value(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
