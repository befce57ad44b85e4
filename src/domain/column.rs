use crate::{
    domain::{status::Status, task::Task},
    error::{KancliError, Result},
};
use serde::Serialize;

/// One status bucket of the board with its selection cursor
///
/// `selected` is `None` exactly when `items` is empty, otherwise it is a
/// valid index into `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    title: String,
    status: Status,
    items: Vec<Task>,
    selected: Option<usize>,
}

impl Column {
    pub fn new(title: impl Into<String>, status: Status) -> Self {
        Self {
            title: title.into(),
            status,
            items: Vec::new(),
            selected: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The task under the cursor, if any
    pub fn selected(&self) -> Option<&Task> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Inserts a task, clamping `index` into `[0, len]`
    ///
    /// The cursor keeps its index unless the column was empty, in which case
    /// the inserted task becomes selected. The caller is responsible for the
    /// task's status matching this column.
    pub fn insert_at(&mut self, index: usize, task: Task) {
        debug_assert_eq!(task.status(), self.status);

        let index = index.min(self.items.len());
        self.items.insert(index, task);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
    }

    /// Removes and returns the task at `index`
    ///
    /// The cursor keeps its index, clamped to the new last item, and becomes
    /// `None` when the column empties.
    pub fn remove_at(&mut self, index: usize) -> Result<Task> {
        if index >= self.items.len() {
            return Err(KancliError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }

        let task = self.items.remove(index);
        self.selected = match self.items.len() {
            0 => None,
            len => self.selected.map(|selected| selected.min(len - 1)),
        };
        Ok(task)
    }

    /// Moves the cursor, clamped to the last item; ignored on an empty column
    pub fn set_selected_index(&mut self, index: usize) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.selected = Some(index.min(last));
        }
    }

    pub(crate) fn push(&mut self, task: Task) {
        let index = self.items.len();
        self.insert_at(index, task);
    }
}
