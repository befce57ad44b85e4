use crate::{
    domain::{column::Column, status::Status, task::Task},
    error::Result,
    seed::Seed,
};
use serde::{Deserialize, Serialize};

/// Column titles for the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub to_do: String,
    pub in_progress: String,
    pub done: String,
}

impl BoardConfig {
    pub fn title_for(&self, status: Status) -> &str {
        match status {
            Status::ToDo => &self.to_do,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            to_do: Status::ToDo.to_string(),
            in_progress: Status::InProgress.to_string(),
            done: Status::Done.to_string(),
        }
    }
}

/// Result of a successful activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub title: String,
    pub from: Status,
    pub to: Status,
    pub from_index: usize,
}

/// The three columns and which one has focus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: [Column; 3],
    focused: Status,
}

impl Board {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            columns: Status::ALL.map(|status| Column::new(config.title_for(status), status)),
            focused: Status::ToDo,
        }
    }

    /// Appends seed tasks to the column of their status, in order
    pub fn load_seed(&mut self, seed: Seed) {
        for task in seed.tasks {
            self.columns[task.status().index()].push(task);
        }
    }

    pub fn focused(&self) -> Status {
        self.focused
    }

    pub fn columns(&self) -> &[Column; 3] {
        &self.columns
    }

    pub fn column(&self, status: Status) -> &Column {
        &self.columns[status.index()]
    }

    pub fn focused_column(&self) -> &Column {
        self.column(self.focused)
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
        tracing::debug!(focused = %self.focused, "focus moved right");
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
        tracing::debug!(focused = %self.focused, "focus moved left");
    }

    /// Places the cursor of the focused column
    pub fn select(&mut self, index: usize) {
        self.columns[self.focused.index()].set_selected_index(index);
    }

    /// Promotes the focused column's selected task to the next status
    ///
    /// The task is removed from its column and inserted at the front of the
    /// destination column. Returns `Ok(None)` without touching anything when
    /// the focused column is empty.
    pub fn activate(&mut self) -> Result<Option<Promotion>> {
        let from = self.focused;
        let Some(index) = self.columns[from.index()].selected_index() else {
            return Ok(None);
        };

        let mut task = self.columns[from.index()].remove_at(index)?;
        let to = task.next_status();

        if to == task.status() {
            // Unreachable with a three-state cycle; put the task back untouched
            self.columns[from.index()].insert_at(index, task);
            return Ok(None);
        }

        let title = task.title().to_string();
        task.set_status(to);
        self.columns[to.index()].insert_at(0, task);

        tracing::info!(task = %title, %from, %to, "task promoted");
        Ok(Some(Promotion {
            title,
            from,
            to,
            from_index: index,
        }))
    }

    /// Every task and its column's status, for invariant checks
    pub fn tasks(&self) -> impl Iterator<Item = (Status, &Task)> {
        self.columns
            .iter()
            .flat_map(|column| column.items().iter().map(move |task| (column.status(), task)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(tasks: &[(Status, &str)]) -> Board {
        let mut board = Board::default();
        board.load_seed(Seed {
            tasks: tasks
                .iter()
                .map(|(status, title)| Task::new(*status, *title, ""))
                .collect(),
        });
        board
    }

    fn titles(board: &Board, status: Status) -> Vec<&str> {
        board.column(status).items().iter().map(|t| t.title()).collect()
    }

    fn assert_invariants(board: &Board) {
        for (status, task) in board.tasks() {
            assert_eq!(task.status(), status);
        }
        for column in board.columns() {
            match column.selected_index() {
                None => assert!(column.is_empty()),
                Some(i) => assert!(i < column.len()),
            }
        }
    }

    #[test]
    fn test_board_creation() {
        let board = Board::default();
        assert_eq!(board.focused(), Status::ToDo);
        assert_eq!(board.column(Status::ToDo).title(), "To Do");
        assert_eq!(board.column(Status::InProgress).title(), "In Progress");
        assert_eq!(board.column(Status::Done).title(), "Done");
        for status in Status::ALL {
            assert_eq!(board.column(status).status(), status);
            assert!(board.column(status).is_empty());
        }
    }

    #[test]
    fn test_custom_titles() {
        let config = BoardConfig {
            to_do: "Backlog".to_string(),
            ..BoardConfig::default()
        };
        let board = Board::new(&config);
        assert_eq!(board.column(Status::ToDo).title(), "Backlog");
    }

    #[test]
    fn test_load_seed_preserves_order() {
        let board = seeded(&[
            (Status::ToDo, "A"),
            (Status::Done, "X"),
            (Status::ToDo, "B"),
        ]);

        assert_eq!(titles(&board, Status::ToDo), vec!["A", "B"]);
        assert_eq!(titles(&board, Status::Done), vec!["X"]);
        assert_eq!(board.column(Status::ToDo).selected_index(), Some(0));
        assert_eq!(board.column(Status::InProgress).selected_index(), None);
        assert_invariants(&board);
    }

    #[test]
    fn test_focus_cycle() {
        let mut board = Board::default();
        for start in Status::ALL {
            while board.focused() != start {
                board.focus_next();
            }
            board.focus_next();
            board.focus_next();
            board.focus_next();
            assert_eq!(board.focused(), start);

            board.focus_next();
            board.focus_prev();
            assert_eq!(board.focused(), start);
        }
    }

    #[test]
    fn test_focus_prev_wraps() {
        let mut board = Board::default();
        board.focus_prev();
        assert_eq!(board.focused(), Status::Done);
    }

    #[test]
    fn test_activate_moves_to_front_of_next_column() {
        let mut board = seeded(&[
            (Status::ToDo, "A"),
            (Status::ToDo, "B"),
            (Status::ToDo, "C"),
        ]);

        let promotion = board.activate().unwrap().unwrap();

        assert_eq!(promotion.title, "A");
        assert_eq!(promotion.from, Status::ToDo);
        assert_eq!(promotion.to, Status::InProgress);
        assert_eq!(promotion.from_index, 0);
        assert_eq!(titles(&board, Status::ToDo), vec!["B", "C"]);
        assert_eq!(titles(&board, Status::InProgress), vec!["A"]);
        assert_eq!(
            board.column(Status::InProgress).items()[0].status(),
            Status::InProgress
        );
        assert_eq!(board.column(Status::ToDo).selected().unwrap().title(), "B");
        assert_invariants(&board);
    }

    #[test]
    fn test_activate_done_wraps_to_front_of_to_do() {
        let mut board = seeded(&[
            (Status::ToDo, "A"),
            (Status::ToDo, "B"),
            (Status::Done, "X"),
        ]);
        board.focus_prev();
        assert_eq!(board.focused(), Status::Done);

        board.activate().unwrap();

        assert!(board.column(Status::Done).is_empty());
        assert_eq!(board.column(Status::Done).selected_index(), None);
        assert_eq!(titles(&board, Status::ToDo), vec!["X", "A", "B"]);
        assert_eq!(board.column(Status::ToDo).items()[0].status(), Status::ToDo);
        assert_invariants(&board);
    }

    #[test]
    fn test_activate_keeps_destination_cursor() {
        let mut board = seeded(&[
            (Status::ToDo, "A"),
            (Status::InProgress, "P"),
            (Status::InProgress, "Q"),
        ]);
        board.focus_next();
        board.select(1);
        board.focus_prev();

        board.activate().unwrap();

        assert_eq!(titles(&board, Status::InProgress), vec!["A", "P", "Q"]);
        assert_eq!(board.column(Status::InProgress).selected_index(), Some(1));
        assert_invariants(&board);
    }

    #[test]
    fn test_activate_last_selected_clamps() {
        let mut board = seeded(&[
            (Status::ToDo, "A"),
            (Status::ToDo, "B"),
            (Status::ToDo, "C"),
        ]);
        board.select(2);

        board.activate().unwrap();

        assert_eq!(board.column(Status::ToDo).selected_index(), Some(1));
        assert_eq!(board.column(Status::ToDo).selected().unwrap().title(), "B");
    }

    #[test]
    fn test_round_trip_after_three_activations() {
        let mut board = seeded(&[(Status::ToDo, "A"), (Status::ToDo, "B")]);

        board.activate().unwrap();
        board.focus_next();
        board.activate().unwrap();
        board.focus_next();
        board.activate().unwrap();

        assert_eq!(titles(&board, Status::ToDo), vec!["A", "B"]);
        assert!(board.column(Status::InProgress).is_empty());
        assert!(board.column(Status::Done).is_empty());
        assert_invariants(&board);
    }

    #[test]
    fn test_activate_empty_column_is_noop() {
        let mut board = seeded(&[(Status::ToDo, "A"), (Status::Done, "X")]);
        board.focus_next();
        let before = board.clone();

        let promotion = board.activate().unwrap();

        assert!(promotion.is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn test_invariants_hold_over_many_commands() {
        let mut board = seeded(&[
            (Status::ToDo, "Buy Milk"),
            (Status::ToDo, "Eat Sushi"),
            (Status::InProgress, "Write Code"),
            (Status::Done, "Stay Cool"),
        ]);

        for step in 0..30 {
            match step % 4 {
                0 => board.focus_next(),
                1 => {
                    board.activate().unwrap();
                }
                2 => board.select(step),
                _ => board.focus_prev(),
            }
            assert_invariants(&board);
        }
        assert_eq!(board.tasks().count(), 4);
    }
}
