//! Turns the command stream into board operations
//!
//! The controller is the only caller of the board's mutating methods. It
//! holds back every column-dependent command until the first resize has
//! seeded the board, and seeds at most once no matter how many resizes
//! arrive.

use crate::{
    command::{Command, ListInput},
    domain::{Board, BoardConfig},
    error::Result,
    render::Frame,
    seed::Seed,
    theme::{Theme, Viewport},
};

/// What the driver should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// State changed; draw a new frame
    Render,
    /// Nothing changed
    Idle,
    Quit,
}

pub struct Controller {
    board: Board,
    seed: Option<Seed>,
    viewport: Option<Viewport>,
    loaded: bool,
    quitting: bool,
}

impl Controller {
    pub fn new(config: &BoardConfig, seed: Seed) -> Self {
        Self {
            board: Board::new(config),
            seed: Some(seed),
            viewport: None,
            loaded: false,
            quitting: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        let flow = match command {
            Command::Quit => {
                self.quitting = true;
                Flow::Quit
            }
            Command::Resize { width, height } => {
                self.resize(width, height);
                Flow::Render
            }
            _ if !self.loaded => {
                tracing::debug!(?command, "board not loaded yet, ignoring");
                Flow::Idle
            }
            Command::FocusPrev => {
                self.board.focus_prev();
                Flow::Render
            }
            Command::FocusNext => {
                self.board.focus_next();
                Flow::Render
            }
            Command::Activate => match self.board.activate()? {
                Some(_) => Flow::Render,
                None => Flow::Idle,
            },
            Command::List(input) => self.move_cursor(input),
        };
        Ok(flow)
    }

    /// Snapshot for the renderer; `None` once quitting
    pub fn frame<'a>(&'a self, theme: &'a Theme) -> Option<Frame<'a>> {
        if self.quitting {
            return None;
        }
        match (self.loaded, self.viewport) {
            (true, Some(viewport)) => Some(Frame::board(&self.board, theme, viewport)),
            _ => Some(Frame::Loading),
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Some(Viewport::new(width, height));
        if let Some(seed) = self.seed.take() {
            tracing::info!(tasks = seed.tasks.len(), width, height, "seeding board");
            self.board.load_seed(seed);
            self.loaded = true;
        }
    }

    fn move_cursor(&mut self, input: ListInput) -> Flow {
        let column = self.board.focused_column();
        let Some(current) = column.selected_index() else {
            return Flow::Idle;
        };
        let last = column.len() - 1;
        let target = match input {
            ListInput::Up => current.saturating_sub(1),
            ListInput::Down => (current + 1).min(last),
            ListInput::Top => 0,
            ListInput::Bottom => last,
        };
        if target == current {
            return Flow::Idle;
        }
        self.board.select(target);
        Flow::Render
    }
}
