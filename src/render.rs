//! Boundary between the board state and whatever draws it
//!
//! A [`Frame`] is a read-only snapshot of everything a renderer needs. The
//! crate ships [`JsonRenderer`], which writes one JSON document per frame;
//! drawing on a real terminal is left to other implementations of
//! [`Renderer`].

use crate::{
    domain::{Board, Status, Task},
    error::Result,
    theme::{Style, Theme, Viewport},
};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct ColumnFrame<'a> {
    pub title: &'a str,
    pub status: Status,
    pub focused: bool,
    pub style: &'a Style,
    pub list_width: u16,
    pub list_height: u16,
    pub selected_index: Option<usize>,
    pub items: &'a [Task],
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Frame<'a> {
    /// Nothing has been seeded yet
    Loading,
    Board {
        focused: Status,
        columns: Vec<ColumnFrame<'a>>,
    },
}

impl<'a> Frame<'a> {
    pub fn board(board: &'a Board, theme: &'a Theme, viewport: Viewport) -> Self {
        let (list_width, list_height) = viewport.list_size(theme);
        let columns = board
            .columns()
            .iter()
            .map(|column| {
                let focused = column.status() == board.focused();
                ColumnFrame {
                    title: column.title(),
                    status: column.status(),
                    focused,
                    style: theme.style_for(focused),
                    list_width,
                    list_height,
                    selected_index: column.selected_index(),
                    items: column.items(),
                }
            })
            .collect();

        Frame::Board {
            focused: board.focused(),
            columns,
        }
    }
}

pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Writes each frame as a single line of JSON
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
