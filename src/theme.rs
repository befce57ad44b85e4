//! Styling values handed to the renderer
//!
//! A [`Theme`] is built once at startup (defaults or config file) and only
//! ever read afterwards.

use serde::{Deserialize, Serialize};

/// Border drawn around a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderKind {
    Normal,
    Rounded,
    Thick,
    Double,
}

/// Box style of a single element
///
/// Colours are 256-colour palette indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub padding_vertical: u16,
    pub padding_horizontal: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_foreground: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<u8>,
}

impl Style {
    pub fn padded(vertical: u16, horizontal: u16) -> Self {
        Self {
            padding_vertical: vertical,
            padding_horizontal: horizontal,
            ..Self::default()
        }
    }

    pub fn with_border(mut self, border: BorderKind, color: u8) -> Self {
        self.border = Some(border);
        self.border_foreground = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: u8) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Cells taken up by padding and border, as (width, height)
    pub fn frame_size(&self) -> (u16, u16) {
        let border = if self.border.is_some() { 2 } else { 0 };
        (
            self.padding_horizontal * 2 + border,
            self.padding_vertical * 2 + border,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub column: Style,
    pub focused: Style,
    pub help: Style,
}

impl Theme {
    pub fn style_for(&self, focused: bool) -> &Style {
        if focused {
            &self.focused
        } else {
            &self.column
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            column: Style::padded(1, 2),
            focused: Style::padded(1, 2).with_border(BorderKind::Rounded, 62),
            help: Style::default().with_foreground(241),
        }
    }
}

/// Terminal size reported by the last resize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Space left for a column's list once the unfocused frame is taken off
    pub fn list_size(&self, theme: &Theme) -> (u16, u16) {
        let (frame_width, frame_height) = theme.column.frame_size();
        (
            self.width.saturating_sub(frame_width),
            self.height.saturating_sub(frame_height) / 2,
        )
    }
}
