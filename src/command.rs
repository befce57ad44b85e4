use crate::error::KancliError;
use std::str::FromStr;

/// Cursor input forwarded to the focused column's list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListInput {
    Up,
    Down,
    Top,
    Bottom,
}

/// Semantic commands the controller understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    FocusPrev,
    FocusNext,
    Activate,
    Resize { width: u16, height: u16 },
    List(ListInput),
}

impl FromStr for Command {
    type Err = KancliError;

    /// Parses a key name (`q`, `left`, `enter`, ...) or `resize W H`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let command = match s {
            "ctrl+c" | "q" => Command::Quit,
            "left" | "h" => Command::FocusPrev,
            "right" | "l" => Command::FocusNext,
            "enter" => Command::Activate,
            "up" | "k" => Command::List(ListInput::Up),
            "down" | "j" => Command::List(ListInput::Down),
            "home" | "g" => Command::List(ListInput::Top),
            "end" | "G" => Command::List(ListInput::Bottom),
            _ => return parse_resize(s),
        };
        Ok(command)
    }
}

fn parse_resize(s: &str) -> Result<Command, KancliError> {
    let unknown = || KancliError::UnknownCommand(s.to_string());

    let mut parts = s.split_whitespace();
    if parts.next() != Some("resize") {
        return Err(unknown());
    }
    let width = parts.next().and_then(|w| w.parse().ok()).ok_or_else(unknown)?;
    let height = parts.next().and_then(|h| h.parse().ok()).ok_or_else(unknown)?;
    if parts.next().is_some() {
        return Err(unknown());
    }
    Ok(Command::Resize { width, height })
}
