//! Listener input mapped to player commands

use crossterm::event::KeyCode;

/// Commands the UI applies to the player
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlMessage {
    TogglePlayback,
    Next,
    Prev,
    VolumeUp,
    VolumeDown,
    /// Select by catalog position (0-based)
    Select(usize),
    /// Select whatever the list highlight is on
    SelectHighlighted,
    HighlightUp,
    HighlightDown,
    ScrubForward,
    ScrubBack,
    Quit,
}

/// Volume change per key press
pub const VOLUME_STEP: f32 = 0.05;

/// Scrub distance per key press, in percent
pub const SCRUB_STEP: f32 = 5.0;

pub fn map_key(code: KeyCode) -> Option<ControlMessage> {
    let msg = match code {
        KeyCode::Char(' ') => ControlMessage::TogglePlayback,
        KeyCode::Char('n') | KeyCode::Right => ControlMessage::Next,
        KeyCode::Char('p') | KeyCode::Left => ControlMessage::Prev,
        KeyCode::Up | KeyCode::Char('+') => ControlMessage::VolumeUp,
        KeyCode::Down | KeyCode::Char('-') => ControlMessage::VolumeDown,
        KeyCode::Char(c @ '1'..='6') => ControlMessage::Select(c as usize - '1' as usize),
        KeyCode::Enter => ControlMessage::SelectHighlighted,
        KeyCode::Char('k') => ControlMessage::HighlightUp,
        KeyCode::Char('j') => ControlMessage::HighlightDown,
        KeyCode::Char(']') => ControlMessage::ScrubForward,
        KeyCode::Char('[') => ControlMessage::ScrubBack,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ControlMessage::Quit,
        _ => return None,
    };
    Some(msg)
}
