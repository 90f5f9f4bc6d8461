use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which key map applies, decided by the focused section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Reading a content section
    Browse,
    /// The game section is focused
    Game,
    /// Typing into the contact form
    Form,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextSection,
    PreviousSection,
    ScrollUp,
    ScrollDown,
    ToggleLanguage,
    ShowResume,
    DismissNotice,
    // Game
    Steer(Direction),
    StartOrPause,
    Restart,
    // Contact form
    EditForm,
    Submit,
    NextField,
    PreviousField,
    LeaveForm,
    Type(char),
    Backspace,
    None,
}

pub fn map_key(key: KeyEvent, mode: InputMode) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match mode {
        InputMode::Form => map_form_key(key),
        InputMode::Game => map_game_key(key),
        InputMode::Browse => map_browse_key(key),
    }
}

fn map_form_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::LeaveForm,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PreviousField,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(c) => KeyAction::Type(c),
        _ => KeyAction::None,
    }
}

fn map_game_key(key: KeyEvent) -> KeyAction {
    // Only W/A/S/D steer; the arrow keys stand in for the on-screen pad
    if let KeyCode::Char(c) = key.code {
        if let Some(direction) = Direction::from_key(c) {
            return KeyAction::Steer(direction);
        }
    }

    match key.code {
        KeyCode::Up => KeyAction::Steer(Direction::Up),
        KeyCode::Down => KeyAction::Steer(Direction::Down),
        KeyCode::Left => KeyAction::Steer(Direction::Left),
        KeyCode::Right => KeyAction::Steer(Direction::Right),
        KeyCode::Char(' ') => KeyAction::StartOrPause,
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
        _ => map_common_key(key),
    }
}

fn map_browse_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => KeyAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::ScrollDown,
        KeyCode::Enter => KeyAction::EditForm,
        _ => map_common_key(key),
    }
}

fn map_common_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Tab => KeyAction::NextSection,
        KeyCode::BackTab => KeyAction::PreviousSection,
        KeyCode::Char('l') | KeyCode::Char('L') => KeyAction::ToggleLanguage,
        KeyCode::Char('v') | KeyCode::Char('V') => KeyAction::ShowResume,
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Esc => KeyAction::DismissNotice,
        _ => KeyAction::None,
    }
}
