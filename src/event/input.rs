//! Key event mapping for the input line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Insert(char),
    Backspace,
    /// Enter: run the command, or apply the directory prompt.
    Submit,
    HistoryUp,
    HistoryDown,
    NewTab,
    CloseTab,
    NextTab,
    PrevTab,
    /// Zero-based tab index.
    SelectTab(usize),
    /// Open the working directory prompt.
    PromptDirectory,
    /// Leave the directory prompt.
    Cancel,
    Quit,
    Ignore,
}

/// Converts a crossterm key event to a [`KeyAction`].
pub fn key_action(key_event: &KeyEvent) -> KeyAction {
    let KeyEvent { code, modifiers, .. } = *key_event;

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    match code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'q' | 'c' => KeyAction::Quit,
            't' => KeyAction::NewTab,
            'w' => KeyAction::CloseTab,
            'o' => KeyAction::PromptDirectory,
            _ => KeyAction::Ignore,
        },
        // Alt+1..Alt+9
        KeyCode::Char(c) if alt => match c.to_digit(10) {
            Some(n) if n >= 1 => KeyAction::SelectTab(n as usize - 1),
            _ => KeyAction::Ignore,
        },
        KeyCode::Char(c) => KeyAction::Insert(c),
        KeyCode::Right if ctrl => KeyAction::NextTab,
        KeyCode::Left if ctrl => KeyAction::PrevTab,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Up => KeyAction::HistoryUp,
        KeyCode::Down => KeyAction::HistoryDown,
        KeyCode::Esc => KeyAction::Cancel,
        _ => KeyAction::Ignore,
    }
}
