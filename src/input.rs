/// Key mapping.  Only the four arrow keys steer the snake; everything else
/// is either a menu / game-over control or ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::entities::{Difficulty, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    PlayAgain,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Up => Command::Turn(Direction::Up),
        KeyCode::Down => Command::Turn(Direction::Down),
        KeyCode::Left => Command::Turn(Direction::Left),
        KeyCode::Right => Command::Turn(Direction::Right),
        KeyCode::Char('r') | KeyCode::Char('R') => Command::PlayAgain,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => Command::None,
    }
}

// ── Difficulty menu ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Start(Difficulty),
    Quit,
}

/// Cursor state of the difficulty menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyMenu {
    pub selected: Difficulty,
}

impl Default for DifficultyMenu {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl DifficultyMenu {
    pub fn new(selected: Difficulty) -> Self {
        Self { selected }
    }

    /// Feed one key.  `Some` once the player has decided.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<MenuChoice> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(MenuChoice::Quit);
        }
        let index = Difficulty::ALL
            .iter()
            .position(|d| *d == self.selected)
            .unwrap_or(1);
        match key.code {
            KeyCode::Char('1') => Some(MenuChoice::Start(Difficulty::Easy)),
            KeyCode::Char('2') => Some(MenuChoice::Start(Difficulty::Medium)),
            KeyCode::Char('3') => Some(MenuChoice::Start(Difficulty::Hard)),
            KeyCode::Up => {
                self.selected = Difficulty::ALL[index.saturating_sub(1)];
                None
            }
            KeyCode::Down => {
                self.selected = Difficulty::ALL[(index + 1).min(Difficulty::ALL.len() - 1)];
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(MenuChoice::Start(self.selected)),
            // Dismissing the menu falls back to the default difficulty
            KeyCode::Esc => Some(MenuChoice::Start(Difficulty::default())),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}
