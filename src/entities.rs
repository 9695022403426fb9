/// All game entity types — pure data, no logic beyond small helpers.

use std::time::Duration;

// ── Field geometry ────────────────────────────────────────────────────────────

/// Playing field size in screen units.
pub const FIELD_WIDTH: i32 = 600;
pub const FIELD_HEIGHT: i32 = 600;
/// Side length of one grid cell in screen units.
pub const UNIT_SIZE: i32 = 25;

/// Grid size in cells (600 / 25 = 24).
pub const GRID_WIDTH: i32 = FIELD_WIDTH / UNIT_SIZE;
pub const GRID_HEIGHT: i32 = FIELD_HEIGHT / UNIT_SIZE;

/// Number of body segments a fresh snake starts with.
pub const INITIAL_LENGTH: usize = 6;

// ── Grid coordinates ──────────────────────────────────────────────────────────

/// A cell on the grid, in cell units.  `(0, 0)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// `(dx, dy)` in cells; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

// ── Difficulty ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Menu order; the middle entry is the default choice.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Time between two ticks.
    pub fn tick_interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(150),
            Difficulty::Medium => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(50),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

// ── Round status ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What ended a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The round is already over; nothing moved.
    Idle,
    Moved,
    AteApple,
    GameOver(Collision),
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire state of one round.  Cloneable so the pure update functions
/// in `compute` can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Body segments, head at index 0.
    pub snake: Vec<Position>,
    /// Heading applied by the most recent tick.
    pub heading: Direction,
    /// Heading the next tick will apply.
    pub pending: Direction,
    pub apple: Position,
    pub score: u32,
    /// Best score seen so far, including earlier rounds and sessions.
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub status: GameStatus,
    pub width: i32,
    pub height: i32,
}

impl GameState {
    /// Panics on an empty snake; `compute::tick` never produces one.
    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
