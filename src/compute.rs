/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    Collision, Difficulty, Direction, GameState, GameStatus, Position, TickOutcome, GRID_HEIGHT,
    GRID_WIDTH, INITIAL_LENGTH,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh round: a horizontal snake centred on the grid, heading
/// right, score zero, apple placed at random.
pub fn init_state(difficulty: Difficulty, high_score: u32, rng: &mut impl Rng) -> GameState {
    let head = Position::new(GRID_WIDTH / 2, GRID_HEIGHT / 2);
    let snake = (0..INITIAL_LENGTH as i32)
        .map(|i| Position::new(head.x - i, head.y))
        .collect();

    GameState {
        snake,
        heading: Direction::Right,
        pending: Direction::Right,
        apple: spawn_apple(GRID_WIDTH, GRID_HEIGHT, rng),
        score: 0,
        high_score,
        difficulty,
        status: GameStatus::Running,
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
    }
}

/// Pick a uniformly random cell.  The snake's body is not excluded.
pub fn spawn_apple(width: i32, height: i32, rng: &mut impl Rng) -> Position {
    Position::new(rng.gen_range(0..width), rng.gen_range(0..height))
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Queue a new heading for the next tick.  A request to reverse the heading
/// the snake is actually travelling in is ignored.
pub fn turn(state: &GameState, direction: Direction) -> GameState {
    if direction.is_opposite(state.heading) {
        return state.clone();
    }
    GameState {
        pending: direction,
        ..state.clone()
    }
}

// ── Per-tick update (nearly pure — RNG is injected) ─────────────────────────

/// Advance the round by one cell.  All randomness comes through `rng` so
/// callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, rng: &mut impl Rng) -> (GameState, TickOutcome) {
    if !state.is_running() || state.is_empty() {
        return (state.clone(), TickOutcome::Idle);
    }

    // ── 1. Move: new head in front, every segment takes its predecessor's cell
    let heading = state.pending;
    let new_head = state.head().step(heading);
    let mut snake = Vec::with_capacity(state.snake.len() + 1);
    snake.push(new_head);
    snake.extend_from_slice(&state.snake[..state.snake.len() - 1]);
    let old_tail = state.snake[state.snake.len() - 1];

    // ── 2. Apple: grow back onto the vacated tail cell ───────────────────────
    let mut score = state.score;
    let mut high_score = state.high_score;
    let mut apple = state.apple;
    let ate = new_head == state.apple;
    if ate {
        snake.push(old_tail);
        score += 1;
        high_score = high_score.max(score);
        apple = spawn_apple(state.width, state.height, rng);
    }

    let next = GameState {
        snake,
        heading,
        pending: heading,
        apple,
        score,
        high_score,
        ..state.clone()
    };

    // ── 3. Collisions ────────────────────────────────────────────────────────
    match detect_collision(&next, old_tail) {
        Some(collision) => (
            GameState {
                status: GameStatus::GameOver,
                ..next
            },
            TickOutcome::GameOver(collision),
        ),
        None if ate => (next, TickOutcome::AteApple),
        None => (next, TickOutcome::Moved),
    }
}

/// Body hits are checked before walls, matching the order the round ends in.
///
/// `vacated` is the cell the tail left this tick.  It still counts as body:
/// a head that steps into it ends the round.
pub fn detect_collision(state: &GameState, vacated: Position) -> Option<Collision> {
    let (&head, body) = state.snake.split_first()?;
    if body.contains(&head) || head == vacated {
        Some(Collision::Body)
    } else if !state.in_bounds(head) {
        Some(Collision::Wall)
    } else {
        None
    }
}
