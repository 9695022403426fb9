/// Stateful front for the pure `compute` functions.
///
/// `GameEngine` owns the current round, the RNG used for apple placement
/// and the high-score store.  It is the single writer of game state: the
/// scheduler calls [`GameEngine::tick`], the input handler calls
/// [`GameEngine::set_direction`], and the renderer only reads.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::compute;
use crate::entities::{Difficulty, Direction, GameState, GameStatus, Position, TickOutcome};
use crate::high_score::ScoreStore;

pub struct GameEngine<S, R = StdRng> {
    state: GameState,
    store: S,
    rng: R,
}

impl<S: ScoreStore> GameEngine<S, StdRng> {
    /// Load the stored high score and start a round right away.
    pub fn new(store: S, difficulty: Difficulty) -> Self {
        Self::with_rng(store, difficulty, StdRng::from_entropy())
    }
}

impl<S: ScoreStore, R: Rng> GameEngine<S, R> {
    pub fn with_rng(store: S, difficulty: Difficulty, mut rng: R) -> Self {
        let high_score = store.load();
        let state = compute::init_state(difficulty, high_score, &mut rng);
        tracing::debug!(high_score, "engine ready");
        Self { state, store, rng }
    }

    /// Resume from an explicit state, e.g. a hand-built position in tests.
    pub fn from_state(state: GameState, store: S, rng: R) -> Self {
        Self { state, store, rng }
    }

    /// Start a new round.  The high score carries over.
    pub fn reset(&mut self, difficulty: Difficulty) {
        self.state = compute::init_state(difficulty, self.state.high_score, &mut self.rng);
        tracing::info!(?difficulty, high_score = self.state.high_score, "round started");
    }

    /// Queue a heading for the next tick; reversals are silently dropped.
    pub fn set_direction(&mut self, direction: Direction) {
        self.state = compute::turn(&self.state, direction);
    }

    pub fn tick(&mut self) -> TickOutcome {
        let previous_high = self.state.high_score;
        let (next, outcome) = compute::tick(&self.state, &mut self.rng);
        self.state = next;

        if self.state.high_score > previous_high {
            tracing::debug!(high_score = self.state.high_score, "new high score");
            self.store.save(self.state.high_score);
        }
        match outcome {
            TickOutcome::AteApple => {
                tracing::debug!(score = self.state.score, apple = ?self.state.apple, "apple eaten");
            }
            TickOutcome::GameOver(collision) => {
                tracing::info!(?collision, score = self.state.score, "game over");
            }
            TickOutcome::Idle | TickOutcome::Moved => {}
        }
        outcome
    }

    // ── Read-only accessors ───────────────────────────────────────────────────

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snake(&self) -> &[Position] {
        &self.state.snake
    }

    pub fn apple(&self) -> Position {
        self.state.apple
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    pub fn tick_interval(&self) -> Duration {
        self.state.difficulty.tick_interval()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
