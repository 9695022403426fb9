use snake_game::compute::*;
use snake_game::entities::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fresh-round layout with the apple parked out of the way.
fn make_state() -> GameState {
    GameState {
        snake: (0..6).map(|i| Position::new(12 - i, 12)).collect(),
        heading: Direction::Right,
        pending: Direction::Right,
        apple: Position::new(0, 0),
        score: 0,
        high_score: 0,
        difficulty: Difficulty::Medium,
        status: GameStatus::Running,
        width: 24,
        height: 24,
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_centres_a_horizontal_snake() {
    let s = init_state(Difficulty::Easy, 0, &mut seeded_rng());
    assert_eq!(s.len(), 6);
    assert_eq!(s.head(), Position::new(12, 12));
    for (i, segment) in s.snake.iter().enumerate() {
        assert_eq!(*segment, Position::new(12 - i as i32, 12));
    }
    assert_eq!(s.heading, Direction::Right);
    assert_eq!(s.pending, Direction::Right);
}

#[test]
fn init_state_starts_running_with_zero_score() {
    let s = init_state(Difficulty::Hard, 17, &mut seeded_rng());
    assert_eq!(s.status, GameStatus::Running);
    assert_eq!(s.score, 0);
    assert_eq!(s.high_score, 17);
    assert_eq!(s.difficulty, Difficulty::Hard);
    assert!(s.in_bounds(s.apple));
}

#[test]
fn spawn_apple_stays_on_the_grid() {
    let mut rng = seeded_rng();
    for _ in 0..1000 {
        let apple = spawn_apple(24, 24, &mut rng);
        assert!((0..24).contains(&apple.x));
        assert!((0..24).contains(&apple.y));
    }
}

// ── turn ──────────────────────────────────────────────────────────────────────

#[test]
fn turn_queues_a_perpendicular_heading() {
    let s = turn(&make_state(), Direction::Up);
    assert_eq!(s.pending, Direction::Up);
    // Not applied until the next tick
    assert_eq!(s.heading, Direction::Right);
    assert_eq!(s.head(), Position::new(12, 12));
}

#[test]
fn turn_ignores_reversal() {
    let s = turn(&make_state(), Direction::Left);
    assert_eq!(s.pending, Direction::Right);
    assert_eq!(s, make_state());
}

#[test]
fn two_turns_within_one_tick_cannot_reverse() {
    // Up then Left before the tick: Left reverses the actual heading
    let s = turn(&turn(&make_state(), Direction::Up), Direction::Left);
    assert_eq!(s.pending, Direction::Up);

    let (s, outcome) = tick(&s, &mut seeded_rng());
    assert_eq!(outcome, TickOutcome::Moved);
    assert_eq!(s.head(), Position::new(12, 11));
}

// ── tick: movement ────────────────────────────────────────────────────────────

#[test]
fn three_ticks_move_head_three_cells_right() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    for _ in 0..3 {
        let (next, outcome) = tick(&s, &mut rng);
        assert_eq!(outcome, TickOutcome::Moved);
        s = next;
    }
    assert_eq!(s.head(), Position::new(15, 12));
    assert_eq!(s.len(), 6);
    assert_eq!(s.snake[5], Position::new(10, 12));
}

#[test]
fn segments_follow_their_predecessor() {
    let before = turn(&make_state(), Direction::Down);
    let (after, _) = tick(&before, &mut seeded_rng());
    assert_eq!(after.head(), Position::new(12, 13));
    assert_eq!(&after.snake[1..], &before.snake[..5]);
    assert_eq!(after.heading, Direction::Down);
}

#[test]
fn tick_does_not_mutate_original() {
    let s = make_state();
    let _ = tick(&s, &mut seeded_rng());
    assert_eq!(s, make_state());
}

// ── tick: apples ──────────────────────────────────────────────────────────────

#[test]
fn eating_grows_scores_and_relocates_apple() {
    let mut s = make_state();
    s.apple = Position::new(13, 12);

    let mut rng = seeded_rng();
    let (s2, outcome) = tick(&s, &mut rng);

    assert_eq!(outcome, TickOutcome::AteApple);
    assert_eq!(s2.len(), 7);
    assert_eq!(s2.score, 1);
    assert_eq!(s2.high_score, 1);
    // The new segment sits on the cell the tail just left
    assert_eq!(s2.snake[6], Position::new(7, 12));
    // The replacement apple is the next draw from the RNG
    let expected = spawn_apple(24, 24, &mut seeded_rng());
    assert_eq!(s2.apple, expected);
}

#[test]
fn high_score_only_moves_when_beaten() {
    let mut s = make_state();
    s.apple = Position::new(13, 12);
    s.high_score = 10;

    let (s2, _) = tick(&s, &mut seeded_rng());
    assert_eq!(s2.score, 1);
    assert_eq!(s2.high_score, 10);
}

#[test]
fn growth_is_exactly_one_iff_head_lands_on_apple() {
    let mut rng = seeded_rng();
    let mut s = init_state(Difficulty::Medium, 0, &mut rng);

    for _ in 0..5_000 {
        if !s.is_running() {
            s = init_state(Difficulty::Medium, s.high_score, &mut rng);
        }
        let direction = match rng.gen_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        };
        let before = turn(&s, direction);
        let (after, _) = tick(&before, &mut rng);

        let ate = after.head() == before.apple;
        assert_eq!(after.len(), before.len() + ate as usize);
        assert_eq!(after.score, before.score + ate as u32);
        assert!(after.high_score >= before.high_score);
        s = after;
    }
}

// ── tick: collisions ──────────────────────────────────────────────────────────

#[test]
fn wall_ends_the_round() {
    let mut s = make_state();
    s.snake = (0..6).map(|i| Position::new(23 - i, 5)).collect();

    let (s2, outcome) = tick(&s, &mut seeded_rng());
    assert_eq!(outcome, TickOutcome::GameOver(Collision::Wall));
    assert_eq!(s2.status, GameStatus::GameOver);
    assert_eq!(s2.len(), 6);

    // Frozen until reset
    let (s3, outcome) = tick(&s2, &mut seeded_rng());
    assert_eq!(outcome, TickOutcome::Idle);
    assert_eq!(s3, s2);
}

#[test]
fn top_wall_ends_the_round() {
    let mut s = make_state();
    s.snake = (0..6).map(|i| Position::new(3, i)).collect();
    s.heading = Direction::Up;
    s.pending = Direction::Up;

    let (s2, outcome) = tick(&s, &mut seeded_rng());
    assert_eq!(outcome, TickOutcome::GameOver(Collision::Wall));
    assert_eq!(s2.head(), Position::new(3, -1));
}

#[test]
fn biting_the_body_ends_the_round() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    for direction in [Direction::Down, Direction::Left] {
        let (next, outcome) = tick(&turn(&s, direction), &mut rng);
        assert_eq!(outcome, TickOutcome::Moved);
        s = next;
    }
    let (s, outcome) = tick(&turn(&s, Direction::Up), &mut rng);
    assert_eq!(outcome, TickOutcome::GameOver(Collision::Body));
    assert_eq!(s.status, GameStatus::GameOver);
    assert_eq!(s.head(), Position::new(11, 12));
}

#[test]
fn entering_the_vacated_tail_cell_ends_the_round() {
    let mut s = make_state();
    // 2x3 loop: head at (1,1) came from the right, tail at (1,2) just below it
    s.snake = vec![
        Position::new(1, 1),
        Position::new(2, 1),
        Position::new(2, 2),
        Position::new(2, 3),
        Position::new(1, 3),
        Position::new(1, 2),
    ];
    s.heading = Direction::Left;
    s.pending = Direction::Down;

    let (s2, outcome) = tick(&s, &mut seeded_rng());
    assert_eq!(outcome, TickOutcome::GameOver(Collision::Body));
    assert_eq!(s2.status, GameStatus::GameOver);
    assert_eq!(s2.head(), Position::new(1, 2));
    assert_eq!(s2.len(), 6);
}

#[test]
fn detect_collision_on_clean_state_is_none() {
    assert_eq!(detect_collision(&make_state(), Position::new(6, 12)), None);
}

#[test]
fn detect_collision_counts_the_vacated_cell_as_body() {
    let s = make_state();
    assert_eq!(
        detect_collision(&s, Position::new(12, 12)),
        Some(Collision::Body)
    );
}

#[test]
fn empty_snake_is_left_alone() {
    let mut s = make_state();
    s.snake.clear();

    let (s2, outcome) = tick(&s, &mut seeded_rng());
    assert_eq!(outcome, TickOutcome::Idle);
    assert_eq!(s2, s);
    assert_eq!(detect_collision(&s, Position::new(0, 0)), None);
}
