pub mod compute;
pub mod engine;
pub mod entities;
pub mod high_score;
pub mod input;
pub mod schedule;
