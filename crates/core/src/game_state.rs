//! Game state module - manages the complete game state
//!
//! This module ties together the snake, the food, the RNG and scoring. It owns
//! the tick (advance, eat, collide), steering and the Running/GameOver
//! lifecycle. Nothing here performs I/O: audio cues and redraws are driven by
//! the caller from the returned [`TickOutcome`].

use std::collections::VecDeque;

use crate::food::place_food;
use crate::rng::SimpleRng;
use crate::snapshot::RestoreError;
use crate::types::*;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// Snake covers every cell, no food can be placed
    BoardFull,
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver(Collision),
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The snake advanced one cell
    pub moved: bool,
    /// The new head landed on the food
    pub ate: bool,
    /// Set when this tick (or an earlier one) ended the game
    pub collision: Option<Collision>,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        self.collision.is_some()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Head first. Never empty.
    snake: VecDeque<Position>,
    food: Position,
    /// Buffered direction, applied by the next tick.
    direction: Direction,
    score: u32,
    tile_count: i32,
    phase: Phase,
    rng: SimpleRng,
}

impl GameState {
    /// Create a fresh game on the default 20x20 board
    pub fn new(seed: u32) -> Self {
        Self::with_tile_count(TILE_COUNT, seed)
    }

    /// Create a fresh game on a `tile_count` x `tile_count` board
    pub fn with_tile_count(tile_count: i32, seed: u32) -> Self {
        let tile_count = tile_count.max(1);
        let start = start_position(tile_count);
        let mut state = Self {
            snake: VecDeque::from([start]),
            food: start,
            direction: Direction::Still,
            score: 0,
            tile_count,
            phase: Phase::Running,
            rng: SimpleRng::new(seed),
        };
        state.reset();
        state
    }

    /// Build a running game from explicit parts.
    ///
    /// The parts must describe a state reachable at rest: a non-empty snake on
    /// the board without overlapping segments, and food on a free cell.
    pub fn from_parts(
        snake: impl IntoIterator<Item = Position>,
        food: Position,
        direction: Direction,
        score: u32,
        tile_count: i32,
        seed: u32,
    ) -> Result<Self, RestoreError> {
        let snake: VecDeque<Position> = snake.into_iter().collect();
        if snake.is_empty() {
            return Err(RestoreError::EmptySnake);
        }

        for (index, seg) in snake.iter().enumerate() {
            if !seg.in_bounds(tile_count) {
                return Err(RestoreError::SegmentOutOfBounds {
                    index,
                    x: seg.x,
                    y: seg.y,
                });
            }
            if snake.iter().take(index).any(|earlier| earlier == seg) {
                return Err(RestoreError::OverlappingSegments { index });
            }
        }

        if !food.in_bounds(tile_count) {
            return Err(RestoreError::FoodOutOfBounds {
                x: food.x,
                y: food.y,
            });
        }
        if snake.contains(&food) {
            return Err(RestoreError::FoodOnSnake {
                x: food.x,
                y: food.y,
            });
        }

        Ok(Self {
            snake,
            food,
            direction,
            score,
            tile_count,
            phase: Phase::Running,
            rng: SimpleRng::new(seed),
        })
    }

    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tile_count(&self) -> i32 {
        self.tile_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn collision(&self) -> Option<Collision> {
        match self.phase {
            Phase::Running => None,
            Phase::GameOver(c) => Some(c),
        }
    }

    /// Apply a player action. Returns whether the state changed.
    ///
    /// `ToggleMute` is not game state and always returns `false`.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => self.steer(direction),
            GameAction::Restart => self.restart(),
            GameAction::ToggleMute => false,
        }
    }

    /// Buffer a new direction for the next tick.
    ///
    /// Only a reversal of the buffered direction is rejected. Two quick turns
    /// inside one tick can still fold the head back onto the neck.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !self.is_running() || direction == Direction::Still {
            return false;
        }
        if direction.is_reverse_of(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Start over after a game over. Ignored while running.
    pub fn restart(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.reset();
        true
    }

    /// Advance the snake by one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if let Phase::GameOver(collision) = self.phase {
            return TickOutcome {
                collision: Some(collision),
                ..TickOutcome::default()
            };
        }
        if self.direction == Direction::Still {
            return TickOutcome::default();
        }

        let head = self.head().step(self.direction);
        self.snake.push_front(head);

        let mut outcome = TickOutcome {
            moved: true,
            ..TickOutcome::default()
        };

        if head == self.food {
            self.score = self.score.saturating_add(FOOD_SCORE);
            outcome.ate = true;
            match place_food(&mut self.rng, self.tile_count, &self.snake) {
                Some(food) => self.food = food,
                None => outcome.collision = Some(Collision::BoardFull),
            }
        } else {
            self.snake.pop_back();
        }

        // Evaluated after the tail moved: following the tail is legal unless
        // this tick grew the snake.
        if !head.in_bounds(self.tile_count) {
            outcome.collision = Some(Collision::Wall);
        } else if self.snake.iter().skip(1).any(|&seg| seg == head) {
            outcome.collision = Some(Collision::SelfCollision);
        }

        if let Some(collision) = outcome.collision {
            self.phase = Phase::GameOver(collision);
        }
        outcome
    }

    fn reset(&mut self) {
        let start = start_position(self.tile_count);
        self.snake.clear();
        self.snake.push_back(start);
        self.direction = Direction::Still;
        self.score = 0;
        self.phase = Phase::Running;
        match place_food(&mut self.rng, self.tile_count, &self.snake) {
            Some(food) => self.food = food,
            None => self.phase = Phase::GameOver(Collision::BoardFull),
        }
    }
}

fn start_position(tile_count: i32) -> Position {
    if START_POSITION.in_bounds(tile_count) {
        START_POSITION
    } else {
        Position::new(tile_count / 2, tile_count / 2)
    }
}
