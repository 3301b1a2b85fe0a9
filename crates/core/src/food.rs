//! Food placement.
//!
//! Cells are sampled uniformly; after `FOOD_SAMPLE_ATTEMPTS` misses the board
//! is scanned row-major from the last sample, so a nearly full board still
//! terminates.

use std::collections::VecDeque;

use crate::rng::SimpleRng;
use crate::types::{Position, FOOD_SAMPLE_ATTEMPTS};

/// Pick a free cell in `[0, tile_count)` on both axes.
///
/// Returns `None` when every cell is covered by `snake`.
pub fn place_food(
    rng: &mut SimpleRng,
    tile_count: i32,
    snake: &VecDeque<Position>,
) -> Option<Position> {
    if tile_count <= 0 {
        return None;
    }

    let side = tile_count as u32;
    let mut last = Position::new(0, 0);
    for _ in 0..FOOD_SAMPLE_ATTEMPTS {
        let candidate = Position::new(rng.next_range(side) as i32, rng.next_range(side) as i32);
        if !snake.contains(&candidate) {
            return Some(candidate);
        }
        last = candidate;
    }

    let cells = tile_count as i64 * tile_count as i64;
    let start = last.y as i64 * tile_count as i64 + last.x as i64;
    let found = (0..cells)
        .map(|offset| {
            let idx = (start + offset) % cells;
            Position::new((idx % tile_count as i64) as i32, (idx / tile_count as i64) as i32)
        })
        .find(|cell| !snake.contains(cell));

    match found {
        Some(cell) => tracing::debug!(x = cell.x, y = cell.y, "food placed by board scan"),
        None => tracing::debug!(len = snake.len(), "no free cell left for food"),
    }
    found
}
