//! Collision detection after a head move.

use crate::grid::Grid;
use crate::snake::Snake;
use crate::types::WIN_SEGMENTS;

/// What the head ran into on this move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collision {
    pub ate_food: bool,
    pub hit_body: bool,
}

/// True if the head sits on the food cell. No food means nothing to eat.
pub fn eats_food(snake: &Snake, food: &Grid) -> bool {
    snake.head().shares_cell(food)
}

/// True if any non-head segment sits on the head's cell.
pub fn hits_body(snake: &Snake) -> bool {
    let head = snake.head();
    snake.body().iter().any(|segment| segment.shares_cell(&head))
}

/// True once the snake has reached the winning length.
pub fn has_won(snake: &Snake) -> bool {
    snake.len() >= WIN_SEGMENTS
}

pub fn detect(snake: &Snake, food: &Grid) -> Collision {
    Collision {
        ate_food: eats_food(snake, food),
        hit_body: hits_body(snake),
    }
}
