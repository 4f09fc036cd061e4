//! Food placement.
//!
//! Rejection sampling first (cheap while the snake is short), then a uniform
//! pick over the free cells so placement always terminates.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{in_bounds, Point, CELL_COUNT, COLUMN_COUNT, FOOD_PLACEMENT_ATTEMPTS};

/// Pick a random empty cell for the next food item.
///
/// Returns `None` only when the snake covers the whole grid.
pub fn place_food(rng: &mut SimpleRng, snake: &Snake) -> Option<Point> {
    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let candidate = rng.next_point();
        if !snake.contains(candidate) {
            return Some(candidate);
        }
    }

    let mut occupied = [false; CELL_COUNT];
    for p in snake.segments() {
        if let Some(i) = cell_index(p) {
            occupied[i] = true;
        }
    }

    let free: ArrayVec<Point, CELL_COUNT> = occupied
        .iter()
        .enumerate()
        .filter(|&(_, &taken)| !taken)
        .map(|(i, _)| {
            Point::new(
                (i % COLUMN_COUNT as usize) as i32,
                (i / COLUMN_COUNT as usize) as i32,
            )
        })
        .collect();

    if free.is_empty() {
        return None;
    }
    let nth = rng.next_range(free.len() as u32) as usize;
    free.get(nth).copied()
}

fn cell_index(p: Point) -> Option<usize> {
    if !in_bounds(p) {
        return None;
    }
    Some((p.y * COLUMN_COUNT + p.x) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ROW_COUNT;

    /// Snake covering every cell except `holes`, in boustrophedon order.
    fn snake_filling_all_but(holes: &[Point]) -> Option<Snake> {
        let mut cells = Vec::new();
        for y in 0..ROW_COUNT {
            let xs: Vec<i32> = if y % 2 == 0 {
                (0..COLUMN_COUNT).collect()
            } else {
                (0..COLUMN_COUNT).rev().collect()
            };
            for x in xs {
                let p = Point::new(x, y);
                if !holes.contains(&p) {
                    cells.push(p);
                }
            }
        }
        Snake::from_segments(cells)
    }

    #[test]
    fn test_food_never_on_snake() {
        let snake = Snake::new();
        let mut rng = SimpleRng::new(42);
        for _ in 0..500 {
            let food = place_food(&mut rng, &snake).unwrap();
            assert!(in_bounds(food));
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn test_nearly_full_board_finds_the_last_hole() {
        let hole = Point::new(7, 11);
        let snake = snake_filling_all_but(&[hole]).unwrap();
        assert_eq!(snake.len(), CELL_COUNT - 1);

        let mut rng = SimpleRng::new(3);
        assert_eq!(place_food(&mut rng, &snake), Some(hole));
    }

    #[test]
    fn test_full_board_has_no_place() {
        let snake = snake_filling_all_but(&[]).unwrap();
        let mut rng = SimpleRng::new(3);
        assert_eq!(place_food(&mut rng, &snake), None);
    }

    #[test]
    fn test_placement_is_deterministic_per_seed() {
        let snake = Snake::new();
        let mut a = SimpleRng::new(2024);
        let mut b = SimpleRng::new(2024);
        for _ in 0..20 {
            assert_eq!(place_food(&mut a, &snake), place_food(&mut b, &snake));
        }
    }
}
