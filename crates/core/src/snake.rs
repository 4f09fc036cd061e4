//! Snake model - ordered body segments and movement resolution
//!
//! The body is stored head-first in a `VecDeque` so that both growing at the
//! head and dropping the tail are O(1).

use std::collections::VecDeque;

use crate::types::{in_bounds, Direction, Point, INITIAL_BODY};

/// Why a move ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The new head left the grid
    Wall,
    /// The new head landed on a body segment other than the current head
    SelfHit,
}

/// Result of resolving one step for a candidate head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Head entered the food cell; the body grew by one.
    Ate(Point),
    /// Head moved; the tail was dropped.
    Moved(Point),
    /// Head could not move; the body is unchanged.
    Collided(Collision),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    /// The snake every game starts with.
    pub fn new() -> Self {
        Self {
            body: INITIAL_BODY.iter().copied().collect(),
        }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments<I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let body: VecDeque<Point> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Point {
        // The body is never empty: constructors reject it and moves never shrink it.
        self.body.front().copied().unwrap_or(Point::ZERO)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    /// Whether two segments share a cell.
    pub fn overlaps_itself(&self) -> bool {
        self.body
            .iter()
            .enumerate()
            .any(|(i, p)| self.body.iter().skip(i + 1).any(|q| q == p))
    }

    /// Cell the head would enter heading `direction`.
    pub fn next_head(&self, direction: Direction) -> Point {
        self.head().shifted(direction)
    }

    /// Whether `p` hits the body, ignoring the current head.
    ///
    /// The tail still counts even though a plain move would vacate it.
    pub fn hits_body(&self, p: Point) -> bool {
        self.body.iter().skip(1).any(|&segment| segment == p)
    }

    /// Check whether `p` ends the game as a new head.
    pub fn collision_at(&self, p: Point) -> Option<Collision> {
        if !in_bounds(p) {
            Some(Collision::Wall)
        } else if self.hits_body(p) {
            Some(Collision::SelfHit)
        } else {
            None
        }
    }

    /// Resolve a move of the head to `new_head`.
    ///
    /// Precedence: food first, then wall/self collision, then a plain move.
    pub fn step_to(&mut self, new_head: Point, food: Point) -> Step {
        if new_head == food {
            self.body.push_front(new_head);
            return Step::Ate(new_head);
        }

        if let Some(collision) = self.collision_at(new_head) {
            return Step::Collided(collision);
        }

        self.body.push_front(new_head);
        self.body.pop_back();
        Step::Moved(new_head)
    }

    /// Resolve one step heading `direction`.
    pub fn step(&mut self, direction: Direction, food: Point) -> Step {
        let new_head = self.next_head(direction);
        self.step_to(new_head, food)
    }

    /// Restore the initial body in place (keeps the allocation).
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(INITIAL_BODY.iter().copied());
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
