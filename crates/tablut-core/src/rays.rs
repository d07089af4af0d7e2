use std::sync::LazyLock;

use arrayvec::ArrayVec;

use crate::constants::{NUM_SQUARES, SIZE, SQUARES};
use crate::types::{Direction, Square};

/// Squares reachable by a straight slide, nearest first.
pub type Ray = ArrayVec<Square, { SIZE - 1 }>;

static ROOK_RAYS: LazyLock<RookRays> = LazyLock::new(RookRays::new);

#[derive(Debug, Clone)]
pub struct RookRays {
    rays: Vec<[Ray; 4]>,
}

pub fn rook_rays() -> &'static RookRays {
    &ROOK_RAYS
}

impl RookRays {
    fn new() -> Self {
        let mut rays = Vec::with_capacity(NUM_SQUARES);
        for square in SQUARES {
            rays.push(Direction::ALL.map(|dir| {
                let mut ray = Ray::new();
                let mut steps = 1;
                while let Some(target) = square.rook_move(dir, steps) {
                    ray.push(target);
                    steps += 1;
                }
                ray
            }));
        }
        Self { rays }
    }

    pub fn ray(&self, square: Square, dir: Direction) -> &[Square] {
        &self.rays[square.index()][dir as usize]
    }

    /// The square `steps` along `dir`, read from the table.
    pub fn nth(&self, square: Square, dir: Direction, steps: usize) -> Option<Square> {
        steps
            .checked_sub(1)
            .and_then(|i| self.ray(square, dir).get(i).copied())
    }
}
