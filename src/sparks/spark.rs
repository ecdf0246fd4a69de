use std::collections::VecDeque;

use super::params::SparkParams;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparkColor {
    Gold,
    Cyan,
}

impl SparkColor {
    pub const PALETTE: [SparkColor; 2] = [SparkColor::Gold, SparkColor::Cyan];

    pub fn css(self) -> &'static str {
        match self {
            SparkColor::Gold => "#FFD700",
            SparkColor::Cyan => "#00BFFF",
        }
    }
}

/// One particle of the cursor trail.
#[derive(Clone, Debug)]
pub struct Spark {
    pub position: Point,
    pub velocity: Point,
    pub life: f64,
    pub color: SparkColor,
    trail: VecDeque<Point>,
}

impl Spark {
    pub fn new(position: Point, velocity: Point, color: SparkColor, trail_len: usize) -> Self {
        let mut trail = VecDeque::with_capacity(trail_len + 1);
        trail.push_back(position);
        Self {
            position,
            velocity,
            life: 1.0,
            color,
            trail,
        }
    }

    /// Past positions, oldest first.
    pub fn trail(&self) -> impl Iterator<Item = Point> + '_ {
        self.trail.iter().copied()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_spent(&self) -> bool {
        self.life <= 0.0
    }

    /// Moves the spark one tick. `jitter` is the random nudge for this tick.
    pub fn advance(&mut self, jitter: Point, params: &SparkParams) {
        self.position.x += self.velocity.x + jitter.x;
        self.position.y += self.velocity.y + jitter.y;
        self.life -= params.life_step;

        self.trail.push_back(self.position);
        while self.trail.len() > params.trail_len {
            self.trail.pop_front();
        }
    }
}
