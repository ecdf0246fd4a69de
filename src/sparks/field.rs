use rand::Rng;

use super::params::SparkParams;
use super::spark::{Point, Spark, SparkColor};
use super::surface::{SparkSurface, Stroke};

/// The active sparks. Paint order is spawn order.
pub struct SparkField<R> {
    sparks: Vec<Spark>,
    params: SparkParams,
    rng: R,
}

impl<R: Rng> SparkField<R> {
    pub fn new(params: SparkParams, rng: R) -> Self {
        Self {
            sparks: Vec::new(),
            params,
            rng,
        }
    }

    pub fn params(&self) -> &SparkParams {
        &self.params
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty()
    }

    pub fn spawn(&mut self, at: Point) {
        let speed = self.params.max_speed;
        for _ in 0..self.params.per_move {
            let velocity = Point::new(spread(&mut self.rng, speed), spread(&mut self.rng, speed));
            let color = SparkColor::PALETTE[self.rng.gen_range(0..SparkColor::PALETTE.len())];
            self.sparks
                .push(Spark::new(at, velocity, color, self.params.trail_len));
        }

        let excess = self.sparks.len().saturating_sub(self.params.max_sparks);
        if excess > 0 {
            self.sparks.drain(..excess);
        }
    }

    /// Advances every spark once and drops the ones that burned out.
    pub fn tick(&mut self) {
        let Self { sparks, params, rng } = self;
        let params = &*params;
        let jitter = params.jitter;
        sparks.retain_mut(|spark| {
            let nudge = Point::new(spread(rng, jitter), spread(rng, jitter));
            spark.advance(nudge, params);
            !spark.is_spent()
        });
    }

    pub fn paint<S: SparkSurface>(&self, surface: &mut S) {
        for spark in &self.sparks {
            surface.stroke_path(
                spark.trail(),
                Stroke {
                    color: spark.color,
                    width: self.params.line_width,
                    glow: self.params.glow_blur,
                },
            );
        }
    }
}

/// Uniform in `[-half, half)`, or zero when the range is empty.
fn spread<R: Rng>(rng: &mut R, half: f64) -> f64 {
    if half > 0.0 {
        rng.gen_range(-half..half)
    } else {
        0.0
    }
}
