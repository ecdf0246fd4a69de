use super::spark::{Point, SparkColor};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Line style for one trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: SparkColor,
    pub width: f64,
    /// Shadow blur radius; the shadow takes the stroke color.
    pub glow: f64,
}

/// Transparent overlay the sparks are painted on.
pub trait SparkSurface {
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn stroke_path<I>(&mut self, points: I, stroke: Stroke)
    where
        I: IntoIterator<Item = Point>;
}
