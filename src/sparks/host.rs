use super::error::SparkError;
use super::spark::Point;
use super::surface::{SparkSurface, Viewport};

pub type MoveHandler = Box<dyn FnMut(Point)>;
pub type ResizeHandler = Box<dyn FnMut(Viewport)>;

/// Pointer and resize notifications from the host.
pub trait EventSource {
    fn attach(&mut self, on_move: MoveHandler, on_resize: ResizeHandler) -> Result<(), SparkError>;

    /// Removes whatever `attach` registered. Safe to call more than once.
    fn detach(&mut self);
}

/// A repeating task paced by the display refresh.
pub trait FrameLoop {
    /// Runs `frame` on every refresh until cancelled.
    fn start(&mut self, frame: Box<dyn FnMut()>) -> Result<(), SparkError>;

    /// Drops the pending frame and the task. Safe to call more than once.
    fn cancel(&mut self);
}

/// The environment the spark cursor runs in.
pub trait Host {
    type Surface: SparkSurface + 'static;
    type Events: EventSource;
    type Frames: FrameLoop;

    fn viewport(&self) -> Result<Viewport, SparkError>;
    fn surface(&self) -> Result<Self::Surface, SparkError>;
    fn events(&self) -> Self::Events;
    fn frames(&self) -> Self::Frames;
}
