//! In-memory host for exercising the spark cursor without a browser.

use std::cell::RefCell;
use std::rc::Rc;

use super::error::SparkError;
use super::host::{EventSource, FrameLoop, Host, MoveHandler, ResizeHandler};
use super::spark::Point;
use super::surface::{SparkSurface, Stroke, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize(Viewport),
    Clear,
    Stroke { points: Vec<Point>, stroke: Stroke },
}

#[derive(Clone, Default)]
pub struct RecordingSurface {
    ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }
}

impl SparkSurface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.ops.borrow_mut().push(DrawOp::Resize(viewport));
    }

    fn clear(&mut self) {
        self.ops.borrow_mut().push(DrawOp::Clear);
    }

    fn stroke_path<I>(&mut self, points: I, stroke: Stroke)
    where
        I: IntoIterator<Item = Point>,
    {
        self.ops.borrow_mut().push(DrawOp::Stroke {
            points: points.into_iter().collect(),
            stroke,
        });
    }
}

#[derive(Default)]
struct Handlers {
    on_move: Option<MoveHandler>,
    on_resize: Option<ResizeHandler>,
}

#[derive(Clone, Default)]
pub struct FakeEvents {
    handlers: Rc<RefCell<Handlers>>,
}

impl EventSource for FakeEvents {
    fn attach(&mut self, on_move: MoveHandler, on_resize: ResizeHandler) -> Result<(), SparkError> {
        let mut handlers = self.handlers.borrow_mut();
        handlers.on_move = Some(on_move);
        handlers.on_resize = Some(on_resize);
        Ok(())
    }

    fn detach(&mut self) {
        let mut handlers = self.handlers.borrow_mut();
        handlers.on_move = None;
        handlers.on_resize = None;
    }
}

#[derive(Clone, Default)]
pub struct ManualFrames {
    task: Rc<RefCell<Option<Box<dyn FnMut()>>>>,
    refuse: bool,
}

impl FrameLoop for ManualFrames {
    fn start(&mut self, frame: Box<dyn FnMut()>) -> Result<(), SparkError> {
        if self.refuse {
            return Err(SparkError::Js("requestAnimationFrame unavailable".to_string()));
        }
        *self.task.borrow_mut() = Some(frame);
        Ok(())
    }

    fn cancel(&mut self) {
        self.task.borrow_mut().take();
    }
}

/// Hands out fakes that share state with the host, so tests can fire
/// events and step frames after the animator took ownership of them.
pub struct FakeHost {
    viewport: Viewport,
    has_surface: bool,
    surface: RecordingSurface,
    events: FakeEvents,
    frames: ManualFrames,
}

impl FakeHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            has_surface: true,
            surface: RecordingSurface::default(),
            events: FakeEvents::default(),
            frames: ManualFrames::default(),
        }
    }

    pub fn without_surface(mut self) -> Self {
        self.has_surface = false;
        self
    }

    pub fn refusing_frames(mut self) -> Self {
        self.frames.refuse = true;
        self
    }

    pub fn listener_count(&self) -> usize {
        let handlers = self.events.handlers.borrow();
        handlers.on_move.is_some() as usize + handlers.on_resize.is_some() as usize
    }

    pub fn frame_scheduled(&self) -> bool {
        self.frames.task.borrow().is_some()
    }

    pub fn ops(&self) -> Vec<DrawOp> {
        self.surface.ops()
    }

    pub fn clear_ops(&self) {
        self.surface.ops.borrow_mut().clear();
    }

    pub fn pointer_move(&self, point: Point) {
        let handler = self.events.handlers.borrow_mut().on_move.take();
        if let Some(mut handler) = handler {
            handler(point);
            self.events.handlers.borrow_mut().on_move = Some(handler);
        }
    }

    pub fn resize(&self, viewport: Viewport) {
        let handler = self.events.handlers.borrow_mut().on_resize.take();
        if let Some(mut handler) = handler {
            handler(viewport);
            self.events.handlers.borrow_mut().on_resize = Some(handler);
        }
    }

    /// Runs the scheduled frame once, if there is one.
    pub fn step(&self) {
        let task = self.frames.task.borrow_mut().take();
        if let Some(mut task) = task {
            task();
            *self.frames.task.borrow_mut() = Some(task);
        }
    }
}

impl Host for FakeHost {
    type Surface = RecordingSurface;
    type Events = FakeEvents;
    type Frames = ManualFrames;

    fn viewport(&self) -> Result<Viewport, SparkError> {
        Ok(self.viewport)
    }

    fn surface(&self) -> Result<RecordingSurface, SparkError> {
        if self.has_surface {
            Ok(self.surface.clone())
        } else {
            Err(SparkError::NoCanvas)
        }
    }

    fn events(&self) -> FakeEvents {
        self.events.clone()
    }

    fn frames(&self) -> ManualFrames {
        self.frames.clone()
    }
}
