use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window,
};
use yew::NodeRef;

use super::error::SparkError;
use super::host::{EventSource, FrameLoop, Host, MoveHandler, ResizeHandler};
use super::spark::Point;
use super::surface::{SparkSurface, Stroke, Viewport};

fn window() -> Result<Window, SparkError> {
    web_sys::window().ok_or(SparkError::NoWindow)
}

fn window_viewport() -> Result<Viewport, SparkError> {
    let window = window()?;
    let width = window.inner_width().map_err(SparkError::js)?;
    let height = window.inner_height().map_err(SparkError::js)?;
    match (width.as_f64(), height.as_f64()) {
        (Some(width), Some(height)) => Ok(Viewport::new(width, height)),
        _ => Err(SparkError::NoViewport),
    }
}

/// The browser window plus the `<canvas>` behind `canvas`.
pub struct BrowserHost {
    canvas: NodeRef,
}

impl BrowserHost {
    pub fn new(canvas: NodeRef) -> Self {
        Self { canvas }
    }
}

impl Host for BrowserHost {
    type Surface = CanvasSurface;
    type Events = WindowEvents;
    type Frames = AnimationFrameLoop;

    fn viewport(&self) -> Result<Viewport, SparkError> {
        window_viewport()
    }

    fn surface(&self) -> Result<CanvasSurface, SparkError> {
        let canvas = self
            .canvas
            .cast::<HtmlCanvasElement>()
            .ok_or(SparkError::NoCanvas)?;
        let context = canvas
            .get_context("2d")
            .map_err(SparkError::js)?
            .ok_or(SparkError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SparkError::NoContext)?;
        Ok(CanvasSurface { canvas, context })
    }

    fn events(&self) -> WindowEvents {
        WindowEvents::default()
    }

    fn frames(&self) -> AnimationFrameLoop {
        AnimationFrameLoop::default()
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl SparkSurface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
    }

    fn clear(&mut self) {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_path<I>(&mut self, points: I, stroke: Stroke)
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return;
        };

        let ctx = &self.context;
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for point in points {
            ctx.line_to(point.x, point.y);
        }
        ctx.set_stroke_style_str(stroke.color.css());
        ctx.set_line_width(stroke.width);
        ctx.set_shadow_blur(stroke.glow);
        ctx.set_shadow_color(stroke.color.css());
        ctx.stroke();
    }
}

/// `mousemove` and `resize` listeners on the window.
#[derive(Default)]
pub struct WindowEvents {
    mouse_move: Option<Closure<dyn FnMut(MouseEvent)>>,
    resize: Option<Closure<dyn FnMut()>>,
}

impl EventSource for WindowEvents {
    fn attach(&mut self, mut on_move: MoveHandler, mut on_resize: ResizeHandler) -> Result<(), SparkError> {
        let window = window()?;

        let mouse_move = Closure::wrap(Box::new(move |e: MouseEvent| {
            on_move(Point::new(e.client_x() as f64, e.client_y() as f64));
        }) as Box<dyn FnMut(MouseEvent)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "mousemove",
                mouse_move.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(SparkError::js)?;
        self.mouse_move = Some(mouse_move);

        let resize = Closure::wrap(Box::new(move || {
            match window_viewport() {
                Ok(viewport) => on_resize(viewport),
                Err(err) => warn!("skipping spark canvas resize: {}", err),
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
            .map_err(SparkError::js)?;
        self.resize = Some(resize);

        Ok(())
    }

    fn detach(&mut self) {
        let Some(window) = web_sys::window() else {
            self.mouse_move = None;
            self.resize = None;
            return;
        };

        if let Some(mouse_move) = self.mouse_move.take() {
            if let Err(err) = window
                .remove_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref())
            {
                warn!("failed to remove mousemove listener: {:?}", err);
            }
        }
        if let Some(resize) = self.resize.take() {
            if let Err(err) =
                window.remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
            {
                warn!("failed to remove resize listener: {:?}", err);
            }
        }
    }
}

impl Drop for WindowEvents {
    fn drop(&mut self) {
        self.detach();
    }
}

#[derive(Default)]
struct FrameState {
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

/// `requestAnimationFrame` loop that re-arms itself after every frame until
/// cancelled.
#[derive(Default)]
pub struct AnimationFrameLoop {
    state: Rc<RefCell<FrameState>>,
}

impl FrameLoop for AnimationFrameLoop {
    fn start(&mut self, mut frame: Box<dyn FnMut()>) -> Result<(), SparkError> {
        let state = Rc::downgrade(&self.state);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().handle = None;
            }
            frame();
            if let Err(err) = request_next(&state) {
                warn!("spark frame loop stopped: {}", err);
            }
        }) as Box<dyn FnMut()>);

        self.state.borrow_mut().callback = Some(callback);
        request_next(&Rc::downgrade(&self.state))
    }

    fn cancel(&mut self) {
        let mut state = self.state.borrow_mut();
        if let Some(handle) = state.handle.take() {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.cancel_animation_frame(handle) {
                    warn!("failed to cancel animation frame: {:?}", err);
                }
            }
        }
        state.callback = None;
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_next(state: &Weak<RefCell<FrameState>>) -> Result<(), SparkError> {
    let Some(state) = state.upgrade() else {
        return Ok(());
    };
    let mut state = state.borrow_mut();
    let Some(callback) = state.callback.as_ref() else {
        return Ok(());
    };
    let handle = window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(SparkError::js)?;
    state.handle = Some(handle);
    Ok(())
}
