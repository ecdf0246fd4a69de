use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use rand::Rng;

use super::error::SparkError;
use super::field::SparkField;
use super::host::{EventSource, FrameLoop, Host, MoveHandler, ResizeHandler};
use super::params::SparkParams;
use super::spark::Point;
use super::surface::{SparkSurface, Viewport};

struct Scene<S, R> {
    field: SparkField<R>,
    surface: S,
}

impl<S: SparkSurface, R: Rng> Scene<S, R> {
    fn frame(&mut self) {
        self.surface.clear();
        self.field.tick();
        self.field.paint(&mut self.surface);
    }
}

/// A running spark cursor. Dropping it detaches every listener and cancels
/// the pending frame.
pub struct SparkAnimator<H: Host, R> {
    scene: Rc<RefCell<Scene<H::Surface, R>>>,
    events: H::Events,
    frames: H::Frames,
}

impl<H, R> SparkAnimator<H, R>
where
    H: Host,
    R: Rng + 'static,
{
    pub fn activate(host: &H, params: SparkParams, rng: R) -> Result<Self, SparkError> {
        let viewport = host.viewport()?;
        if viewport.width < params.min_viewport_width {
            return Err(SparkError::ViewportTooNarrow {
                width: viewport.width,
                min: params.min_viewport_width,
            });
        }

        let mut surface = host.surface()?;
        surface.resize(viewport);

        let scene = Rc::new(RefCell::new(Scene {
            field: SparkField::new(params, rng),
            surface,
        }));

        let mut events = host.events();
        let on_move: MoveHandler = {
            let scene = Rc::downgrade(&scene);
            Box::new(move |point: Point| {
                if let Some(scene) = scene.upgrade() {
                    scene.borrow_mut().field.spawn(point);
                }
            })
        };
        let on_resize: ResizeHandler = {
            let scene = Rc::downgrade(&scene);
            Box::new(move |viewport: Viewport| {
                if let Some(scene) = scene.upgrade() {
                    scene.borrow_mut().surface.resize(viewport);
                }
            })
        };
        if let Err(err) = events.attach(on_move, on_resize) {
            events.detach();
            return Err(err);
        }

        let mut frames = host.frames();
        if let Err(err) = frames.start(frame_task(Rc::downgrade(&scene))) {
            frames.cancel();
            events.detach();
            return Err(err);
        }

        debug!("spark cursor active at {}x{}", viewport.width, viewport.height);
        Ok(Self {
            scene,
            events,
            frames,
        })
    }

    pub fn spark_count(&self) -> usize {
        self.scene.borrow().field.len()
    }

    /// Same as dropping the animator.
    pub fn deactivate(self) {}
}

fn frame_task<S, R>(scene: Weak<RefCell<Scene<S, R>>>) -> Box<dyn FnMut()>
where
    S: SparkSurface + 'static,
    R: Rng + 'static,
{
    Box::new(move || {
        if let Some(scene) = scene.upgrade() {
            scene.borrow_mut().frame();
        }
    })
}

impl<H: Host, R> Drop for SparkAnimator<H, R> {
    fn drop(&mut self) {
        self.events.detach();
        self.frames.cancel();
        debug!("spark cursor torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparks::testing::{DrawOp, FakeHost};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn activate(host: &FakeHost) -> Result<SparkAnimator<FakeHost, StdRng>, SparkError> {
        SparkAnimator::activate(host, SparkParams::default(), StdRng::seed_from_u64(42))
    }

    #[test]
    fn activation_sizes_the_surface_and_wires_everything() {
        let host = FakeHost::new(Viewport::new(1280.0, 720.0));
        let animator = activate(&host).expect("activates on a desktop viewport");

        assert_eq!(host.listener_count(), 2);
        assert!(host.frame_scheduled());
        assert_eq!(host.ops(), vec![DrawOp::Resize(Viewport::new(1280.0, 720.0))]);
        assert_eq!(animator.spark_count(), 0);
    }

    #[rstest]
    #[case(500.0)]
    #[case(767.9)]
    fn narrow_viewport_never_activates(#[case] width: f64) {
        let host = FakeHost::new(Viewport::new(width, 900.0));
        let err = activate(&host).err();

        assert_eq!(err, Some(SparkError::ViewportTooNarrow { width, min: 768.0 }));
        assert_eq!(host.listener_count(), 0);
        assert!(!host.frame_scheduled());
        assert!(host.ops().is_empty());
    }

    #[test]
    fn missing_canvas_is_a_silent_no_op() {
        let host = FakeHost::new(Viewport::new(1280.0, 720.0)).without_surface();
        assert_eq!(activate(&host).err(), Some(SparkError::NoCanvas));
        assert_eq!(host.listener_count(), 0);
        assert!(!host.frame_scheduled());
    }

    #[test]
    fn failed_frame_start_detaches_listeners() {
        let host = FakeHost::new(Viewport::new(1280.0, 720.0)).refusing_frames();
        assert!(activate(&host).is_err());
        assert_eq!(host.listener_count(), 0);
        assert!(!host.frame_scheduled());
    }

    #[test]
    fn pointer_moves_then_ticks() {
        let host = FakeHost::new(Viewport::new(1280.0, 720.0));
        let animator = activate(&host).expect("active");

        for i in 0..10 {
            host.pointer_move(Point::new(100.0 + i as f64, 200.0));
        }
        assert_eq!(animator.spark_count(), 20);

        for _ in 0..3 {
            host.step();
        }
        assert_eq!(animator.spark_count(), 20);

        let ops = host.ops();
        let clears = ops.iter().filter(|op| **op == DrawOp::Clear).count();
        let strokes = ops.iter().filter(|op| matches!(op, DrawOp::Stroke { .. })).count();
        assert_eq!(clears, 3);
        assert_eq!(strokes, 60);
    }

    #[test]
    fn every_frame_clears_before_painting() {
        let host = FakeHost::new(Viewport::new(1024.0, 768.0));
        let _animator = activate(&host).expect("active");
        host.pointer_move(Point::new(10.0, 10.0));
        host.clear_ops();

        host.step();

        let ops = host.ops();
        assert_eq!(ops.first(), Some(&DrawOp::Clear));
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn sparks_burn_out_without_new_input() {
        let host = FakeHost::new(Viewport::new(1024.0, 768.0));
        let animator = activate(&host).expect("active");
        host.pointer_move(Point::new(10.0, 10.0));

        for _ in 0..25 {
            host.step();
        }
        assert_eq!(animator.spark_count(), 0);
        assert!(host.frame_scheduled());
    }

    #[test]
    fn resize_follows_the_viewport() {
        let host = FakeHost::new(Viewport::new(1024.0, 768.0));
        let _animator = activate(&host).expect("active");
        host.clear_ops();

        host.resize(Viewport::new(1600.0, 900.0));

        assert_eq!(host.ops(), vec![DrawOp::Resize(Viewport::new(1600.0, 900.0))]);
    }

    #[test]
    fn teardown_removes_listeners_and_pending_frame() {
        let host = FakeHost::new(Viewport::new(1280.0, 720.0));
        let animator = activate(&host).expect("active");
        host.pointer_move(Point::new(1.0, 1.0));
        host.step();

        animator.deactivate();
        assert_eq!(host.listener_count(), 0);
        assert!(!host.frame_scheduled());

        let before = host.ops();
        host.pointer_move(Point::new(2.0, 2.0));
        host.resize(Viewport::new(800.0, 600.0));
        host.step();
        assert_eq!(host.ops(), before);
    }

    #[test]
    fn reactivation_after_teardown_starts_fresh() {
        let host = FakeHost::new(Viewport::new(1280.0, 720.0));
        let first = activate(&host).expect("active");
        host.pointer_move(Point::new(1.0, 1.0));
        drop(first);

        let second = activate(&host).expect("active again");
        assert_eq!(second.spark_count(), 0);
        assert_eq!(host.listener_count(), 2);
    }
}
