//! Cursor-following spark trail painted on a full-screen canvas.
//!
//! `SparkField` is the simulation, `SparkAnimator` wires it to a `Host`
//! (pointer and resize events, a frame loop and a drawing surface). The
//! browser host lives in `browser`; tests drive the animator through the
//! fakes in `testing`.

pub mod animator;
pub mod browser;
pub mod error;
pub mod field;
pub mod host;
pub mod params;
pub mod spark;
pub mod surface;
#[cfg(test)]
pub mod testing;

pub use animator::SparkAnimator;
pub use browser::BrowserHost;
pub use params::SparkParams;
