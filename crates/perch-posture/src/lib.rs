//! Posture classification core.
//!
//! Everything in this crate is pure and per-frame: the angle at the hip is
//! recomputed from scratch for every frame and no state is carried between
//! frames. The only failure mode is a degenerate landmark triple where an
//! endpoint coincides with the vertex.

pub mod angle;
pub mod classify;
pub mod error;
pub mod sample;

pub use angle::joint_angle;
pub use classify::{DEFAULT_THRESHOLD_DEGREES, PostureClassifier, PostureLabel};
pub use error::PostureError;
pub use sample::TorsoSample;
