//! Aim simulation engine.
//!
//! Camera orientation, angular projection, the shared session timer and the
//! two training modes. Everything here is pure state; windowing, rendering
//! and persistence live in the host.

pub mod angles;
pub mod camera;
pub mod config;
pub mod gridshot;
pub mod history;
pub mod projection;
pub mod session;
pub mod timer;
pub mod tracking;
