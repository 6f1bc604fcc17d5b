//! Render device implementations
//!
//! Only the headless recording backend lives in-tree; GPU-backed devices
//! implement [`crate::render::api::RenderDevice`] out of tree.

pub mod headless;

pub use headless::{DeviceStats, HeadlessDevice};
