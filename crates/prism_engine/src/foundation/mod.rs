//! Foundation layer: math, logging, and timing utilities
//!
//! These modules have no dependency on the scene or rendering layers and
//! can be used standalone.

pub mod logging;
pub mod math;
pub mod time;
