//! GUI input adapter for interactive exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for the framebuffer the renderer paints into, and egui for the
//! view readout.

pub mod app;
pub mod commands;
