//! Input adapters for the explorer.
//!
//! This module contains adapters that receive input from the host window
//! and translate them into session input events.

#[cfg(feature = "gui")]
pub mod gui;
