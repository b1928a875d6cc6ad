//! Port definitions for the interactive controller.
//!
//! Contains the traits the controller uses to talk to the host: the
//! display-refresh scheduler. The drawing surface port lives with the
//! renderer in `core::actions::render_frame::ports`.

pub mod frame_scheduler;

pub use frame_scheduler::{FrameRequestId, FrameScheduler};
