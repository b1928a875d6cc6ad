//! Interactive session for live pan/zoom exploration.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent`s delivered by the host window
//! - **Output**: a `Surface` the renderer paints into
//! - **Scheduling**: a `FrameScheduler` supplying display-refresh ticks
//! - **Core**: `ViewState` and `render_frame` from `core/`

pub mod events;
mod frame_loop;
pub mod ports;
mod session;

pub use events::input::InputEvent;
pub use frame_loop::{FrameLoop, TickAction};
pub use ports::{FrameRequestId, FrameScheduler};
pub use session::InteractiveSession;
