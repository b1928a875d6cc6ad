pub mod ports;
pub mod render_frame;

pub use render_frame::{RenderOutcome, render_frame, render_levels};
