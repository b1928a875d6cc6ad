pub mod plot;
pub mod render_frame;
