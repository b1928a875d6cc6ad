pub mod frame_surface;
#[cfg(feature = "gui")]
pub mod presenter;
