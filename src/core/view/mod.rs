pub mod view_state;

pub use view_state::{DragAnchor, MIN_ZOOM, ViewState};
