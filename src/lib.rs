mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::CliExportController;
pub use controllers::interactive::{
    FrameLoop, FrameRequestId, FrameScheduler, InputEvent, InteractiveSession, TickAction,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use self::core::actions::plot::plot;
pub use self::core::actions::render_frame::ports::surface::Surface;
pub use self::core::actions::render_frame::{RenderOutcome, render_frame, render_levels};
pub use self::core::data::colour::{Colour, Hsl};
pub use self::core::data::complex::Complex;
pub use self::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use self::core::fractals::mandelbrot::algorithm::{EscapeTime, escape_time};
pub use self::core::fractals::mandelbrot::colour_map::colour_for;
pub use self::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, MandelbrotConfigError};
pub use self::core::view::{DragAnchor, MIN_ZOOM, ViewState};
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::pixels::frame_surface::RgbaFrameSurface;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
