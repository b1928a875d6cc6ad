use std::error::Error;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::plot::plot;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::view::ViewState;

/// Renders the configured initial view once and hands it to a file presenter.
pub struct CliExportController<P: FilePresenterPort> {
    presenter: P,
    config: MandelbrotConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliExportController<P> {
    pub fn new(presenter: P, config: MandelbrotConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        self.config.validate()?;

        let MandelbrotConfig {
            width,
            height,
            max_iterations,
            ..
        } = self.config;
        let view = ViewState::from_config(&self.config);

        info!("rendering {}x{} at zoom {}, max iterations {}", width, height, view.zoom(), max_iterations);

        let start = Instant::now();
        let buffer = plot(&view, width, height, max_iterations)?;

        info!("rendered in {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    /// Writes the last generated frame. Does nothing if none was generated.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
