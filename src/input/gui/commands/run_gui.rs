use std::error::Error;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveSession;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the explorer window and runs until it is closed.
pub struct RunGuiCommand {
    config: MandelbrotConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: MandelbrotConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        self.config.validate()?;

        let event_loop = EventLoop::new()?;

        // Leaked so the pixels surface can borrow it for 'static
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(
                    f64::from(self.config.width),
                    f64::from(self.config.height),
                ))
                .with_min_inner_size(LogicalSize::new(100.0, 100.0))
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window)?;
        let session = InteractiveSession::new(self.config);
        let mut app = GuiApp::new(window, &event_loop, presenter, session);

        info!("window open, {:?}", window.inner_size());
        app.start();

        event_loop.run(move |event, elwt| {
            if let Event::WindowEvent { ref event, window_id } = event {
                if window_id != window.id() {
                    return;
                }

                app.handle_window_event(event);

                match event {
                    WindowEvent::CloseRequested => {
                        app.stop();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = app.redraw() {
                            error!("render error: {e}");
                            app.stop();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.set_scale_factor(*scale_factor);
                    }
                    _ => {}
                }
            }
        })?;

        Ok(())
    }
}
