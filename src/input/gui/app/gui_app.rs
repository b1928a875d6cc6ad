use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, trace};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::interactive::{InputEvent, InteractiveSession};
use crate::core::actions::render_frame::RenderOutcome;
use crate::input::gui::app::pointer_input::PointerInputState;
use crate::input::gui::app::redraw_scheduler::RedrawScheduler;
use crate::presenters::pixels::presenter::PixelsPresenter;

const MAX_ITERATIONS_SLIDER: u32 = 5000;

pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    session: InteractiveSession,
    scheduler: RedrawScheduler,
    pointer: PointerInputState,
    last_outcome: Option<RenderOutcome>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: PixelsPresenter,
        session: InteractiveSession,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            presenter,
            session,
            scheduler: RedrawScheduler::new(window),
            pointer: PointerInputState::default(),
            last_outcome: None,
            egui_ctx,
            egui_state,
        }
    }

    pub fn start(&mut self) {
        self.session.start(&mut self.scheduler);
    }

    pub fn stop(&mut self) {
        self.session.stop(&mut self.scheduler);
    }

    /// Routes a window event to egui first, then to the session unless egui
    /// claimed it. Button releases and focus loss always reach the session so
    /// a drag cannot outlive the held button.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        let response = self.egui_state.on_window_event(self.window, event);

        if response.repaint {
            self.window.request_redraw();
        }

        let input = match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.pointer.handle_cursor_moved(position.x, position.y))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.pointer
                    .handle_mouse_input(*state, *button, response.consumed)
            }
            WindowEvent::MouseWheel { delta, .. } if !response.consumed => {
                self.pointer.handle_scroll(*delta)
            }
            WindowEvent::Focused(false) => self.pointer.reset(),
            _ => None,
        };

        if let Some(input) = input {
            self.session.handle_input(input);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Err(e) = self.presenter.resize(width, height) {
            error!("failed to resize framebuffer: {e}");
            return;
        }

        self.session.handle_input(InputEvent::Resize { width, height });
        self.window.request_redraw();
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.egui_ctx.set_pixels_per_point(scale_factor as f32);

        let size = self.window.inner_size();
        self.resize(size.width, size.height);
    }

    /// Delivers the pending frame tick, if any, then presents the framebuffer
    /// with the egui overlay.
    pub fn redraw(&mut self) -> Result<(), pixels::Error> {
        if let Some(id) = self.scheduler.take_due() {
            if let Some(mut surface) = self.presenter.surface() {
                if let Some(outcome) = self.session.on_tick(id, &mut self.scheduler, &mut surface) {
                    self.last_outcome = Some(outcome);
                }
            } else {
                trace!("no surface for tick {:?}, deferring", id);
                self.scheduler.defer(id);
            }
        }

        let egui_output = self.update_ui();

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let view = *self.session.view();
        let config = *self.session.config();
        let (width, height) = (self.presenter.width(), self.presenter.height());
        let status = match self.last_outcome {
            Some(RenderOutcome::Complete) => "complete",
            Some(RenderOutcome::Preview) => "preview",
            None => "pending",
        };
        let mut reset_requested = false;
        let mut max_iterations = config.max_iterations;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("View")
                .default_pos([10.0, 10.0])
                .default_size([220.0, 160.0])
                .show(ctx, |ui| {
                    ui.heading("Mandelbrot Explorer");
                    ui.separator();

                    ui.label(format!("Zoom: {:.3}", view.zoom()));
                    ui.label(format!("Offset: ({:.6}, {:.6})", view.offset_x, view.offset_y));
                    ui.add(
                        egui::Slider::new(&mut max_iterations, 1..=MAX_ITERATIONS_SLIDER)
                            .logarithmic(true)
                            .text("Max iterations"),
                    );
                    ui.label(format!("Max sloppiness: {}", config.max_sloppiness));

                    if ui.button("Reset view").clicked() {
                        reset_requested = true;
                    }

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", width, height));
                    ui.label(format!("Last frame: {}", status));
                });
        });

        self.session.set_max_iterations(max_iterations);

        if reset_requested {
            self.session.reset_view();
        }

        output
    }
}
