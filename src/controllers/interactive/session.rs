use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::frame_loop::{FrameLoop, TickAction};
use crate::controllers::interactive::ports::frame_scheduler::{FrameRequestId, FrameScheduler};
use crate::core::actions::render_frame::ports::surface::Surface;
use crate::core::actions::render_frame::{RenderOutcome, render_frame};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::view::ViewState;
use log::{debug, info, trace};

/// One interactive view onto one surface.
///
/// Input handlers and frame ticks both run on the host's thread. Input only
/// mutates the view and marks the frame dirty; the next tick repaints.
#[derive(Debug)]
pub struct InteractiveSession {
    config: MandelbrotConfig,
    view: ViewState,
    frame_loop: FrameLoop,
    dirty: bool,
    last_outcome: Option<RenderOutcome>,
}

impl InteractiveSession {
    #[must_use]
    pub fn new(config: MandelbrotConfig) -> Self {
        Self {
            view: ViewState::from_config(&config),
            config,
            frame_loop: FrameLoop::new(),
            dirty: true,
            last_outcome: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MandelbrotConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<RenderOutcome> {
        self.last_outcome
    }

    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        info!("starting frame loop");
        self.frame_loop.start(scheduler);
    }

    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        info!("stopping frame loop");
        self.frame_loop.stop(scheduler);
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Wheel { delta_y } => {
                if !self.view.on_wheel(delta_y) {
                    return;
                }
                debug!("wheel {} -> zoom {}", delta_y, self.view.zoom());
            }
            InputEvent::PointerDown { x, y } => {
                self.view.begin_drag(x, y);
                debug!("drag started at ({}, {})", x, y);
            }
            InputEvent::PointerMove { x, y } => {
                if !self.view.is_dragging() {
                    return;
                }
                self.view.update_drag(x, y);
            }
            InputEvent::PointerUp { x, y } => {
                if !self.view.is_dragging() {
                    return;
                }
                self.view.end_drag(x, y);
                debug!(
                    "drag ended at ({}, {}) -> offset ({}, {})",
                    x, y, self.view.offset_x, self.view.offset_y
                );
            }
            InputEvent::Resize { width, height } => {
                debug!("surface resized to {}x{}", width, height);
            }
        }

        self.dirty = true;
    }

    /// Changes the iteration budget for subsequent frames. Zero is ignored.
    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        if max_iterations == 0 || max_iterations == self.config.max_iterations {
            return;
        }

        debug!("max iterations {} -> {}", self.config.max_iterations, max_iterations);
        self.config.max_iterations = max_iterations;
        self.dirty = true;
    }

    pub fn reset_view(&mut self) {
        self.view.reset_to(&self.config);
        self.dirty = true;
    }

    /// Handles a host tick. Paints only when the view changed since the last
    /// completed frame; a drag preview leaves the frame dirty so refinement
    /// resumes once the drag ends.
    pub fn on_tick<S: Surface>(
        &mut self,
        id: FrameRequestId,
        scheduler: &mut impl FrameScheduler,
        surface: &mut S,
    ) -> Option<RenderOutcome> {
        if self.frame_loop.on_tick(id, scheduler) == TickAction::Ignore {
            trace!("ignoring tick {:?}", id);
            return None;
        }

        if !self.dirty {
            return None;
        }

        let outcome = render_frame(
            &self.view,
            surface,
            self.config.max_iterations,
            self.config.max_sloppiness,
        );

        if outcome == RenderOutcome::Complete {
            self.dirty = false;
        }

        trace!("tick {:?} rendered {:?}", id, outcome);
        self.last_outcome = Some(outcome);

        Some(outcome)
    }
}
