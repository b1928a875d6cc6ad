use crate::controllers::interactive::ports::frame_scheduler::{FrameRequestId, FrameScheduler};

/// Keeps exactly one frame request outstanding while running.
#[derive(Debug, Default)]
pub struct FrameLoop {
    running: bool,
    pending: Option<FrameRequestId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// The tick is current; the caller should run its frame work now. The
    /// next tick has already been requested.
    Run,
    /// The loop is stopped or the tick was superseded.
    Ignore,
}

impl FrameLoop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn pending(&self) -> Option<FrameRequestId> {
        self.pending
    }

    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.running {
            return;
        }

        self.running = true;
        self.pending = Some(scheduler.request_frame());
    }

    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        self.running = false;

        if let Some(id) = self.pending.take() {
            scheduler.cancel_frame(id);
        }
    }

    /// Handles a tick delivered by the host. Re-arms before returning
    /// [`TickAction::Run`], so the frame work itself cannot lose the loop.
    pub fn on_tick(&mut self, id: FrameRequestId, scheduler: &mut impl FrameScheduler) -> TickAction {
        if !self.running || self.pending != Some(id) {
            return TickAction::Ignore;
        }

        self.pending = Some(scheduler.request_frame());

        TickAction::Run
    }
}
