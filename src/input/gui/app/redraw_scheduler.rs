use crate::controllers::interactive::{FrameRequestId, FrameScheduler};
use winit::window::Window;

/// Uses winit redraw requests as display-refresh ticks.
///
/// winit cannot retract a redraw request, so a cancelled id is simply
/// forgotten and the redraw it triggers carries no tick.
pub struct RedrawScheduler {
    window: &'static Window,
    next_id: u64,
    due: Option<FrameRequestId>,
}

impl RedrawScheduler {
    #[must_use]
    pub fn new(window: &'static Window) -> Self {
        Self {
            window,
            next_id: 0,
            due: None,
        }
    }

    /// The tick to deliver for the redraw being handled, if any.
    pub fn take_due(&mut self) -> Option<FrameRequestId> {
        self.due.take()
    }

    /// Puts back a tick that could not be delivered, without asking for
    /// another redraw.
    pub fn defer(&mut self, id: FrameRequestId) {
        self.due.get_or_insert(id);
    }
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) -> FrameRequestId {
        self.next_id += 1;
        let id = FrameRequestId(self.next_id);
        self.due = Some(id);
        self.window.request_redraw();
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        if self.due == Some(id) {
            self.due = None;
        }
    }
}
