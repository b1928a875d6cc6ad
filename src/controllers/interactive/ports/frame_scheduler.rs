/// Identifies one pending "run before next display refresh" request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

/// Host display-refresh scheduling.
///
/// `request_frame` arranges for the host to deliver a tick carrying the
/// returned id before the next refresh. After `cancel_frame` that id must not
/// produce a tick; hosts that cannot retract a request may still deliver it,
/// and [`FrameLoop`](crate::controllers::interactive::FrameLoop) drops it.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequestId;
    fn cancel_frame(&mut self, id: FrameRequestId);
}
