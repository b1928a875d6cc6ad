/// A discrete input event delivered by the host, in surface pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    /// Positive `delta_y` grows the zoom factor.
    Wheel { delta_y: f64 },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    Resize { width: u32, height: u32 },
}
