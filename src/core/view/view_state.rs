use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use log::debug;

/// Smallest zoom a wheel update may produce.
pub const MIN_ZOOM: f64 = 1e-9;

const WHEEL_SCALE: f64 = 1000.0;

/// Pointer position where the current drag started, in surface pixels.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct DragAnchor {
    pub x: f64,
    pub y: f64,
}

/// Zoom and pan of one rendering surface.
///
/// `zoom` is pixels per complex-plane unit, so larger values show a smaller
/// region. It is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    drag_anchor: Option<DragAnchor>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&MandelbrotConfig::default())
    }
}

impl ViewState {
    /// Returns `None` when `zoom` is not a positive finite number.
    #[must_use]
    pub fn new(zoom: f64, offset_x: f64, offset_y: f64) -> Option<Self> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return None;
        }

        Some(Self {
            zoom,
            offset_x,
            offset_y,
            drag_anchor: None,
        })
    }

    #[must_use]
    pub fn from_config(config: &MandelbrotConfig) -> Self {
        Self {
            zoom: sanitise_zoom(config.zoom),
            offset_x: config.offset_x,
            offset_y: config.offset_y,
            drag_anchor: None,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    #[must_use]
    pub fn drag_anchor(&self) -> Option<DragAnchor> {
        self.drag_anchor
    }

    #[must_use]
    pub fn pixel_to_complex(&self, px: f64, py: f64, width: u32, height: u32) -> Complex {
        Complex {
            real: (px - f64::from(width) / 2.0) / self.zoom + self.offset_x,
            imag: (py - f64::from(height) / 2.0) / self.zoom + self.offset_y,
        }
    }

    /// Inverse of [`Self::pixel_to_complex`].
    #[must_use]
    pub fn complex_to_pixel(&self, c: Complex, width: u32, height: u32) -> (f64, f64) {
        (
            (c.real - self.offset_x) * self.zoom + f64::from(width) / 2.0,
            (c.imag - self.offset_y) * self.zoom + f64::from(height) / 2.0,
        )
    }

    /// Scales zoom by `1 + delta_y / 1000`. Results at or below zero clamp to
    /// [`MIN_ZOOM`]; non-finite results are dropped. Returns whether the zoom
    /// changed.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        let mut zoom = self.zoom + delta_y * self.zoom / WHEEL_SCALE;

        if zoom.is_nan() || zoom.is_infinite() {
            debug!("ignoring wheel delta {} that gives non-finite zoom", delta_y);
            return false;
        }

        if zoom <= 0.0 {
            debug!("clamping zoom {} to {}", zoom, MIN_ZOOM);
            zoom = MIN_ZOOM;
        }

        let changed = zoom != self.zoom;
        self.zoom = zoom;

        changed
    }

    pub fn begin_drag(&mut self, px: f64, py: f64) {
        self.drag_anchor = Some(DragAnchor { x: px, y: py });
    }

    /// Applies the offset since the drag anchor. The anchor stays put, so
    /// every call during one drag adds the full distance from the anchor.
    pub fn update_drag(&mut self, px: f64, py: f64) {
        if let Some(anchor) = self.drag_anchor {
            self.apply_drag_delta(anchor, px, py);
        }
    }

    pub fn end_drag(&mut self, px: f64, py: f64) {
        if let Some(anchor) = self.drag_anchor.take() {
            self.apply_drag_delta(anchor, px, py);
        }
    }

    pub fn reset_to(&mut self, config: &MandelbrotConfig) {
        *self = Self::from_config(config);
    }

    fn apply_drag_delta(&mut self, anchor: DragAnchor, px: f64, py: f64) {
        self.offset_x += (anchor.x - px) / self.zoom / 2.0;
        self.offset_y += (anchor.y - py) / self.zoom / 2.0;
    }
}

fn sanitise_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        MIN_ZOOM
    }
}
