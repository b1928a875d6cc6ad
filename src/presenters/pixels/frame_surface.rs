use crate::core::actions::render_frame::ports::surface::Surface;
use crate::core::data::colour::{Colour, Hsl};

const BYTES_PER_PIXEL: usize = 4;

/// Borrows an RGBA8 framebuffer, such as the one `pixels` exposes, as a
/// [`Surface`]. Alpha is always written opaque.
#[derive(Debug)]
pub struct RgbaFrameSurface<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    fill_colour: Colour,
}

impl<'a> RgbaFrameSurface<'a> {
    /// Returns `None` if `frame` is not exactly `width * height` RGBA pixels.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Option<Self> {
        if frame.len() != width as usize * height as usize * BYTES_PER_PIXEL {
            return None;
        }

        Some(Self {
            frame,
            width,
            height,
            fill_colour: Colour::default(),
        })
    }
}

impl Surface for RgbaFrameSurface<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_colour(&mut self, colour: Hsl) {
        self.fill_colour = colour.to_rgb();
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);

        if x >= x_end {
            return;
        }

        let Colour { r, g, b } = self.fill_colour;
        let span = (x_end - x) as usize * BYTES_PER_PIXEL;

        for row in y..y_end {
            let start = (row as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

            for pixel in self.frame[start..start + span].chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel.copy_from_slice(&[r, g, b, 255]);
            }
        }
    }
}
