use crate::core::actions::render_frame::ports::surface::Surface;
use crate::core::data::colour::{Colour, Hsl};
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of pixel data but got {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// An owned RGB framebuffer, usable as an off-screen [`Surface`].
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
    fill_colour: Colour,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; buffer_size(width, height)],
            fill_colour: Colour::default(),
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = buffer_size(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
            fill_colour: Colour::default(),
        })
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Reallocates the buffer for new dimensions. Contents are cleared to black.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.buffer = vec![0; buffer_size(width, height)];
    }
}

impl Surface for PixelBuffer {
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
        let Colour { r, g, b } = self.fill_colour;

        for row in y..y_end {
            let row_start = row as usize * self.width as usize;

            for column in x..x_end {
                let index = (row_start + column as usize) * BYTES_PER_PIXEL;
                self.buffer[index] = r;
                self.buffer[index + 1] = g;
                self.buffer[index + 2] = b;
            }
        }
    }
}
