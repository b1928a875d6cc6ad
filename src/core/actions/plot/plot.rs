use rayon::prelude::*;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::fractals::mandelbrot::algorithm::escape_time;
use crate::core::fractals::mandelbrot::colour_map::colour_for;
use crate::core::view::ViewState;

/// Renders every pixel at full resolution in one pass, rows in parallel.
///
/// Writes into a fresh buffer and only reads the view, so it never races
/// with input handlers mutating the live [`ViewState`].
pub fn plot(
    view: &ViewState,
    width: u32,
    height: u32,
    max_iterations: u32,
) -> Result<PixelBuffer, PixelBufferError> {
    let row_bytes = width as usize * 3;
    let mut data = vec![0u8; row_bytes * height as usize];

    if row_bytes > 0 {
        data.par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                    let c = view.pixel_to_complex(x as f64, y as f64, width, height);
                    let result = escape_time(c, max_iterations);
                    let Colour { r, g, b } = colour_for(result.iterations, max_iterations).to_rgb();

                    pixel[0] = r;
                    pixel[1] = g;
                    pixel[2] = b;
                }
            });
    }

    PixelBuffer::from_data(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::render_frame;

    #[test]
    fn plot_matches_a_completed_progressive_frame() {
        let view = ViewState::new(120.0, -0.75, 0.1).unwrap();
        let (width, height) = (61, 47);
        let mut progressive = PixelBuffer::new(width, height);

        render_frame(&view, &mut progressive, 64, 8);
        let direct = plot(&view, width, height, 64).unwrap();

        assert_eq!(direct.buffer(), progressive.buffer());
    }

    #[test]
    fn plot_of_empty_surface_is_empty() {
        let buffer = plot(&ViewState::default(), 0, 0, 100).unwrap();

        assert!(buffer.buffer().is_empty());
    }

    #[test]
    fn plot_is_deterministic() {
        let view = ViewState::default();

        assert_eq!(
            plot(&view, 40, 30, 100).unwrap().buffer(),
            plot(&view, 40, 30, 100).unwrap().buffer()
        );
    }
}
