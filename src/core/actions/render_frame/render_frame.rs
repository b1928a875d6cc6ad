use crate::core::actions::render_frame::ports::surface::Surface;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::algorithm::escape_time;
use crate::core::fractals::mandelbrot::colour_map::colour_for;
use crate::core::view::ViewState;

/// How far a frame got through the level sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Every level ran; each pixel holds its own full-resolution colour.
    Complete,
    /// A drag was in progress, so only the coarsest level was painted.
    Preview,
}

/// Tile sizes for each refinement pass, coarsest first.
///
/// `max_sloppiness` is rounded down to a power of two; zero behaves like one.
#[must_use]
pub fn render_levels(max_sloppiness: u32) -> Vec<u32> {
    let coarsest = max_sloppiness.max(1).ilog2();

    (0..=coarsest).rev().map(|shift| 1 << shift).collect()
}

/// Whether the tile at `origin` is painted in the pass for `level`.
///
/// Finer passes skip tiles whose origin sits on the previous pass's grid,
/// since the coarser tile already holds that pixel's exact colour. While
/// dragging only the coarsest pass paints at all.
#[must_use]
pub fn should_paint_tile(origin: Point, level: u32, is_coarsest: bool, dragging: bool) -> bool {
    if is_coarsest {
        return true;
    }

    if dragging {
        return false;
    }

    let on_coarser_grid = (origin.x / level) % 2 == 0 && (origin.y / level) % 2 == 0;

    !on_coarser_grid
}

/// Paints one frame as a sequence of progressively finer passes.
///
/// Tiles are visited row by row within a level, and each is flat-filled
/// with the colour of its top-left pixel. A zero-sized surface paints
/// nothing.
pub fn render_frame<S: Surface>(
    view: &ViewState,
    surface: &mut S,
    max_iterations: u32,
    max_sloppiness: u32,
) -> RenderOutcome {
    let width = surface.width();
    let height = surface.height();
    let levels = render_levels(max_sloppiness);
    let dragging = view.is_dragging();

    for (index, &level) in levels.iter().enumerate() {
        let is_coarsest = index == 0;

        for y in (0..height).step_by(level as usize) {
            for x in (0..width).step_by(level as usize) {
                let origin = Point { x, y };

                if !should_paint_tile(origin, level, is_coarsest, dragging) {
                    continue;
                }

                let c = view.pixel_to_complex(f64::from(x), f64::from(y), width, height);
                let result = escape_time(c, max_iterations);

                surface.set_colour(colour_for(result.iterations, max_iterations));
                surface.fill_rect(x, y, level, level);
            }
        }

        if dragging {
            return RenderOutcome::Preview;
        }
    }

    RenderOutcome::Complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::{Colour, Hsl};
    use crate::core::data::pixel_buffer::PixelBuffer;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum SurfaceCall {
        SetColour(Hsl),
        FillRect { x: u32, y: u32, width: u32, height: u32 },
    }

    struct RecordingSurface {
        width: u32,
        height: u32,
        calls: Vec<SurfaceCall>,
    }

    impl RecordingSurface {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                calls: Vec::new(),
            }
        }

        fn fills(&self) -> Vec<(u32, u32, u32)> {
            self.calls
                .iter()
                .filter_map(|call| match *call {
                    SurfaceCall::FillRect { x, y, width, .. } => Some((x, y, width)),
                    SurfaceCall::SetColour(_) => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn set_colour(&mut self, colour: Hsl) {
            self.calls.push(SurfaceCall::SetColour(colour));
        }

        fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
            self.calls.push(SurfaceCall::FillRect {
                x,
                y,
                width,
                height,
            });
        }
    }

    fn dragging_view() -> ViewState {
        let mut view = ViewState::default();
        view.begin_drag(10.0, 10.0);
        view
    }

    #[test]
    fn levels_descend_by_powers_of_two() {
        assert_eq!(render_levels(8), vec![8, 4, 2, 1]);
        assert_eq!(render_levels(16), vec![16, 8, 4, 2, 1]);
        assert_eq!(render_levels(1), vec![1]);
    }

    #[test]
    fn levels_round_down_odd_sloppiness() {
        assert_eq!(render_levels(12), vec![8, 4, 2, 1]);
        assert_eq!(render_levels(0), vec![1]);
    }

    #[test]
    fn coarsest_level_paints_every_tile() {
        assert!(should_paint_tile(Point { x: 0, y: 0 }, 8, true, false));
        assert!(should_paint_tile(Point { x: 0, y: 0 }, 8, true, true));
    }

    #[test]
    fn finer_levels_skip_tiles_on_the_coarser_grid() {
        assert!(!should_paint_tile(Point { x: 0, y: 0 }, 4, false, false));
        assert!(!should_paint_tile(Point { x: 8, y: 16 }, 4, false, false));
        assert!(should_paint_tile(Point { x: 4, y: 0 }, 4, false, false));
        assert!(should_paint_tile(Point { x: 0, y: 4 }, 4, false, false));
        assert!(should_paint_tile(Point { x: 4, y: 4 }, 4, false, false));
    }

    #[test]
    fn finer_levels_skip_everything_while_dragging() {
        assert!(!should_paint_tile(Point { x: 4, y: 4 }, 4, false, true));
        assert!(!should_paint_tile(Point { x: 1, y: 0 }, 1, false, true));
    }

    #[test]
    fn static_frame_walks_levels_coarsest_first_in_raster_order() {
        let mut surface = RecordingSurface::new(4, 4);

        let outcome = render_frame(&ViewState::default(), &mut surface, 20, 2);

        assert_eq!(outcome, RenderOutcome::Complete);
        assert_eq!(
            surface.fills(),
            vec![
                // level 2
                (0, 0, 2),
                (2, 0, 2),
                (0, 2, 2),
                (2, 2, 2),
                // level 1, skipping even/even origins
                (1, 0, 1),
                (3, 0, 1),
                (0, 1, 1),
                (1, 1, 1),
                (2, 1, 1),
                (3, 1, 1),
                (1, 2, 1),
                (3, 2, 1),
                (0, 3, 1),
                (1, 3, 1),
                (2, 3, 1),
                (3, 3, 1),
            ]
        );
    }

    #[test]
    fn each_fill_is_preceded_by_its_colour() {
        let mut surface = RecordingSurface::new(16, 16);

        render_frame(&ViewState::default(), &mut surface, 50, 8);

        for pair in surface.calls.chunks(2) {
            assert!(matches!(pair[0], SurfaceCall::SetColour(_)));
            assert!(matches!(pair[1], SurfaceCall::FillRect { .. }));
        }
    }

    #[test]
    fn drag_frame_only_paints_coarsest_level() {
        let mut surface = RecordingSurface::new(32, 24);

        let outcome = render_frame(&dragging_view(), &mut surface, 50, 8);

        assert_eq!(outcome, RenderOutcome::Preview);
        let fills = surface.fills();
        assert_eq!(fills.len(), 4 * 3);
        assert!(fills.iter().all(|&(_, _, size)| size == 8));
    }

    #[test]
    fn zero_sized_surface_paints_nothing() {
        let mut surface = RecordingSurface::new(0, 0);

        let outcome = render_frame(&ViewState::default(), &mut surface, 100, 8);

        assert_eq!(outcome, RenderOutcome::Complete);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn static_tiles_cover_every_pixel_exactly_once_at_their_own_level() {
        let (width, height) = (37, 29);
        let mut surface = RecordingSurface::new(width, height);

        render_frame(&ViewState::default(), &mut surface, 10, 8);

        // A pixel's final colour comes from the tile whose origin is that pixel.
        let mut origins = vec![0u32; (width * height) as usize];
        for (x, y, _) in surface.fills() {
            origins[(y * width + x) as usize] += 1;
        }

        assert!(origins.iter().all(|&count| count == 1));
    }

    #[test]
    fn static_tiles_leave_no_gaps() {
        let (width, height) = (37, 29);
        let mut surface = RecordingSurface::new(width, height);

        render_frame(&ViewState::default(), &mut surface, 10, 8);

        let mut covered = vec![false; (width * height) as usize];
        for (x, y, size) in surface.fills() {
            for py in y..(y + size).min(height) {
                for px in x..(x + size).min(width) {
                    covered[(py * width + px) as usize] = true;
                }
            }
        }

        assert!(covered.iter().all(|&c| c));
    }

    #[test]
    fn centre_of_default_view_is_interior_black() {
        let mut buffer = PixelBuffer::new(300, 300);

        render_frame(&ViewState::default(), &mut buffer, 100, 8);

        assert_eq!(buffer.pixel(150, 150), Some(Colour::default()));

        assert_eq!(colour_for(100, 100), Hsl::new(0.0, 100.0, 0.0));
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let view = ViewState::new(350.0, -0.6, 0.1).unwrap();
        let mut first = PixelBuffer::new(64, 48);
        let mut second = PixelBuffer::new(64, 48);

        render_frame(&view, &mut first, 60, 8);
        render_frame(&view, &mut first, 60, 8);
        render_frame(&view, &mut second, 60, 8);

        assert_eq!(first.buffer(), second.buffer());
    }

    #[test]
    fn static_frame_matches_per_pixel_colours() {
        let view = ViewState::new(90.0, -0.5, 0.0).unwrap();
        let (width, height) = (45, 30);
        let mut buffer = PixelBuffer::new(width, height);

        render_frame(&view, &mut buffer, 40, 8);

        for y in 0..height {
            for x in 0..width {
                let c = view.pixel_to_complex(f64::from(x), f64::from(y), width, height);
                let expected = colour_for(escape_time(c, 40).iterations, 40).to_rgb();

                assert_eq!(buffer.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }
}
