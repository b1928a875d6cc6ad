use crate::core::data::colour::Hsl;

/// A pixel-writable surface owned by the host. Origin is top-left.
///
/// Dimensions are read once per frame. `fill_rect` clips to the surface
/// bounds and never fails.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_colour(&mut self, colour: Hsl);
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32);
}
